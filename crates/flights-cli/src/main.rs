//! `flights` entry point: parse arguments, dispatch, report errors on stderr.

use flights_core::errors::FlightsErrorCode;

fn main() {
    if let Err(e) = flights_cli::run() {
        eprintln!("{}", e.coded_string());
        std::process::exit(1);
    }
}
