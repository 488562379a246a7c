//! Command line front end for the flight records lookup tool.
//!
//! Without a subcommand `flights` runs the interactive menu; the
//! `by-id`, `by-date`, `delayed-airline` and `delayed-airport` subcommands
//! run a single lookup and exit.

pub mod args;
pub mod commands;
pub mod errors;
pub mod input;
pub mod menu;
pub mod render;

pub use args::{Cli, Command};
pub use commands::{execute, run};
pub use errors::{CliError, CliResult};
