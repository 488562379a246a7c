//! Command dispatch: load config, open the gateway, run the menu or one lookup.

use std::io::{self, BufRead, Write};
use std::path::Path;

use flights_core::config::{FlightsConfig, OutputFormat, SchemaConfig};
use flights_core::tracing::init_tracing;
use flights_storage::{FlightGateway, FlightQuery};

use crate::args::{Cli, Command};
use crate::errors::CliResult;
use crate::input::{parse_airline_name, parse_airport_code, parse_date, parse_flight_id};
use crate::menu::run_menu;
use crate::render::render;

/// Parse process arguments and run against stdin/stdout.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();

    let root = std::env::current_dir()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&cli, &root, &mut stdin.lock(), &mut stdout.lock())
}

/// Run a parsed command line. Config is resolved relative to `root`.
///
/// The connection is opened up front so a missing or unreadable database is
/// reported once instead of as empty results.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    root: &Path,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    let config = FlightsConfig::load(root, cli.config.as_deref(), Some(&cli.overrides()))?;
    let mut gateway = FlightGateway::new(&config)?;
    gateway.connect()?;
    tracing::debug!(db = %gateway.target(), "connected");

    let format = config.output.effective_format();
    let result = match &cli.command {
        None => run_menu(&gateway, format, &config.schema, input, out),
        Some(command) => run_command(&gateway, command, format, &config.schema, out),
    };

    let closed = gateway.close();
    result?;
    closed?;
    Ok(())
}

/// Run one lookup. Unlike the menu, a failed query is an error here.
pub fn run_command<W: Write>(
    gateway: &FlightGateway,
    command: &Command,
    format: OutputFormat,
    schema: &SchemaConfig,
    out: &mut W,
) -> CliResult<()> {
    let query = query_for(command)?;
    let records = gateway.try_lookup(&query)?;
    render(&records, format, schema, out)
}

/// Validate subcommand arguments into a lookup.
pub fn query_for(command: &Command) -> CliResult<FlightQuery> {
    Ok(match command {
        Command::ById { id } => FlightQuery::by_id(parse_flight_id(id)?),
        Command::ByDate { date } => {
            let (day, month, year) = parse_date(date)?;
            FlightQuery::by_date(day, month, year)
        }
        Command::DelayedAirline { airline } => {
            FlightQuery::delayed_by_airline(parse_airline_name(airline))
        }
        Command::DelayedAirport { airport } => {
            FlightQuery::delayed_by_airport(parse_airport_code(airport)?)
        }
    })
}
