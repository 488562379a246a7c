//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flights_core::config::{CliOverrides, OutputFormat};

/// Look up flights, delays and airlines in a flight records database
#[derive(Parser, Debug)]
#[command(name = "flights")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Database URI, e.g. sqlite:///data/flights.sqlite3
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Config file to use instead of ./flights.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Minimum departure delay in minutes for the delayed-flight lookups
    #[arg(long, global = true)]
    pub delay_threshold: Option<i64>,

    /// SQLite busy timeout in milliseconds
    #[arg(long, global = true)]
    pub busy_timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show flight by ID
    ById {
        /// Flight identifier
        id: String,
    },

    /// Show flights by date
    ByDate {
        /// Date in DD/MM/YYYY format
        date: String,
    },

    /// Delayed flights by airline
    DelayedAirline {
        /// Airline name, matched exactly
        airline: String,
    },

    /// Delayed flights by origin airport
    DelayedAirport {
        /// Origin airport IATA code
        airport: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            db_uri: self.db.clone(),
            busy_timeout_ms: self.busy_timeout_ms,
            delay_threshold_minutes: self.delay_threshold,
            output_format: self.format,
        }
    }
}
