//! Shared constants for the flight records lookup tool.

/// Default database location (SQLAlchemy-style URI, relative path).
pub const DEFAULT_DATABASE_URI: &str = "sqlite:///data/flights.sqlite3";

/// Default SQLite busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// A flight counts as delayed when its departure delay is at least this many minutes.
pub const DELAY_THRESHOLD_MINUTES: i64 = 20;

/// Length of an IATA airport code.
pub const IATA_CODE_LENGTH: usize = 3;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "flights.toml";

/// Alias column carrying a copy of the flight identifier.
pub const ALIAS_FLIGHT_ID: &str = "FLIGHT_ID";

/// Alias column carrying a copy of the departure delay.
pub const ALIAS_DELAY: &str = "DELAY";

/// Alias column carrying the airline display name.
pub const ALIAS_AIRLINE_NAME: &str = "airline";

/// Default schema names.
pub mod schema {
    pub const FLIGHTS_TABLE: &str = "flights";
    pub const AIRLINES_TABLE: &str = "airlines";
    pub const FLIGHT_ID: &str = "ID";
    pub const ORIGIN_AIRPORT: &str = "ORIGIN_AIRPORT";
    pub const DESTINATION_AIRPORT: &str = "DESTINATION_AIRPORT";
    pub const YEAR: &str = "YEAR";
    pub const MONTH: &str = "MONTH";
    pub const DAY: &str = "DAY";
    pub const DEPARTURE_DELAY: &str = "DEPARTURE_DELAY";
    pub const AIRLINE_FK: &str = "AIRLINE";
    pub const AIRLINE_ID: &str = "ID";
    pub const AIRLINE_NAME: &str = "AIRLINE";
    pub const DATE_COLUMN: &str = "FLIGHT_DATE";
}
