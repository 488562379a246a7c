//! The closed set of lookups the gateway answers.

pub mod catalog;
pub mod rows;

use std::fmt;

pub use self::catalog::QueryCatalog;

/// Which fixed template a lookup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    FlightById,
    FlightsByDate,
    DelayedByAirport,
    DelayedByAirline,
}

impl QueryKind {
    pub const ALL: [QueryKind; 4] = [
        Self::FlightById,
        Self::FlightsByDate,
        Self::DelayedByAirport,
        Self::DelayedByAirline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FlightById => "flight_by_id",
            Self::FlightsByDate => "flights_by_date",
            Self::DelayedByAirport => "delayed_flights_by_airport",
            Self::DelayedByAirline => "delayed_flights_by_airline",
        }
    }

    /// Whether the template applies the departure-delay threshold.
    pub fn filters_delay(self) -> bool {
        matches!(self, Self::DelayedByAirport | Self::DelayedByAirline)
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lookup together with its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightQuery {
    ById { id: i64 },
    ByDate { day: u32, month: u32, year: i32 },
    DelayedByAirport { airport: String },
    DelayedByAirline { airline: String },
}

impl FlightQuery {
    pub fn by_id(id: i64) -> Self {
        Self::ById { id }
    }

    pub fn by_date(day: u32, month: u32, year: i32) -> Self {
        Self::ByDate { day, month, year }
    }

    pub fn delayed_by_airport(airport: impl Into<String>) -> Self {
        Self::DelayedByAirport {
            airport: airport.into(),
        }
    }

    pub fn delayed_by_airline(airline: impl Into<String>) -> Self {
        Self::DelayedByAirline {
            airline: airline.into(),
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Self::ById { .. } => QueryKind::FlightById,
            Self::ByDate { .. } => QueryKind::FlightsByDate,
            Self::DelayedByAirport { .. } => QueryKind::DelayedByAirport,
            Self::DelayedByAirline { .. } => QueryKind::DelayedByAirline,
        }
    }
}

impl fmt::Display for FlightQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById { id } => write!(f, "flight {id}"),
            Self::ByDate { day, month, year } => {
                write!(f, "flights on {day:02}/{month:02}/{year:04}")
            }
            Self::DelayedByAirport { airport } => write!(f, "delayed flights from {airport}"),
            Self::DelayedByAirline { airline } => write!(f, "delayed flights by {airline}"),
        }
    }
}
