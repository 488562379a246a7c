//! Table and column names of the flights/airlines schema.
//!
//! The same four lookups run against differently-named schemas; only the
//! identifiers change. Names are validated as plain SQL identifiers before
//! they are spliced into query templates.

use serde::{Deserialize, Serialize};

use crate::constants::schema;
use crate::errors::ConfigError;

/// How the scheduled departure date is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateLayout {
    /// Separate integer YEAR / MONTH / DAY columns.
    #[default]
    Components,
    /// One text column holding `YYYY-MM-DD`.
    Combined,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SchemaConfig {
    pub flights_table: Option<String>,
    pub airlines_table: Option<String>,
    pub flight_id: Option<String>,
    pub origin_airport: Option<String>,
    pub destination_airport: Option<String>,
    pub departure_delay: Option<String>,
    /// Foreign key column in the flights table referencing the airline.
    pub airline_fk: Option<String>,
    pub airline_id: Option<String>,
    pub airline_name: Option<String>,
    pub date_layout: Option<DateLayout>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    /// Only used with `date_layout = "combined"`.
    pub date_column: Option<String>,
}

impl SchemaConfig {
    pub fn effective_flights_table(&self) -> &str {
        self.flights_table.as_deref().unwrap_or(schema::FLIGHTS_TABLE)
    }

    pub fn effective_airlines_table(&self) -> &str {
        self.airlines_table.as_deref().unwrap_or(schema::AIRLINES_TABLE)
    }

    pub fn effective_flight_id(&self) -> &str {
        self.flight_id.as_deref().unwrap_or(schema::FLIGHT_ID)
    }

    pub fn effective_origin_airport(&self) -> &str {
        self.origin_airport.as_deref().unwrap_or(schema::ORIGIN_AIRPORT)
    }

    pub fn effective_destination_airport(&self) -> &str {
        self.destination_airport
            .as_deref()
            .unwrap_or(schema::DESTINATION_AIRPORT)
    }

    pub fn effective_departure_delay(&self) -> &str {
        self.departure_delay.as_deref().unwrap_or(schema::DEPARTURE_DELAY)
    }

    pub fn effective_airline_fk(&self) -> &str {
        self.airline_fk.as_deref().unwrap_or(schema::AIRLINE_FK)
    }

    pub fn effective_airline_id(&self) -> &str {
        self.airline_id.as_deref().unwrap_or(schema::AIRLINE_ID)
    }

    pub fn effective_airline_name(&self) -> &str {
        self.airline_name.as_deref().unwrap_or(schema::AIRLINE_NAME)
    }

    pub fn effective_date_layout(&self) -> DateLayout {
        self.date_layout.unwrap_or_default()
    }

    pub fn effective_year(&self) -> &str {
        self.year.as_deref().unwrap_or(schema::YEAR)
    }

    pub fn effective_month(&self) -> &str {
        self.month.as_deref().unwrap_or(schema::MONTH)
    }

    pub fn effective_day(&self) -> &str {
        self.day.as_deref().unwrap_or(schema::DAY)
    }

    pub fn effective_date_column(&self) -> &str {
        self.date_column.as_deref().unwrap_or(schema::DATE_COLUMN)
    }

    /// Check every effective identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("schema.flights_table", self.effective_flights_table()),
            ("schema.airlines_table", self.effective_airlines_table()),
            ("schema.flight_id", self.effective_flight_id()),
            ("schema.origin_airport", self.effective_origin_airport()),
            ("schema.destination_airport", self.effective_destination_airport()),
            ("schema.departure_delay", self.effective_departure_delay()),
            ("schema.airline_fk", self.effective_airline_fk()),
            ("schema.airline_id", self.effective_airline_id()),
            ("schema.airline_name", self.effective_airline_name()),
            ("schema.year", self.effective_year()),
            ("schema.month", self.effective_month()),
            ("schema.day", self.effective_day()),
            ("schema.date_column", self.effective_date_column()),
        ];
        for (field, name) in names {
            if !is_sql_identifier(name) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("'{name}' is not a plain SQL identifier"),
                });
            }
        }
        Ok(())
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
