//! SQL templates for the four lookups, rendered once per schema.
//!
//! Identifiers come from `SchemaConfig` and are validated before rendering;
//! every caller-supplied value is a bound parameter.

use flights_core::config::{DateLayout, SchemaConfig};
use flights_core::constants::{ALIAS_AIRLINE_NAME, ALIAS_DELAY, ALIAS_FLIGHT_ID};
use flights_core::errors::ConfigError;
use rusqlite::types::Value as SqlValue;

use super::{FlightQuery, QueryKind};

#[derive(Debug, Clone)]
pub struct QueryCatalog {
    flight_by_id: String,
    flights_by_date: String,
    delayed_by_airport: String,
    delayed_by_airline: String,
    date_layout: DateLayout,
    delay_threshold: i64,
}

impl QueryCatalog {
    pub fn build(schema: &SchemaConfig, delay_threshold: i64) -> Result<Self, ConfigError> {
        schema.validate()?;

        let flights = quote(schema.effective_flights_table());
        let airlines = quote(schema.effective_airlines_table());
        let id = quote(schema.effective_flight_id());
        let origin = quote(schema.effective_origin_airport());
        let delay = quote(schema.effective_departure_delay());
        let airline_fk = quote(schema.effective_airline_fk());
        let airline_id = quote(schema.effective_airline_id());
        let airline_name = quote(schema.effective_airline_name());

        let base = format!(
            "SELECT f.*, a.{airline_name} AS {}, f.{id} AS {}, f.{delay} AS {}
             FROM {flights} AS f
             JOIN {airlines} AS a ON f.{airline_fk} = a.{airline_id}",
            quote(ALIAS_AIRLINE_NAME),
            quote(ALIAS_FLIGHT_ID),
            quote(ALIAS_DELAY),
        );
        let delayed = format!("f.{delay} IS NOT NULL AND f.{delay} >= ?2");

        let date_filter = match schema.effective_date_layout() {
            DateLayout::Components => format!(
                "f.{} = ?1 AND f.{} = ?2 AND f.{} = ?3",
                quote(schema.effective_year()),
                quote(schema.effective_month()),
                quote(schema.effective_day()),
            ),
            DateLayout::Combined => format!("f.{} = ?1", quote(schema.effective_date_column())),
        };

        Ok(Self {
            flight_by_id: format!("{base}\n             WHERE f.{id} = ?1"),
            flights_by_date: format!("{base}\n             WHERE {date_filter}"),
            delayed_by_airport: format!("{base}\n             WHERE f.{origin} = ?1 AND {delayed}"),
            delayed_by_airline: format!(
                "{base}\n             WHERE a.{airline_name} = ?1 AND {delayed}"
            ),
            date_layout: schema.effective_date_layout(),
            delay_threshold,
        })
    }

    /// The rendered SQL for a lookup kind.
    pub fn sql(&self, kind: QueryKind) -> &str {
        match kind {
            QueryKind::FlightById => &self.flight_by_id,
            QueryKind::FlightsByDate => &self.flights_by_date,
            QueryKind::DelayedByAirport => &self.delayed_by_airport,
            QueryKind::DelayedByAirline => &self.delayed_by_airline,
        }
    }

    pub fn delay_threshold(&self) -> i64 {
        self.delay_threshold
    }

    /// SQL plus positional parameters for `query`.
    pub fn bind(&self, query: &FlightQuery) -> (&str, Vec<SqlValue>) {
        let params = match query {
            FlightQuery::ById { id } => vec![SqlValue::Integer(*id)],
            FlightQuery::ByDate { day, month, year } => match self.date_layout {
                DateLayout::Components => vec![
                    SqlValue::Integer(i64::from(*year)),
                    SqlValue::Integer(i64::from(*month)),
                    SqlValue::Integer(i64::from(*day)),
                ],
                DateLayout::Combined => {
                    vec![SqlValue::Text(format!("{year:04}-{month:02}-{day:02}"))]
                }
            },
            FlightQuery::DelayedByAirport { airport } => vec![
                SqlValue::Text(airport.clone()),
                SqlValue::Integer(self.delay_threshold),
            ],
            FlightQuery::DelayedByAirline { airline } => vec![
                SqlValue::Text(airline.clone()),
                SqlValue::Integer(self.delay_threshold),
            ],
        };
        (self.sql(query.kind()), params)
    }
}

/// Double-quote an identifier already checked by `is_sql_identifier`.
fn quote(ident: &str) -> String {
    format!("\"{ident}\"")
}
