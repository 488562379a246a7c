//! Validation of user input before it reaches the gateway.

use chrono::{Datelike, NaiveDate};
use flights_core::constants::IATA_CODE_LENGTH;

use crate::errors::{CliError, CliResult};

/// Date format accepted at the prompt and by `by-date`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_flight_id(input: &str) -> CliResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CliError::InvalidFlightId {
            input: input.trim().to_string(),
        })
}

/// Parse `DD/MM/YYYY` into `(day, month, year)`, rejecting impossible dates.
pub fn parse_date(input: &str) -> CliResult<(u32, u32, i32)> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| {
        CliError::InvalidDate {
            input: input.trim().to_string(),
            message: e.to_string(),
        }
    })?;
    Ok((date.day(), date.month(), date.year()))
}

/// Three ASCII letters, returned upper-cased.
pub fn parse_airport_code(input: &str) -> CliResult<String> {
    let code = input.trim();
    if code.len() == IATA_CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(CliError::InvalidAirportCode {
            input: code.to_string(),
        })
    }
}

/// Airline names are matched exactly; only surrounding whitespace is dropped.
pub fn parse_airline_name(input: &str) -> String {
    input.trim().to_string()
}
