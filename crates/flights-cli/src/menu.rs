//! Interactive menu loop.
//!
//! Generic over the input and output streams so sessions can be scripted.

use std::io::{BufRead, Write};

use flights_core::config::{OutputFormat, SchemaConfig};
use flights_storage::{FlightGateway, FlightQuery};

use crate::errors::CliResult;
use crate::input::{parse_airline_name, parse_airport_code, parse_date, parse_flight_id};
use crate::render::render;

pub const GOODBYE: &str = "Goodbye, thanks for visiting!";
pub const TRY_AGAIN: &str = "Try again...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FlightById,
    FlightsByDate,
    DelayedByAirline,
    DelayedByAirport,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        Self::FlightById,
        Self::FlightsByDate,
        Self::DelayedByAirline,
        Self::DelayedByAirport,
        Self::Exit,
    ];

    pub fn number(self) -> u32 {
        match self {
            Self::FlightById => 1,
            Self::FlightsByDate => 2,
            Self::DelayedByAirline => 3,
            Self::DelayedByAirport => 4,
            Self::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FlightById => "Show flight by ID",
            Self::FlightsByDate => "Show flights by date",
            Self::DelayedByAirline => "Delayed flights by airline",
            Self::DelayedByAirport => "Delayed flights by origin airport",
            Self::Exit => "Exit",
        }
    }

    pub fn from_number(n: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.number() == n)
    }
}

/// Show the menu, run lookups until the user exits or input ends.
/// Lookups here are fail-soft: a failed query shows up as zero results.
pub fn run_menu<R: BufRead, W: Write>(
    gateway: &FlightGateway,
    format: OutputFormat,
    schema: &SchemaConfig,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    loop {
        show_menu(out)?;
        let Some(choice) = read_choice(input, out)? else {
            return Ok(());
        };

        let query = match choice {
            MenuChoice::Exit => {
                writeln!(out, "{GOODBYE}")?;
                return Ok(());
            }
            MenuChoice::FlightById => prompt_until(input, out, "Enter flight ID: ", |s| {
                parse_flight_id(s).map(FlightQuery::by_id)
            })?,
            MenuChoice::FlightsByDate => {
                prompt_until(input, out, "Enter date in DD/MM/YYYY format: ", |s| {
                    let (day, month, year) = parse_date(s)?;
                    Ok(FlightQuery::by_date(day, month, year))
                })?
            }
            MenuChoice::DelayedByAirline => prompt_until(input, out, "Enter airline name: ", |s| {
                Ok(FlightQuery::delayed_by_airline(parse_airline_name(s)))
            })?,
            MenuChoice::DelayedByAirport => {
                prompt_until(input, out, "Enter origin airport IATA code: ", |s| {
                    parse_airport_code(s).map(FlightQuery::delayed_by_airport)
                })?
            }
        };
        let Some(query) = query else {
            return Ok(());
        };

        tracing::info!(%query, "running lookup");
        let records = gateway.lookup(&query);
        render(&records, format, schema, out)?;
    }
}

pub fn show_menu<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out, "Menu:")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    out.flush()?;
    Ok(())
}

fn read_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> CliResult<Option<MenuChoice>> {
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if let Some(choice) = line.trim().parse().ok().and_then(MenuChoice::from_number) {
            return Ok(Some(choice));
        }
        writeln!(out, "{TRY_AGAIN}")?;
    }
}

/// Prompt until `parse` accepts a line. `None` when input ends first.
fn prompt_until<R, W, T, F>(input: &mut R, out: &mut W, prompt: &str, parse: F) -> CliResult<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> CliResult<T>,
{
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(out, "{TRY_AGAIN} {e}")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
