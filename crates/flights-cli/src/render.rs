//! Rendering of lookup results for the terminal.

use std::io::Write;

use flights_core::config::{OutputFormat, SchemaConfig};
use flights_core::types::{Record, Value};

use crate::errors::CliResult;

pub fn render<W: Write>(
    records: &[Record],
    format: OutputFormat,
    schema: &SchemaConfig,
    out: &mut W,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => render_text(records, schema, out),
        OutputFormat::Json => render_json(records, out),
    }
}

/// `Got N results.` followed by one summary line per flight. The delay is
/// only shown when one is recorded and positive.
pub fn render_text<W: Write>(
    records: &[Record],
    schema: &SchemaConfig,
    out: &mut W,
) -> CliResult<()> {
    writeln!(out, "Got {} results.", records.len())?;
    for record in records {
        match summary_line(record, schema) {
            Ok(line) => writeln!(out, "{line}")?,
            Err(column) => {
                writeln!(out, "Error showing results: missing column '{column}'")?;
                break;
            }
        }
    }
    Ok(())
}

pub fn render_json<W: Write>(records: &[Record], out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

/// One line per flight; `Err` names the first column the record lacks.
pub fn summary_line(record: &Record, schema: &SchemaConfig) -> Result<String, String> {
    let id = column(record, schema.effective_flight_id())?;
    let origin = column(record, schema.effective_origin_airport())?;
    let destination = column(record, schema.effective_destination_airport())?;
    let airline = record
        .airline_name()
        .ok_or_else(|| flights_core::constants::ALIAS_AIRLINE_NAME.to_string())?;

    let mut line = format!("{id}. {origin} -> {destination} by {airline}");
    if let Some(delay) = record.delay().filter(|d| *d > 0) {
        line.push_str(&format!(", Delay: {delay} Minutes"));
    }
    Ok(line)
}

fn column<'a>(record: &'a Record, name: &str) -> Result<&'a Value, String> {
    record.get(name).ok_or_else(|| name.to_string())
}
