//! Row normalization: SQLite rows into storage-neutral records.

use flights_core::types::{Record, Value};
use rusqlite::types::ValueRef;
use rusqlite::Row;

/// Convert one result row, pairing each cell with its column name.
pub fn row_to_record(row: &Row<'_>, columns: &[String]) -> rusqlite::Result<Record> {
    let mut record = Record::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        record.push(name.as_str(), value_from_ref(row.get_ref(idx)?));
    }
    Ok(record)
}

pub fn value_from_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Integer(v),
        ValueRef::Real(v) => Value::Real(v),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
    }
}
