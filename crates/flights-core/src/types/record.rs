//! A normalized result row: ordered `(column, value)` pairs.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Value;
use crate::constants::{ALIAS_AIRLINE_NAME, ALIAS_DELAY, ALIAS_FLIGHT_ID};
use crate::constants::schema::{DESTINATION_AIRPORT, ORIGIN_AIRPORT};

/// One flight row with every native column plus the synthesized aliases.
///
/// Columns keep the order the storage engine returned them in. Key lookup is
/// exact and case-sensitive; if a name appears twice the later column wins,
/// so aliases shadow native columns of the same name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.fields.push((column.into(), value));
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flight identifier, read from the `FLIGHT_ID` alias.
    pub fn flight_id(&self) -> Option<i64> {
        self.get(ALIAS_FLIGHT_ID).and_then(Value::as_i64)
    }

    /// Departure delay in minutes; `None` means no delay data, not zero.
    pub fn delay(&self) -> Option<i64> {
        self.get(ALIAS_DELAY).and_then(Value::as_i64)
    }

    /// Airline display name from the joined airlines table.
    pub fn airline_name(&self) -> Option<&str> {
        self.get(ALIAS_AIRLINE_NAME).and_then(Value::as_str)
    }

    /// Text value of `column`, if present and textual.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    /// Origin airport under the default column naming.
    pub fn origin_airport(&self) -> Option<&str> {
        self.text(ORIGIN_AIRPORT)
    }

    /// Destination airport under the default column naming.
    pub fn destination_airport(&self) -> Option<&str> {
        self.text(DESTINATION_AIRPORT)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // a repeated name keeps its last value, as `get` does
        let last = |i: usize, name: &str| !self.fields[i + 1..].iter().any(|(n, _)| n == name);
        let entries: Vec<_> = self
            .fields
            .iter()
            .enumerate()
            .filter(|(i, (name, _))| last(*i, name))
            .map(|(_, entry)| entry)
            .collect();

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (name, value) in entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
