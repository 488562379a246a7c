//! Shared fixtures: an on-disk flights database seeded through a writable connection.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use flights_core::config::FlightsConfig;
use rusqlite::Connection;
use tempfile::TempDir;

pub const SCHEMA: &str = "
    CREATE TABLE airlines (
        ID INTEGER PRIMARY KEY,
        AIRLINE TEXT NOT NULL
    );
    CREATE TABLE flights (
        ID INTEGER PRIMARY KEY,
        YEAR INTEGER NOT NULL,
        MONTH INTEGER NOT NULL,
        DAY INTEGER NOT NULL,
        AIRLINE INTEGER NOT NULL REFERENCES airlines(ID),
        FLIGHT_NUMBER INTEGER,
        TAIL_NUMBER TEXT,
        ORIGIN_AIRPORT TEXT NOT NULL,
        DESTINATION_AIRPORT TEXT NOT NULL,
        DEPARTURE_DELAY INTEGER
    );
";

/// id, year, month, day, airline, origin, destination, delay
pub type FlightRow = (i64, i32, u32, u32, i64, &'static str, &'static str, Option<i64>);

pub const FLIGHTS: &[FlightRow] = &[
    (1, 2015, 1, 1, 3, "LAX", "JFK", None),
    (2, 2015, 1, 1, 1, "JFK", "LAX", Some(15)),
    (3, 2015, 1, 1, 2, "JFK", "ORD", Some(25)),
    (4, 2015, 1, 2, 3, "JFK", "ATL", Some(20)),
    (5, 2015, 1, 2, 3, "ATL", "JFK", Some(0)),
    (6, 2015, 2, 1, 1, "ORD", "SFO", Some(120)),
    (7, 2015, 1, 1, 3, "JFK", "BOS", None),
    (8, 2015, 1, 2, 3, "SEA", "JFK", Some(-5)),
    (9, 2015, 1, 2, 3, "SEA", "LAX", Some(19)),
];

pub const AIRLINES: &[(i64, &str)] = &[
    (1, "United Air Lines Inc."),
    (2, "American Airlines Inc."),
    (3, "Delta Air Lines Inc."),
];

pub struct Fixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flights.sqlite3");
        seed(&path);
        Self { dir, path }
    }

    pub fn config(&self) -> FlightsConfig {
        config_for(&self.path)
    }

    /// A separate writable connection, for mutating storage under a live gateway.
    pub fn writer(&self) -> Connection {
        Connection::open(&self.path).unwrap()
    }
}

pub fn config_for(path: &Path) -> FlightsConfig {
    let mut config = FlightsConfig::default();
    config.database.uri = Some(path.display().to_string());
    config
}

pub fn seed(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    for (id, name) in AIRLINES {
        conn.execute(
            "INSERT INTO airlines (ID, AIRLINE) VALUES (?1, ?2)",
            rusqlite::params![id, name],
        )
        .unwrap();
    }
    for (id, year, month, day, airline, origin, destination, delay) in FLIGHTS {
        conn.execute(
            "INSERT INTO flights (ID, YEAR, MONTH, DAY, AIRLINE, FLIGHT_NUMBER, TAIL_NUMBER,
                                  ORIGIN_AIRPORT, DESTINATION_AIRPORT, DEPARTURE_DELAY)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                id,
                year,
                month,
                day,
                airline,
                100 + id,
                format!("N{id}00AA"),
                origin,
                destination,
                delay
            ],
        )
        .unwrap();
    }
}

/// Sorted flight ids of a result set.
pub fn ids(records: &[flights_core::Record]) -> Vec<i64> {
    let mut ids: Vec<i64> = records.iter().filter_map(|r| r.flight_id()).collect();
    ids.sort_unstable();
    ids
}

/// Fixture rows matching a predicate, as sorted ids.
pub fn expected(pred: impl Fn(&FlightRow) -> bool) -> Vec<i64> {
    let mut ids: Vec<i64> = FLIGHTS.iter().filter(|f| pred(f)).map(|f| f.0).collect();
    ids.sort_unstable();
    ids
}
