//! FlightGateway: the read-only lookup facade over one SQLite connection.
//!
//! Every lookup comes in two flavours. The `try_*` methods return
//! `Result<Vec<Record>, StorageError>`. The plain methods are fail-soft: a
//! failure is logged and an empty `Vec` returned, so "no matches" and
//! "query failed" look the same to their callers.

use std::sync::Mutex;
use std::time::Duration;

use flights_core::config::FlightsConfig;
use flights_core::errors::{ConfigError, FlightsErrorCode, StorageError};
use flights_core::types::Record;
use rusqlite::{params_from_iter, Connection};

use crate::connection::{apply_read_pragmas, open_connection, to_storage_error, DatabaseTarget};
use crate::queries::rows::row_to_record;
use crate::queries::{FlightQuery, QueryCatalog};

enum ConnectionState {
    /// Not connected yet, or the last open attempt failed.
    Idle,
    Open(Connection),
    Closed,
}

pub struct FlightGateway {
    target: DatabaseTarget,
    busy_timeout: Duration,
    catalog: QueryCatalog,
    state: Mutex<ConnectionState>,
}

impl FlightGateway {
    /// Build a gateway from configuration without touching storage.
    /// The connection is opened by `connect` or by the first lookup.
    pub fn new(config: &FlightsConfig) -> Result<Self, ConfigError> {
        FlightsConfig::validate(config)?;
        let target = DatabaseTarget::parse(config.database.effective_uri())?;
        let catalog =
            QueryCatalog::build(&config.schema, config.query.effective_delay_threshold())?;

        Ok(Self {
            target,
            busy_timeout: Duration::from_millis(config.database.effective_busy_timeout_ms()),
            catalog,
            state: Mutex::new(ConnectionState::Idle),
        })
    }

    /// Wrap an already-open connection, e.g. a seeded in-memory database.
    /// `database.uri` is ignored; the busy timeout and read pragmas are
    /// applied to `conn` as for a connection the gateway opens itself.
    pub fn from_connection(conn: Connection, config: &FlightsConfig) -> Result<Self, StorageError> {
        FlightsConfig::validate(config)?;
        let catalog =
            QueryCatalog::build(&config.schema, config.query.effective_delay_threshold())?;
        let busy_timeout = Duration::from_millis(config.database.effective_busy_timeout_ms());
        conn.busy_timeout(busy_timeout).map_err(to_storage_error)?;
        apply_read_pragmas(&conn)?;

        Ok(Self {
            target: DatabaseTarget::Memory,
            busy_timeout,
            catalog,
            state: Mutex::new(ConnectionState::Open(conn)),
        })
    }

    /// Open the connection now instead of on first lookup.
    pub fn connect(&self) -> Result<(), StorageError> {
        let mut state = self.state.lock().map_err(|_| StorageError::LockPoisoned)?;
        self.ensure_open(&mut state).map(|_| ())
    }

    pub fn target(&self) -> &DatabaseTarget {
        &self.target
    }

    pub fn catalog(&self) -> &QueryCatalog {
        &self.catalog
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state.lock().as_deref(), Ok(ConnectionState::Open(_)))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state.lock().as_deref(), Ok(ConnectionState::Closed))
    }

    /// Zero or one flight with the given identifier.
    pub fn flight_by_id(&self, id: i64) -> Vec<Record> {
        self.lookup(&FlightQuery::by_id(id))
    }

    /// All flights scheduled on the given date, in storage order.
    pub fn flights_by_date(&self, day: u32, month: u32, year: i32) -> Vec<Record> {
        self.lookup(&FlightQuery::by_date(day, month, year))
    }

    /// Flights leaving `airport` with a recorded delay at or above the threshold.
    pub fn delayed_flights_by_airport(&self, airport: &str) -> Vec<Record> {
        self.lookup(&FlightQuery::delayed_by_airport(airport))
    }

    /// Flights of `airline` (exact display name) with a recorded delay at or
    /// above the threshold.
    pub fn delayed_flights_by_airline(&self, airline: &str) -> Vec<Record> {
        self.lookup(&FlightQuery::delayed_by_airline(airline))
    }

    pub fn try_flight_by_id(&self, id: i64) -> Result<Vec<Record>, StorageError> {
        self.try_lookup(&FlightQuery::by_id(id))
    }

    pub fn try_flights_by_date(
        &self,
        day: u32,
        month: u32,
        year: i32,
    ) -> Result<Vec<Record>, StorageError> {
        self.try_lookup(&FlightQuery::by_date(day, month, year))
    }

    pub fn try_delayed_flights_by_airport(
        &self,
        airport: &str,
    ) -> Result<Vec<Record>, StorageError> {
        self.try_lookup(&FlightQuery::delayed_by_airport(airport))
    }

    pub fn try_delayed_flights_by_airline(
        &self,
        airline: &str,
    ) -> Result<Vec<Record>, StorageError> {
        self.try_lookup(&FlightQuery::delayed_by_airline(airline))
    }

    /// Fail-soft lookup: errors are logged and turned into an empty result.
    pub fn lookup(&self, query: &FlightQuery) -> Vec<Record> {
        match self.try_lookup(query) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    kind = %query.kind(),
                    code = e.error_code(),
                    error = %e,
                    "error executing query"
                );
                Vec::new()
            }
        }
    }

    /// Run one lookup inside its own read transaction.
    pub fn try_lookup(&self, query: &FlightQuery) -> Result<Vec<Record>, StorageError> {
        let mut state = self.state.lock().map_err(|_| StorageError::LockPoisoned)?;
        let conn = self.ensure_open(&mut state)?;
        let (sql, params) = self.catalog.bind(query);

        let records = run_query(conn, sql, &params)?;
        tracing::debug!(kind = %query.kind(), rows = records.len(), "lookup complete");
        Ok(records)
    }

    /// Release the connection. Later calls are no-ops.
    pub fn close(&mut self) -> Result<(), StorageError> {
        let state = match self.state.get_mut() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        match std::mem::replace(state, ConnectionState::Closed) {
            ConnectionState::Open(conn) => {
                conn.close().map_err(|(_, e)| to_storage_error(e))?;
                tracing::debug!(target_db = %self.target, "connection closed");
                Ok(())
            }
            ConnectionState::Idle | ConnectionState::Closed => Ok(()),
        }
    }

    fn ensure_open<'a>(
        &self,
        state: &'a mut ConnectionState,
    ) -> Result<&'a Connection, StorageError> {
        if matches!(state, ConnectionState::Idle) {
            let conn = open_connection(&self.target, self.busy_timeout)?;
            tracing::debug!(target_db = %self.target, "connection opened");
            *state = ConnectionState::Open(conn);
        }
        match &*state {
            ConnectionState::Open(conn) => Ok(conn),
            ConnectionState::Idle | ConnectionState::Closed => Err(StorageError::Closed),
        }
    }
}

impl Drop for FlightGateway {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "failed to close flights database");
        }
    }
}

fn run_query(
    conn: &Connection,
    sql: &str,
    params: &[rusqlite::types::Value],
) -> Result<Vec<Record>, StorageError> {
    let tx = conn.unchecked_transaction().map_err(to_storage_error)?;
    let records = {
        let mut stmt = tx.prepare_cached(sql).map_err(to_storage_error)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let mut rows = stmt
            .query(params_from_iter(params.iter()))
            .map_err(to_storage_error)?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().map_err(to_storage_error)? {
            records.push(row_to_record(row, &columns).map_err(to_storage_error)?);
        }
        records
    };
    tx.commit().map_err(to_storage_error)?;
    Ok(records)
}
