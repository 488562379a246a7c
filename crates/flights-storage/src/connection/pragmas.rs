//! PRAGMA configuration for lookup connections.

use flights_core::errors::StorageError;
use rusqlite::Connection;

/// Apply read-only pragmas. `query_only` makes any accidental write fail.
pub fn apply_read_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA query_only = ON;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| StorageError::SqliteError {
        message: format!("failed to apply read pragmas: {e}"),
    })
}

/// Whether `query_only` is active on the connection.
pub fn is_query_only(conn: &Connection) -> Result<bool, StorageError> {
    let value: i64 = conn
        .pragma_query_value(None, "query_only", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(value != 0)
}
