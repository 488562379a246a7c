//! Connection management: target resolution, read-only open, pragmas.

pub mod pragmas;
pub mod target;

use std::time::Duration;

use flights_core::errors::StorageError;
use rusqlite::{Connection, ErrorCode, OpenFlags};

pub use self::pragmas::apply_read_pragmas;
pub use self::target::DatabaseTarget;

/// Open a read-only connection to `target` with the busy timeout and read
/// pragmas applied.
pub fn open_connection(
    target: &DatabaseTarget,
    busy_timeout: Duration,
) -> Result<Connection, StorageError> {
    let conn = match target {
        DatabaseTarget::File(path) => Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        ),
        DatabaseTarget::Memory => Connection::open_in_memory(),
    }
    .map_err(|e| StorageError::ConnectionFailed {
        target: target.to_string(),
        message: e.to_string(),
    })?;

    conn.busy_timeout(busy_timeout).map_err(to_storage_error)?;
    apply_read_pragmas(&conn)?;
    Ok(conn)
}

/// Map a rusqlite error onto the storage taxonomy.
pub fn to_storage_error(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => StorageError::DbBusy,
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}
