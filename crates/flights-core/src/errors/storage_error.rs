//! Storage-layer errors for SQLite lookups.

use super::error_code::{self, FlightsErrorCode};
use super::ConfigError;

/// Errors raised while connecting to or querying the flights database.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("failed to open {target}: {message}")]
    ConnectionFailed { target: String, message: String },

    #[error("database is busy")]
    DbBusy,

    #[error("gateway is closed")]
    Closed,

    #[error("connection lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FlightsErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } | Self::LockPoisoned => error_code::STORAGE_ERROR,
            Self::ConnectionFailed { .. } => error_code::CONNECTION_FAILED,
            Self::DbBusy => error_code::DB_BUSY,
            Self::Closed => error_code::GATEWAY_CLOSED,
            Self::Config(e) => e.error_code(),
        }
    }
}
