//! CLI error types.

use flights_core::errors::error_code::{self, FlightsErrorCode};
use flights_core::errors::{ConfigError, StorageError};

/// Errors surfaced by the `flights` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid flight id '{input}': expected a whole number")]
    InvalidFlightId { input: String },

    #[error("invalid date '{input}': {message}")]
    InvalidDate { input: String, message: String },

    #[error("invalid airport code '{input}': expected 3 letters")]
    InvalidAirportCode { input: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlightsErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::InvalidFlightId { .. }
            | Self::InvalidDate { .. }
            | Self::InvalidAirportCode { .. } => error_code::INVALID_INPUT,
            Self::Io(_) | Self::Json(_) => error_code::IO_ERROR,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
