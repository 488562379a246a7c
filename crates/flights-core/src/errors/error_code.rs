//! FlightsErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait FlightsErrorCode {
    /// Returns the error code string (e.g., "STORAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_BUSY: &str = "DB_BUSY";
pub const CONNECTION_FAILED: &str = "CONNECTION_FAILED";
pub const GATEWAY_CLOSED: &str = "GATEWAY_CLOSED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const IO_ERROR: &str = "IO_ERROR";
