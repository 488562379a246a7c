//! Database connection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DATABASE_URI};

/// Where the flights database lives and how to connect to it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URI (`sqlite:///relative.db`, `sqlite:////abs.db`, or a plain path).
    /// Default: `sqlite:///data/flights.sqlite3`.
    pub uri: Option<String>,
    /// SQLite busy timeout in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
}

impl DatabaseConfig {
    pub fn effective_uri(&self) -> &str {
        self.uri.as_deref().unwrap_or(DEFAULT_DATABASE_URI)
    }

    pub fn effective_busy_timeout_ms(&self) -> u64 {
        self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS)
    }
}
