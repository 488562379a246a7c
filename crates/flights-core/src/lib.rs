//! flights-core: shared building blocks for the flight records lookup tool.
//!
//! - `errors`: one `thiserror` enum per subsystem plus stable error codes
//! - `config`: TOML configuration with layered resolution
//! - `tracing`: `tracing-subscriber` setup driven by `FLIGHTS_LOG`
//! - `types`: storage-neutral cell values and row records
//! - `constants`: compiled defaults

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::FlightsConfig;
pub use errors::{ConfigError, FlightsErrorCode, StorageError};
pub use types::{Record, Value};
