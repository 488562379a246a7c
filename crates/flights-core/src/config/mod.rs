//! Configuration system for the flight records lookup tool.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod database_config;
pub mod flights_config;
pub mod output_config;
pub mod query_config;
pub mod schema_config;

pub use database_config::DatabaseConfig;
pub use flights_config::{CliOverrides, FlightsConfig};
pub use output_config::{OutputConfig, OutputFormat};
pub use query_config::QueryConfig;
pub use schema_config::{is_sql_identifier, DateLayout, SchemaConfig};
