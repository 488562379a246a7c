//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DatabaseConfig, OutputConfig, OutputFormat, QueryConfig, SchemaConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`FLIGHTS_*`)
/// 3. Project config (`flights.toml` in the working directory, or `--config`)
/// 4. User config (`~/.flights/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FlightsConfig {
    pub database: DatabaseConfig,
    pub query: QueryConfig,
    pub schema: SchemaConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_uri: Option<String>,
    pub busy_timeout_ms: Option<u64>,
    pub delay_threshold_minutes: Option<i64>,
    pub output_format: Option<OutputFormat>,
}

impl FlightsConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit` replaces the project config lookup in `root`; unlike the
    /// implicit project file, it must exist.
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "ignoring user config");
                    }
                }
            }
        }

        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &FlightsConfig) -> Result<(), ConfigError> {
        if config.database.effective_uri().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "database.uri".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.database.effective_busy_timeout_ms() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "database.busy_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.query.effective_delay_threshold() < 0 {
            return Err(ConfigError::ValidationFailed {
                field: "query.delay_threshold_minutes".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        config.schema.validate()
    }

    /// Returns the user config path: `~/.flights/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".flights").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut FlightsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: FlightsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut FlightsConfig, other: &FlightsConfig) {
        overlay(&mut base.database.uri, &other.database.uri);
        overlay(&mut base.database.busy_timeout_ms, &other.database.busy_timeout_ms);

        overlay(
            &mut base.query.delay_threshold_minutes,
            &other.query.delay_threshold_minutes,
        );

        let (s, o) = (&mut base.schema, &other.schema);
        overlay(&mut s.flights_table, &o.flights_table);
        overlay(&mut s.airlines_table, &o.airlines_table);
        overlay(&mut s.flight_id, &o.flight_id);
        overlay(&mut s.origin_airport, &o.origin_airport);
        overlay(&mut s.destination_airport, &o.destination_airport);
        overlay(&mut s.departure_delay, &o.departure_delay);
        overlay(&mut s.airline_fk, &o.airline_fk);
        overlay(&mut s.airline_id, &o.airline_id);
        overlay(&mut s.airline_name, &o.airline_name);
        overlay(&mut s.date_layout, &o.date_layout);
        overlay(&mut s.year, &o.year);
        overlay(&mut s.month, &o.month);
        overlay(&mut s.day, &o.day);
        overlay(&mut s.date_column, &o.date_column);

        overlay(&mut base.output.format, &other.output.format);
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut FlightsConfig) {
        if let Ok(val) = std::env::var("FLIGHTS_DB_URI") {
            if !val.trim().is_empty() {
                config.database.uri = Some(val);
            }
        }
        if let Ok(val) = std::env::var("FLIGHTS_BUSY_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.database.busy_timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FLIGHTS_DELAY_THRESHOLD") {
            if let Ok(v) = val.parse::<i64>() {
                config.query.delay_threshold_minutes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FLIGHTS_OUTPUT_FORMAT") {
            if let Ok(v) = val.parse::<OutputFormat>() {
                config.output.format = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut FlightsConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.db_uri {
            config.database.uri = Some(v.clone());
        }
        if let Some(v) = cli.busy_timeout_ms {
            config.database.busy_timeout_ms = Some(v);
        }
        if let Some(v) = cli.delay_threshold_minutes {
            config.query.delay_threshold_minutes = Some(v);
        }
        if let Some(v) = cli.output_format {
            config.output.format = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn overlay<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        base.clone_from(other);
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
