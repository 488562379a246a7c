//! Resolution of database URIs into something SQLite can open.
//!
//! Accepted forms:
//! - `sqlite:///relative/path.db` (three slashes, relative path)
//! - `sqlite:////absolute/path.db` (four slashes, absolute path)
//! - `sqlite://`, `sqlite:///:memory:` or `:memory:` (in-memory)
//! - anything else is taken as a plain filesystem path

use std::fmt;
use std::path::{Path, PathBuf};

use flights_core::errors::ConfigError;

const SCHEME: &str = "sqlite:";
const MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    File(PathBuf),
    Memory,
}

impl DatabaseTarget {
    pub fn parse(uri: &str) -> Result<Self, ConfigError> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(invalid(uri, "empty database URI"));
        }

        let Some(rest) = uri.strip_prefix(SCHEME) else {
            return Ok(if uri == MEMORY {
                Self::Memory
            } else {
                Self::File(PathBuf::from(uri))
            });
        };

        let rest = rest
            .strip_prefix("//")
            .ok_or_else(|| invalid(uri, "expected sqlite:///<path>"))?;
        if rest.is_empty() {
            return Ok(Self::Memory);
        }
        let path = rest
            .strip_prefix('/')
            .ok_or_else(|| invalid(uri, "host component is not supported"))?;
        if path.is_empty() || path == MEMORY {
            return Ok(Self::Memory);
        }
        Ok(Self::File(PathBuf::from(path)))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Memory => None,
        }
    }
}

impl fmt::Display for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str(MEMORY),
        }
    }
}

fn invalid(uri: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: "database.uri".to_string(),
        message: format!("{message}: '{uri}'"),
    }
}
