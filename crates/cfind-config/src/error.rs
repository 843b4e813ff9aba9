//! Errors raised while loading configuration or catalog files.

use std::path::PathBuf;
use thiserror::Error;

use cfind_core::CatalogError;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file or directory could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid catalog JSON.
    #[error("Invalid catalog {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ConfigError> for CatalogError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Catalog { .. } => Self::Malformed(err.to_string()),
            ConfigError::Io { .. } => Self::Unavailable(err.to_string()),
        }
    }
}
