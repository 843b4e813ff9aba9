//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `FinderError` to exit codes and user-facing messages.

use cfind_core::FinderError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Resolution failed.
    #[error("{0}")]
    Core(String),

    /// No compiler matches the requested id.
    #[error("No compiler named '{0}'")]
    NotFound(String),

    /// The catalog could not be read.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Output could not be produced.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::NotFound(_) => 2,
            Self::Catalog(_) => 66, // EX_NOINPUT
            Self::Output(_) => 74,  // EX_IOERR
        }
    }
}

impl From<FinderError> for CliError {
    fn from(err: FinderError) -> Self {
        match err {
            FinderError::Catalog(catalog_err) => Self::Catalog(catalog_err.to_string()),
            FinderError::IdClash { .. } => Self::Core(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
