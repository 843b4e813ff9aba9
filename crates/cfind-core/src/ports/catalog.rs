//! Catalog provider port.
//!
//! The catalog (libraries and tools per language) is built elsewhere; the
//! finder only needs a snapshot of it once per resolution pass.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CatalogSnapshot;

/// Errors that can occur while obtaining a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not be reached or read.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// The catalog source was read but its content is not a valid catalog.
    #[error("Malformed catalog: {0}")]
    Malformed(String),
}

/// Port for obtaining the library/tool catalog.
///
/// Implementations may perform I/O; the finder awaits this once per pass and
/// treats the snapshot as read-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Return the current catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be produced.
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError>;
}
