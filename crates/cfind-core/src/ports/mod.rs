//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces the resolution services expect from the
//! configuration store and the catalog service. They contain no
//! implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No file formats or paths in any signature
//! - Property access is read-only and keyed by language
//! - The catalog port has exactly one method

pub mod catalog;
pub mod properties;

use thiserror::Error;

pub use catalog::{CatalogError, CatalogProvider};
pub use properties::PropertyAccessor;

#[cfg(test)]
pub use catalog::MockCatalogProvider;
#[cfg(test)]
pub use properties::MockProperties;

/// Errors that abort a resolution pass.
///
/// Configuration-shape problems (undefined groups, unknown libraries) are not
/// errors; they are reported as [`crate::ResolutionIssue`]s instead.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The catalog could not be obtained.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Compiler ids clash across languages and clashes were configured as fatal.
    #[error("Compiler ids are not distinct: {}", ids.join(", "))]
    IdClash { ids: Vec<String> },
}
