//! Catalog provider adapters.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use cfind_core::{CatalogError, CatalogProvider, CatalogSnapshot};

use crate::error::ConfigError;

/// Catalog provider that always returns the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    snapshot: CatalogSnapshot,
}

impl StaticCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// A catalog with no libraries and no tools.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(self.snapshot.clone())
    }
}

/// Catalog provider that re-reads a JSON file on every snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<CatalogSnapshot, ConfigError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "Loaded catalog");
        serde_json::from_str(&text).map_err(|source| ConfigError::Catalog {
            path: self.path.clone(),
            source,
        })
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(self.load().await?)
    }
}
