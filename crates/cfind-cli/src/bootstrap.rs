//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where adapters are wired together for the
//! CLI. All concrete implementations are instantiated here:
//! - Property tree and language-scoped accessor (via cfind-config)
//! - Catalog provider (via cfind-config)
//! - Compiler finder (via cfind-core)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use cfind_config::{CompilerProps, JsonFileCatalog, PropertyTree, StaticCatalog, level_hierarchy};
use cfind_core::{CatalogProvider, CompilerFinder, FinderConfig};

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Directory holding the properties files.
    pub config_dir: PathBuf,
    /// Environment level, if any.
    pub env: Option<String>,
    /// Catalog JSON file; an empty catalog is used when unset.
    pub catalog: Option<PathBuf>,
    /// Languages to resolve; all languages found when empty.
    pub languages: Vec<String>,
    pub finder: FinderConfig,
}

impl CliConfig {
    /// Build the configuration from parsed global arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config_dir: cli.config_dir.clone(),
            env: cli.env.clone(),
            catalog: cli.catalog.clone(),
            languages: cli.languages.clone(),
            finder: FinderConfig::default(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub finder: CompilerFinder,
}

/// Load configuration and wire the finder.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let levels = level_hierarchy(config.env.as_deref());
    let tree = PropertyTree::load(&config.config_dir, &levels).with_context(|| {
        format!(
            "Failed to load compiler configuration from {}",
            config.config_dir.display()
        )
    })?;
    info!(
        languages = tree.languages.len(),
        skipped_lines = tree.skipped.len(),
        levels = ?levels,
        "Loaded compiler configuration"
    );

    let props = CompilerProps::from_tree(tree, &config.languages);
    let catalog: Arc<dyn CatalogProvider> = match config.catalog {
        Some(path) => Arc::new(JsonFileCatalog::new(path)),
        None => Arc::new(StaticCatalog::empty()),
    };

    let finder = CompilerFinder::new(Arc::new(props), catalog).with_config(config.finder);
    Ok(CliContext { finder })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_resolves_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("c.defaults.properties"),
            "compilers=cg1:cg2\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("c.staging.properties"),
            "options=-O1\n",
        )
        .unwrap();

        let ctx = bootstrap(CliConfig {
            config_dir: dir.path().to_path_buf(),
            env: Some("staging".to_string()),
            ..CliConfig::default()
        })
        .unwrap();

        let compilers = ctx.finder.get_compilers().await.unwrap();
        assert_eq!(compilers.len(), 2);
        assert_eq!(compilers[1].options, "-O1");
    }

    #[tokio::test]
    async fn test_bootstrap_survives_bad_line() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("c.defaults.properties"),
            "compilers=g1\nthis line is bad\n",
        )
        .unwrap();

        let ctx = bootstrap(CliConfig {
            config_dir: dir.path().to_path_buf(),
            ..CliConfig::default()
        })
        .unwrap();

        let compilers = ctx.finder.get_compilers().await.unwrap();
        assert_eq!(compilers.len(), 1);
        assert_eq!(compilers[0].id, "g1");
    }

    #[tokio::test]
    async fn test_repeated_language_flag() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("c.defaults.properties"),
            "compilers=g1\n",
        )
        .unwrap();

        let ctx = bootstrap(CliConfig {
            config_dir: dir.path().to_path_buf(),
            languages: vec!["c".to_string(), "c".to_string()],
            ..CliConfig::default()
        })
        .unwrap();

        let report = ctx.finder.find().await.unwrap();
        assert_eq!(report.compilers.len(), 1);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_bootstrap_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = bootstrap(CliConfig {
            config_dir: dir.path().join("absent"),
            ..CliConfig::default()
        });
        assert!(result.is_err());
    }
}
