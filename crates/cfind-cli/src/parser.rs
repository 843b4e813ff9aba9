//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for resolving configured compilers.
#[derive(Parser)]
#[command(name = "cfind")]
#[command(about = "Resolve compiler configuration into compiler descriptors")]
#[command(version)]
pub struct Cli {
    /// Directory holding `<source>.<level>.properties` files
    #[arg(
        long = "config-dir",
        global = true,
        env = "CFIND_CONFIG_DIR",
        default_value = "etc/config"
    )]
    pub config_dir: PathBuf,

    /// Environment level applied between `defaults` and `local`
    #[arg(long = "env", global = true, env = "CFIND_ENV")]
    pub env: Option<String>,

    /// JSON library/tool catalog (empty catalog when omitted)
    #[arg(long = "catalog", global = true, env = "CFIND_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Restrict resolution to these languages (repeatable)
    #[arg(short = 'l', long = "language", global = true)]
    pub languages: Vec<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
