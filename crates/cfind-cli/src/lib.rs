//! Command-line front end for cfind.
//!
//! The binary in `main.rs` is the composition root: it builds a
//! [`CliContext`] from the configuration directory and catalog file, then
//! dispatches to a handler.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
