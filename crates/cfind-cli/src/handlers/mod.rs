//! Command handlers that delegate to the compiler finder.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that call the finder and format output for the terminal

pub mod list;
pub mod show;
