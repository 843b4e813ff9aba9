//! List command handler.
//!
//! Displays every resolved compiler in a table, or as JSON.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{compiler_row, print_issues, print_separator, table_header};

/// Execute the list command.
///
/// Issues found during resolution go to stderr so JSON on stdout stays
/// machine readable.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let report = ctx.finder.find().await?;

    if json {
        let out = serde_json::json!({
            "compilers": serde_json::to_value(&report.compilers)?,
            "issues": serde_json::to_value(&report.issues)?,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if report.compilers.is_empty() {
        println!("No compilers configured.");
    } else {
        println!("Found {} compiler(s):\n", report.compilers.len());
        println!("{}", table_header());
        print_separator(110);
        for compiler in &report.compilers {
            println!("{}", compiler_row(compiler));
        }
    }

    print_issues(&report.issues);
    Ok(())
}
