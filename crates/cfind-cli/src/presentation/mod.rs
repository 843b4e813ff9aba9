//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no resolution logic.

pub mod compiler_display;
pub mod tables;

pub use compiler_display::{
    CompilerDetails, compiler_row, describe_compiler, print_issues, table_header,
};
pub use tables::{format_list, format_optional, print_separator, truncate_string};
