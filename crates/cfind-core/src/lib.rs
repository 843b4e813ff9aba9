//! Core domain types, ports and resolution services for cfind.
//!
//! `cfind-core` turns a hierarchical compiler configuration (read through the
//! [`ports::PropertyAccessor`] port) and a library/tool catalog (read through
//! the [`ports::CatalogProvider`] port) into a flat list of resolved
//! [`CompilerDescriptor`]s. It performs no file or network I/O of its own;
//! adapters live in `cfind-config` and are wired together by `cfind-cli`.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CatalogSnapshot, CompilerDescriptor, Library, LibraryCatalog, LibraryVersion, PropertyKey,
    ResolutionIssue, Tool, ToolCatalog, parse_flag,
};
pub use ports::{CatalogError, CatalogProvider, FinderError, PropertyAccessor};
pub use services::{
    CompilerFinder, ExpandedCompiler, Expansion, FinderConfig, FinderReport, GroupProblem,
    LibraryFilterOutcome, LibraryRef, LibraryRejection, PropertyScope, expand_compilers,
    filter_libraries, merge_options,
};
