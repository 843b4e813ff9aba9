//! Domain types for compiler discovery.
//!
//! These are pure data types with no infrastructure dependencies. The catalog
//! types deserialize from the same JSON shape the catalog service publishes,
//! and descriptors serialize in the camelCase shape clients expect.

mod catalog;
mod compiler;
mod issue;
mod property;

pub use catalog::{CatalogSnapshot, Library, LibraryCatalog, LibraryVersion, Tool, ToolCatalog};
pub use compiler::CompilerDescriptor;
pub use issue::ResolutionIssue;
pub use property::{PropertyKey, parse_flag};
