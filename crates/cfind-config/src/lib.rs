//! Configuration and catalog adapters for cfind.
//!
//! This crate implements the ports defined in `cfind-core`:
//! - [`CompilerProps`] implements `PropertyAccessor` over per-language
//!   property sources with a global fallback
//! - [`StaticCatalog`] and [`JsonFileCatalog`] implement `CatalogProvider`
//!
//! It also loads `.properties` hierarchies from disk ([`PropertyTree`]).
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod catalog;
mod compiler_props;
mod error;
mod properties_file;
mod source;

pub use catalog::{JsonFileCatalog, StaticCatalog};
pub use compiler_props::CompilerProps;
pub use error::ConfigError;
pub use properties_file::{
    DEFAULT_LEVELS, GLOBAL_SOURCE, ParsedProperties, PropertyTree, SkippedLine, level_hierarchy,
    parse_properties,
};
pub use source::{MemoryProperties, PropertySource};
