//! Resolution services.
//!
//! The expander, option resolver and library filter are pure functions over
//! their inputs. [`CompilerFinder`] orchestrates them over every configured
//! language and is the only service that awaits a port.

mod compiler_finder;
mod group_expander;
mod library_filter;
mod option_resolver;
mod scope;

pub use compiler_finder::{CompilerFinder, FinderConfig, FinderReport, find_id_clashes};
pub use group_expander::{
    ExpandedCompiler, Expansion, GROUP_PREFIX, GroupProblem, SPEC_SEPARATOR, expand_compilers,
    split_spec,
};
pub use library_filter::{
    LIBRARY_SEPARATORS, LibraryFilterOutcome, LibraryRef, LibraryRejection, filter_libraries,
};
pub use option_resolver::merge_options;
pub use scope::PropertyScope;
