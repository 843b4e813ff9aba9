//! Non-fatal problems found while resolving compilers.

use serde::Serialize;
use std::fmt;

/// A configuration problem that was tolerated during resolution.
///
/// None of these abort a resolution pass; they are collected so callers can
/// surface them next to the compilers that did resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolutionIssue {
    /// A `&group` reference names a group with no `compilers` entry.
    UnknownGroup { language: String, group: String },
    /// A `&group` reference re-enters a group that is still being expanded.
    CyclicGroup { language: String, group: String },
    /// `supportsLibraries` names a library missing from the catalog.
    UnknownLibrary {
        language: String,
        compiler: String,
        library: String,
    },
    /// `supportsLibraries` names a version missing from the library's versions.
    UnknownLibraryVersion {
        language: String,
        compiler: String,
        library: String,
        version: String,
    },
    /// The same compiler id resolved under more than one language.
    DuplicateId { id: String, languages: Vec<String> },
}

impl fmt::Display for ResolutionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGroup { language, group } => {
                write!(f, "{language}: group '{group}' is not defined")
            }
            Self::CyclicGroup { language, group } => {
                write!(f, "{language}: group '{group}' references itself")
            }
            Self::UnknownLibrary {
                language,
                compiler,
                library,
            } => write!(
                f,
                "{language}/{compiler}: library '{library}' is not in the catalog"
            ),
            Self::UnknownLibraryVersion {
                language,
                compiler,
                library,
                version,
            } => write!(
                f,
                "{language}/{compiler}: library '{library}' has no version '{version}'"
            ),
            Self::DuplicateId { id, languages } => {
                write!(f, "compiler id '{id}' is used by: {}", languages.join(", "))
            }
        }
    }
}
