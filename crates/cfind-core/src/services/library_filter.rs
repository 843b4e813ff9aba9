//! Validation of `supportsLibraries` against the library catalog.
//!
//! Tokens are `library` or `library.version`. Known tokens are kept verbatim
//! and in source order; unknown libraries or versions are dropped and
//! reported back to the caller.

use crate::domain::LibraryCatalog;

/// Accepted token separators. Configuration files use `:`, hand-written specs
/// often use `,`.
pub const LIBRARY_SEPARATORS: [char; 2] = [':', ','];

/// A parsed `supportsLibraries` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryRef<'a> {
    pub library: &'a str,
    pub version: Option<&'a str>,
}

impl<'a> LibraryRef<'a> {
    /// Split a token at its first `.`.
    pub fn parse(token: &'a str) -> Self {
        match token.split_once('.') {
            Some((library, version)) => Self {
                library,
                version: Some(version),
            },
            None => Self {
                library: token,
                version: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryRejection {
    UnknownLibrary(String),
    UnknownVersion { library: String, version: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilterOutcome {
    /// Tokens that matched the catalog, unchanged and in source order.
    pub accepted: Vec<String>,
    pub rejected: Vec<LibraryRejection>,
}

/// Filter a `supportsLibraries` spec against `catalog`.
///
/// A missing spec yields nothing. A missing catalog rejects every token.
pub fn filter_libraries(
    spec: Option<&str>,
    catalog: Option<&LibraryCatalog>,
) -> LibraryFilterOutcome {
    let mut outcome = LibraryFilterOutcome::default();
    let Some(spec) = spec else {
        return outcome;
    };

    let tokens = spec
        .split(LIBRARY_SEPARATORS)
        .map(str::trim)
        .filter(|token| !token.is_empty());

    for token in tokens {
        let LibraryRef { library, version } = LibraryRef::parse(token);
        let Some(entry) = catalog.and_then(|c| c.get(library)) else {
            outcome
                .rejected
                .push(LibraryRejection::UnknownLibrary(library.to_string()));
            continue;
        };
        if let Some(version) = version {
            if !entry.has_version(version) {
                outcome.rejected.push(LibraryRejection::UnknownVersion {
                    library: library.to_string(),
                    version: version.to_string(),
                });
                continue;
            }
        }
        outcome.accepted.push(token.to_string());
    }

    outcome
}
