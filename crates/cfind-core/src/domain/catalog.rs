//! Library and tool catalog types.
//!
//! The catalog is supplied from outside the core and is read-only here. It is
//! keyed by language id first, then by library (or tool) id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One installable version of a library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryVersion {
    /// Human readable version (e.g. "2.1.0.1", "(trunk)").
    pub version: String,
    /// Install path of the library binaries.
    #[serde(default)]
    pub lib_path: String,
}

/// A library entry: its available versions keyed by version id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Display name, when the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Versions keyed by version id (e.g. "2101").
    #[serde(default)]
    pub versions: BTreeMap<String, LibraryVersion>,
}

impl Library {
    /// Build a library from `(version id, display version, lib path)` triples.
    pub fn with_versions<'a>(
        versions: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    ) -> Self {
        Self {
            name: None,
            versions: versions
                .into_iter()
                .map(|(id, version, lib_path)| {
                    (
                        id.to_string(),
                        LibraryVersion {
                            version: version.to_string(),
                            lib_path: lib_path.to_string(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Whether `version_id` is one of this library's versions.
    pub fn has_version(&self, version_id: &str) -> bool {
        self.versions.contains_key(version_id)
    }
}

/// Libraries available to one language, keyed by library id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryCatalog(pub BTreeMap<String, Library>);

impl LibraryCatalog {
    /// Look up a library by id.
    pub fn get(&self, library_id: &str) -> Option<&Library> {
        self.0.get(library_id)
    }

    #[must_use]
    pub fn with_library(mut self, id: impl Into<String>, library: Library) -> Self {
        self.0.insert(id.into(), library);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An external tool entry. Opaque to resolution; only its id is passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exe: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub tool_type: Option<String>,
}

/// Tools available to one language, keyed by tool id.
pub type ToolCatalog = BTreeMap<String, Tool>;

/// Point-in-time view of the catalog for every language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Library catalogs keyed by language id.
    #[serde(default)]
    pub libs: BTreeMap<String, LibraryCatalog>,
    /// Tool catalogs keyed by language id.
    #[serde(default)]
    pub tools: BTreeMap<String, ToolCatalog>,
}

impl CatalogSnapshot {
    /// Library catalog for `language`, if the snapshot has one.
    pub fn libraries(&self, language: &str) -> Option<&LibraryCatalog> {
        self.libs.get(language)
    }

    /// Tool ids for `language`, in id order.
    pub fn tool_ids(&self, language: &str) -> Vec<String> {
        self.tools
            .get(language)
            .map(|tools| tools.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn with_libraries(
        mut self,
        language: impl Into<String>,
        catalog: LibraryCatalog,
    ) -> Self {
        self.libs.insert(language.into(), catalog);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserializes_catalog_shape() {
        let json = r#"{
            "libs": {
                "a-lang": {
                    "catch2": {
                        "versions": {
                            "2101": {
                                "version": "2.1.0.1",
                                "libPath": "/catch2/2.1.0.1/lib/x86_64"
                            }
                        }
                    }
                }
            },
            "tools": {
                "a-lang": {
                    "clang-tidy": { "name": "clang-tidy", "type": "postcompilation" }
                }
            }
        }"#;

        let snapshot: CatalogSnapshot = serde_json::from_str(json).unwrap();
        let catch2 = snapshot
            .libraries("a-lang")
            .unwrap()
            .get("catch2")
            .unwrap();
        assert!(catch2.has_version("2101"));
        assert!(!catch2.has_version("2102"));
        assert_eq!(
            catch2.versions["2101"].lib_path,
            "/catch2/2.1.0.1/lib/x86_64"
        );
        assert_eq!(snapshot.tool_ids("a-lang"), vec!["clang-tidy".to_string()]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot: CatalogSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.libraries("a-lang").is_none());
        assert!(snapshot.tool_ids("a-lang").is_empty());
    }
}
