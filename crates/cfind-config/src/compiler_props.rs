//! Language-scoped property accessor.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use cfind_core::PropertyAccessor;

use crate::properties_file::PropertyTree;
use crate::source::PropertySource;

/// `PropertyAccessor` over per-language sources with a global fallback.
///
/// A lookup for a language consults that language's source first and the
/// global source second. Languages without a source of their own see only
/// the global properties.
#[derive(Clone)]
pub struct CompilerProps {
    languages: Vec<String>,
    by_language: HashMap<String, Arc<dyn PropertySource>>,
    global: Arc<dyn PropertySource>,
}

impl CompilerProps {
    /// Create an accessor for `languages` backed only by `global`.
    ///
    /// Repeated language ids are kept once, at their first position.
    pub fn new(languages: Vec<String>, global: Arc<dyn PropertySource>) -> Self {
        let mut seen = HashSet::new();
        let languages = languages
            .into_iter()
            .filter(|language| seen.insert(language.clone()))
            .collect();
        Self {
            languages,
            by_language: HashMap::new(),
            global,
        }
    }

    /// Attach a language's own property source.
    #[must_use]
    pub fn with_language_props(
        mut self,
        language: impl Into<String>,
        source: Arc<dyn PropertySource>,
    ) -> Self {
        self.by_language.insert(language.into(), source);
        self
    }

    /// Build from a loaded tree. With no `languages` given, every language
    /// found in the tree is used, in name order.
    pub fn from_tree(tree: PropertyTree, languages: &[String]) -> Self {
        let selected = if languages.is_empty() {
            tree.languages.keys().cloned().collect()
        } else {
            languages.to_vec()
        };
        let mut props = Self::new(selected, Arc::new(tree.global));
        for (language, source) in tree.languages {
            props = props.with_language_props(language, Arc::new(source));
        }
        props
    }
}

impl PropertyAccessor for CompilerProps {
    fn languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    fn get(&self, language: &str, key: &str) -> Option<String> {
        self.by_language
            .get(language)
            .and_then(|source| source.get(key))
            .or_else(|| self.global.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryProperties;

    #[test]
    fn test_language_source_wins_over_global() {
        let global = MemoryProperties::new()
            .with("options", "-global")
            .with("baseOptions", "-g");
        let cpp = MemoryProperties::new().with("options", "-cpp");
        let props = CompilerProps::new(vec!["c++".into(), "c".into()], Arc::new(global))
            .with_language_props("c++", Arc::new(cpp));

        assert_eq!(props.get("c++", "options").as_deref(), Some("-cpp"));
        assert_eq!(props.get("c++", "baseOptions").as_deref(), Some("-g"));
        assert_eq!(props.get("c", "options").as_deref(), Some("-global"));
        assert_eq!(props.get("c", "missing"), None);
        assert_eq!(props.languages(), vec!["c++", "c"]);
    }

    #[test]
    fn test_from_tree_selects_languages() {
        let mut tree = PropertyTree::default();
        tree.languages.insert(
            "rust".into(),
            MemoryProperties::new().with("compilers", "r1"),
        );
        tree.languages.insert(
            "c++".into(),
            MemoryProperties::new().with("compilers", "g9"),
        );

        let all = CompilerProps::from_tree(tree.clone(), &[]);
        assert_eq!(all.languages(), vec!["c++", "rust"]);

        let only_rust = CompilerProps::from_tree(tree, &["rust".to_string()]);
        assert_eq!(only_rust.languages(), vec!["rust"]);
        assert_eq!(only_rust.get("rust", "compilers").as_deref(), Some("r1"));
    }

    #[test]
    fn test_repeated_languages_kept_once() {
        let mut tree = PropertyTree::default();
        tree.languages.insert(
            "c++".into(),
            MemoryProperties::new().with("compilers", "g9"),
        );
        let selected = ["c++", "rust", "c++", "rust", "c"].map(String::from);

        let props = CompilerProps::from_tree(tree, &selected);

        assert_eq!(props.languages(), vec!["c++", "rust", "c"]);
    }
}
