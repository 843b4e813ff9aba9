//! Scoped property lookups.
//!
//! A compiler's properties resolve through a fixed cascade:
//! `compiler.<id>.<key>`, then `group.<name>.<key>` for each enclosing group
//! from innermost to outermost, then `<key>` at language level.

use crate::domain::{PropertyKey, parse_flag};
use crate::ports::PropertyAccessor;

/// Property view for one language, optionally narrowed to a compiler.
#[derive(Clone, Copy)]
pub struct PropertyScope<'a> {
    props: &'a dyn PropertyAccessor,
    language: &'a str,
    compiler: Option<&'a str>,
    groups: &'a [String],
}

impl<'a> PropertyScope<'a> {
    /// Language-level scope.
    pub fn language(props: &'a dyn PropertyAccessor, language: &'a str) -> Self {
        Self {
            props,
            language,
            compiler: None,
            groups: &[],
        }
    }

    /// Scope for `compiler`, reached through `groups` (outermost first).
    pub fn compiler(
        props: &'a dyn PropertyAccessor,
        language: &'a str,
        compiler: &'a str,
        groups: &'a [String],
    ) -> Self {
        Self {
            props,
            language,
            compiler: Some(compiler),
            groups,
        }
    }

    /// Resolve a raw dotted key through the cascade.
    pub fn lookup(&self, key: &str) -> Option<String> {
        if let Some(value) = self.compiler_value(key) {
            return Some(value);
        }
        self.groups
            .iter()
            .rev()
            .find_map(|group| {
                self.props
                    .get(self.language, &format!("group.{group}.{key}"))
            })
            .or_else(|| self.props.get(self.language, key))
    }

    /// `compiler.<id>.<key>` alone, without group or language fallback.
    pub fn compiler_value(&self, key: &str) -> Option<String> {
        let id = self.compiler?;
        self.props
            .get(self.language, &format!("compiler.{id}.{key}"))
    }

    /// Group a compiler is listed under: `compiler.<id>.group` if set,
    /// otherwise the innermost enclosing group, otherwise empty.
    pub fn group_name(&self) -> String {
        self.compiler_value(PropertyKey::Group.as_str())
            .or_else(|| self.innermost_group().map(str::to_string))
            .unwrap_or_default()
    }

    pub fn get(&self, key: PropertyKey) -> Option<String> {
        self.lookup(key.as_str())
    }

    pub fn get_or(&self, key: PropertyKey, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Boolean property; unparseable values count as unset.
    pub fn flag(&self, key: PropertyKey) -> Option<bool> {
        self.get(key).as_deref().and_then(parse_flag)
    }

    /// List property split on `separator`, with empty entries dropped.
    pub fn list(&self, key: PropertyKey, separator: char) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split(separator)
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Raw member spec of `group`, or `None` if the group is not defined.
    pub fn group_members(&self, group: &str) -> Option<String> {
        self.props.get(
            self.language,
            &format!("group.{group}.{}", PropertyKey::Compilers),
        )
    }

    /// Innermost enclosing group, if any.
    pub fn innermost_group(&self) -> Option<&'a str> {
        self.groups.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockProperties;

    fn props() -> MockProperties {
        MockProperties::new()
            .with_language("c++")
            .with("c++", "options", "-lang")
            .with("c++", "group.outer.options", "-outer")
            .with("c++", "group.inner.options", "-inner")
            .with("c++", "compiler.g9.options", "-g9")
            .with("c++", "supportsBinary", "nope")
            .with("c++", "alias", "a::b: ")
    }

    #[test]
    fn test_compiler_key_wins() {
        let props = props();
        let groups = vec!["outer".to_string(), "inner".to_string()];
        let scope = PropertyScope::compiler(&props, "c++", "g9", &groups);
        assert_eq!(scope.get(PropertyKey::Options).as_deref(), Some("-g9"));
    }

    #[test]
    fn test_innermost_group_wins_over_outer() {
        let props = props();
        let groups = vec!["outer".to_string(), "inner".to_string()];
        let scope = PropertyScope::compiler(&props, "c++", "g8", &groups);
        assert_eq!(scope.get(PropertyKey::Options).as_deref(), Some("-inner"));
        assert_eq!(scope.innermost_group(), Some("inner"));

        let groups = vec!["outer".to_string()];
        let scope = PropertyScope::compiler(&props, "c++", "g8", &groups);
        assert_eq!(scope.get(PropertyKey::Options).as_deref(), Some("-outer"));
    }

    #[test]
    fn test_falls_back_to_language_level() {
        let props = props();
        let scope = PropertyScope::compiler(&props, "c++", "g8", &[]);
        assert_eq!(scope.get(PropertyKey::Options).as_deref(), Some("-lang"));
        assert_eq!(scope.get(PropertyKey::Exe), None);
        assert_eq!(scope.get_or(PropertyKey::Exe, "g8"), "g8");
    }

    #[test]
    fn test_other_language_is_isolated() {
        let props = props();
        let scope = PropertyScope::language(&props, "c");
        assert_eq!(scope.get(PropertyKey::Options), None);
    }

    #[test]
    fn test_flag_and_list() {
        let props = props();
        let scope = PropertyScope::language(&props, "c++");
        assert_eq!(scope.flag(PropertyKey::SupportsBinary), None);
        assert_eq!(scope.list(PropertyKey::Alias, ':'), vec!["a", "b"]);
        assert!(scope.list(PropertyKey::DisabledFilters, ',').is_empty());
    }

    #[test]
    fn test_group_name_ignores_group_and_language_keys() {
        let props = props()
            .with("c++", "group", "lang-level")
            .with("c++", "group.inner.group", "group-level");
        let groups = vec!["outer".to_string(), "inner".to_string()];

        let scope = PropertyScope::compiler(&props, "c++", "g8", &groups);
        assert_eq!(scope.group_name(), "inner");
        assert_eq!(
            scope.get(PropertyKey::Group).as_deref(),
            Some("group-level")
        );

        let scope = PropertyScope::compiler(&props, "c++", "g8", &[]);
        assert_eq!(scope.group_name(), "");
    }

    #[test]
    fn test_group_name_compiler_override() {
        let props = props().with("c++", "compiler.g9.group", "custom");
        let groups = vec!["inner".to_string()];
        let scope = PropertyScope::compiler(&props, "c++", "g9", &groups);
        assert_eq!(scope.group_name(), "custom");
        assert_eq!(scope.compiler_value("options").as_deref(), Some("-g9"));
    }
}
