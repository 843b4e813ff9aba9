//! Property accessor port for the compiler configuration store.

/// Read-only access to the hierarchical compiler configuration.
///
/// Keys are the dotted names used in configuration files, e.g. `compilers`,
/// `group.gcc86.compilers` or `compiler.g95.options`. Scoping a key to a
/// compiler or group is done by the caller (see
/// [`crate::services::PropertyScope`]); implementations only resolve a key for
/// one language.
pub trait PropertyAccessor: Send + Sync {
    /// Languages that have compiler configuration, in resolution order.
    fn languages(&self) -> Vec<String>;

    /// Look up `key` for `language`. `None` when the key is not set at all.
    fn get(&self, language: &str, key: &str) -> Option<String>;
}

/// Test property accessor with predefined per-language values.
#[cfg(test)]
#[derive(Default)]
pub struct MockProperties {
    languages: Vec<String>,
    values: std::collections::HashMap<(String, String), String>,
}

#[cfg(test)]
impl MockProperties {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }

    #[must_use]
    pub fn with(
        mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.values
            .insert((language.into(), key.into()), value.into());
        self
    }
}

#[cfg(test)]
impl PropertyAccessor for MockProperties {
    fn languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    fn get(&self, language: &str, key: &str) -> Option<String> {
        self.values
            .get(&(language.to_string(), key.to_string()))
            .cloned()
    }
}
