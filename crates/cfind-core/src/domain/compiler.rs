//! Resolved compiler descriptor.

use serde::Serialize;

/// The fully resolved record for one compiler.
///
/// Built once per resolution pass by the compiler finder and never mutated
/// afterwards. Nothing here is persisted; every pass recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerDescriptor {
    /// Compiler id, unique within its language.
    pub id: String,
    /// Language the compiler was configured under.
    pub lang: String,
    /// Executable to invoke (defaults to the id).
    pub exe: String,
    /// Display name (defaults to the id).
    pub name: String,
    /// Alternative ids this compiler answers to.
    pub alias: Vec<String>,
    /// Merged `baseOptions` + `options`. Empty when neither is set.
    pub options: String,
    /// Innermost group the compiler was reached through, or empty.
    pub group: String,
    /// Display name of that group.
    pub group_name: String,
    pub compiler_type: String,
    pub instruction_set: Option<String>,
    pub version_flag: Option<String>,
    pub semver: Option<String>,
    #[serde(rename = "isSemVer")]
    pub is_semver: bool,
    pub supports_binary: bool,
    pub supports_execute: bool,
    pub disabled_filters: Vec<String>,
    /// Supported libraries as `library` or `library.version` tokens, in
    /// configuration order.
    pub libs_arr: Vec<String>,
    /// Tool ids available for the compiler's language.
    pub tools: Vec<String>,
}

impl CompilerDescriptor {
    /// Whether `id` names this compiler, either directly or through an alias.
    pub fn answers_to(&self, id: &str) -> bool {
        self.id == id || self.alias.iter().any(|alias| alias == id)
    }
}
