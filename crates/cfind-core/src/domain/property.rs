//! Typed property keys understood by the compiler finder.

use std::fmt;

/// A configuration key the finder reads.
///
/// Lookups go through these variants rather than free-form strings so that the
/// set of keys the finder depends on stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Compilers,
    Options,
    BaseOptions,
    SupportsLibraries,
    Exe,
    Name,
    Alias,
    Group,
    GroupName,
    CompilerType,
    InstructionSet,
    VersionFlag,
    Semver,
    SupportsBinary,
    SupportsExecute,
    DisabledFilters,
}

impl PropertyKey {
    /// The key as spelled in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compilers => "compilers",
            Self::Options => "options",
            Self::BaseOptions => "baseOptions",
            Self::SupportsLibraries => "supportsLibraries",
            Self::Exe => "exe",
            Self::Name => "name",
            Self::Alias => "alias",
            Self::Group => "group",
            Self::GroupName => "groupName",
            Self::CompilerType => "compilerType",
            Self::InstructionSet => "instructionSet",
            Self::VersionFlag => "versionFlag",
            Self::Semver => "semver",
            Self::SupportsBinary => "supportsBinary",
            Self::SupportsExecute => "supportsExecute",
            Self::DisabledFilters => "disabledFilters",
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a boolean property value.
///
/// Returns `None` for anything that is not a recognised spelling, so callers
/// fall back to the key's default.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
