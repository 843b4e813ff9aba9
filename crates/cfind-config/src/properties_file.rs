//! Loading of `.properties` hierarchies.
//!
//! Files are named `<source>.<level>.properties`. For each source the levels
//! are read in hierarchy order and later levels override earlier ones. The
//! `compiler-explorer` source is the global namespace; every other source is
//! a language.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::source::MemoryProperties;

/// Source name of the global (language independent) properties.
pub const GLOBAL_SOURCE: &str = "compiler-explorer";

/// Levels read when no environment is selected.
pub const DEFAULT_LEVELS: [&str; 2] = ["defaults", "local"];

const EXTENSION: &str = ".properties";

/// Hierarchy levels for an optional environment name: `defaults`, the
/// environment, then `local`.
pub fn level_hierarchy(env: Option<&str>) -> Vec<String> {
    let mut levels = vec![DEFAULT_LEVELS[0].to_string()];
    if let Some(env) = env.filter(|e| !e.is_empty()) {
        levels.push(env.to_string());
    }
    levels.push(DEFAULT_LEVELS[1].to_string());
    levels
}

/// A properties line that could not be parsed and was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub origin: String,
    pub line: usize,
    pub message: String,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.origin, self.line, self.message)
    }
}

/// Parsed properties text together with the lines that were ignored.
#[derive(Debug, Clone, Default)]
pub struct ParsedProperties {
    pub props: MemoryProperties,
    pub skipped: Vec<SkippedLine>,
}

/// Parse properties text. `origin` names the text in log messages.
///
/// Lines that are not `key=value` are logged and skipped; the rest of the
/// text is still parsed.
pub fn parse_properties(text: &str, origin: &str) -> ParsedProperties {
    let mut parsed = ParsedProperties::default();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let problem = match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                parsed.props.set(key.trim(), value.trim());
                continue;
            }
            Some(_) => "empty key".to_string(),
            None => format!("expected key=value, got '{line}'"),
        };
        let skipped = SkippedLine {
            origin: origin.to_string(),
            line: index + 1,
            message: problem,
        };
        warn!(%skipped, "Skipping bad properties line");
        parsed.skipped.push(skipped);
    }
    parsed
}

/// Properties for every source found in a configuration directory.
#[derive(Debug, Clone, Default)]
pub struct PropertyTree {
    pub global: MemoryProperties,
    /// Per-language properties keyed by language id.
    pub languages: BTreeMap<String, MemoryProperties>,
    /// Lines ignored while loading, across all files.
    pub skipped: Vec<SkippedLine>,
}

impl PropertyTree {
    /// Load every source in `dir`, applying `levels` in order.
    ///
    /// Files whose level is not in `levels` are ignored; a source with no file
    /// at a given level simply skips it.
    pub fn load(dir: &Path, levels: &[String]) -> Result<Self, ConfigError> {
        let mut files: BTreeMap<String, BTreeMap<String, PathBuf>> = BTreeMap::new();
        let entries = fs::read_dir(dir).map_err(|e| ConfigError::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::io(dir, e))?;
            let file_name = entry.file_name();
            let Some((source, level)) = file_name.to_str().and_then(split_file_name) else {
                continue;
            };
            files
                .entry(source.to_string())
                .or_default()
                .insert(level.to_string(), entry.path());
        }

        let mut tree = Self::default();
        for (source, by_level) in files {
            let mut props = MemoryProperties::new();
            for level in levels {
                let Some(path) = by_level.get(level) else {
                    continue;
                };
                let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
                debug!(path = %path.display(), "Loading properties");
                let parsed = parse_properties(&text, &path.display().to_string());
                props.extend(parsed.props);
                tree.skipped.extend(parsed.skipped);
            }
            if source == GLOBAL_SOURCE {
                tree.global = props;
            } else {
                tree.languages.insert(source, props);
            }
        }
        Ok(tree)
    }
}

fn split_file_name(name: &str) -> Option<(&str, &str)> {
    let stem = name.strip_suffix(EXTENSION)?;
    let (source, level) = stem.rsplit_once('.')?;
    (!source.is_empty() && !level.is_empty()).then_some((source, level))
}
