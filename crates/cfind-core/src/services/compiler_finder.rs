//! Compiler finder - orchestrates compiler discovery.
//!
//! For every configured language the finder expands the `compilers` spec,
//! then builds one [`CompilerDescriptor`] per concrete compiler: merged
//! options, validated libraries and the remaining descriptive properties.
//! The catalog is fetched once per pass; everything after that is synchronous.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use super::group_expander::{ExpandedCompiler, GroupProblem, expand_compilers};
use super::library_filter::{LibraryRejection, filter_libraries};
use super::option_resolver::merge_options;
use super::scope::PropertyScope;
use crate::domain::{CatalogSnapshot, CompilerDescriptor, PropertyKey, ResolutionIssue};
use crate::ports::{CatalogProvider, FinderError, PropertyAccessor};

/// Behaviour switches for the finder.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// Fail [`CompilerFinder::find`] when a compiler id resolves under more
    /// than one language, instead of only reporting it.
    pub ensure_no_id_clash: bool,
}

/// Compilers from one resolution pass together with tolerated problems.
#[derive(Debug, Clone, Default)]
pub struct FinderReport {
    pub compilers: Vec<CompilerDescriptor>,
    pub issues: Vec<ResolutionIssue>,
}

/// Service that resolves the configured compilers.
pub struct CompilerFinder {
    props: Arc<dyn PropertyAccessor>,
    catalog: Arc<dyn CatalogProvider>,
    config: FinderConfig,
}

impl CompilerFinder {
    /// Create a new finder over a property store and a catalog.
    pub fn new(props: Arc<dyn PropertyAccessor>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            props,
            catalog,
            config: FinderConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FinderConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve every configured compiler.
    ///
    /// Descriptors come back in discovery order: languages in the order the
    /// property accessor lists them, compilers in spec expansion order.
    pub async fn get_compilers(&self) -> Result<Vec<CompilerDescriptor>, FinderError> {
        Ok(self.resolve().await?.compilers)
    }

    /// Resolve every configured compiler and report tolerated problems,
    /// including compiler ids shared between languages.
    pub async fn find(&self) -> Result<FinderReport, FinderError> {
        let mut report = self.resolve().await?;

        let clashes = find_id_clashes(&report.compilers);
        if !clashes.is_empty() && self.config.ensure_no_id_clash {
            return Err(FinderError::IdClash {
                ids: clashes.into_keys().collect(),
            });
        }
        for (id, languages) in clashes {
            debug!(%id, ?languages, "Compiler id is not distinct");
            report
                .issues
                .push(ResolutionIssue::DuplicateId { id, languages });
        }

        info!(
            compilers = report.compilers.len(),
            issues = report.issues.len(),
            "Compiler discovery finished"
        );
        Ok(report)
    }

    async fn resolve(&self) -> Result<FinderReport, FinderError> {
        let snapshot = self.catalog.snapshot().await?;
        let mut report = FinderReport::default();

        let mut seen = HashSet::new();
        for language in self.props.languages() {
            if !seen.insert(language.clone()) {
                debug!(%language, "Skipping repeated language");
                continue;
            }
            self.resolve_language(&language, &snapshot, &mut report);
        }
        Ok(report)
    }

    fn resolve_language(
        &self,
        language: &str,
        snapshot: &CatalogSnapshot,
        report: &mut FinderReport,
    ) {
        let scope = PropertyScope::language(self.props.as_ref(), language);
        let Some(spec) = scope.get(PropertyKey::Compilers) else {
            debug!(language, "No compilers configured");
            return;
        };

        let expansion = expand_compilers(&spec, |group| scope.group_members(group));
        for problem in expansion.problems {
            let issue = match problem {
                GroupProblem::Undefined(group) => ResolutionIssue::UnknownGroup {
                    language: language.to_string(),
                    group,
                },
                GroupProblem::Cyclic(group) => ResolutionIssue::CyclicGroup {
                    language: language.to_string(),
                    group,
                },
            };
            debug!(%issue, "Ignoring group reference");
            report.issues.push(issue);
        }

        debug!(
            language,
            count = expansion.compilers.len(),
            "Expanded compilers"
        );
        for compiler in &expansion.compilers {
            let descriptor = self.describe(language, compiler, snapshot, &mut report.issues);
            report.compilers.push(descriptor);
        }
    }

    fn describe(
        &self,
        language: &str,
        compiler: &ExpandedCompiler,
        snapshot: &CatalogSnapshot,
        issues: &mut Vec<ResolutionIssue>,
    ) -> CompilerDescriptor {
        let id = compiler.id.as_str();
        let scope = PropertyScope::compiler(self.props.as_ref(), language, id, &compiler.groups);

        let options = merge_options(
            scope.get(PropertyKey::BaseOptions).as_deref(),
            scope.get(PropertyKey::Options).as_deref(),
        );

        let libraries = filter_libraries(
            scope.get(PropertyKey::SupportsLibraries).as_deref(),
            snapshot.libraries(language),
        );
        for rejection in libraries.rejected {
            let issue = match rejection {
                LibraryRejection::UnknownLibrary(library) => ResolutionIssue::UnknownLibrary {
                    language: language.to_string(),
                    compiler: id.to_string(),
                    library,
                },
                LibraryRejection::UnknownVersion { library, version } => {
                    ResolutionIssue::UnknownLibraryVersion {
                        language: language.to_string(),
                        compiler: id.to_string(),
                        library,
                        version,
                    }
                }
            };
            debug!(%issue, "Dropping unsupported library");
            issues.push(issue);
        }

        let semver = scope.get(PropertyKey::Semver).filter(|v| !v.is_empty());
        let is_semver = semver.as_deref().is_some_and(|v| v != "trunk");
        let supports_binary = scope.flag(PropertyKey::SupportsBinary).unwrap_or(true);
        let supports_execute =
            supports_binary && scope.flag(PropertyKey::SupportsExecute).unwrap_or(true);
        CompilerDescriptor {
            id: id.to_string(),
            lang: language.to_string(),
            exe: scope.get_or(PropertyKey::Exe, id),
            name: scope.get_or(PropertyKey::Name, id),
            alias: scope.list(PropertyKey::Alias, ':'),
            options,
            group: scope.group_name(),
            group_name: scope.get_or(PropertyKey::GroupName, ""),
            compiler_type: scope.get_or(PropertyKey::CompilerType, ""),
            instruction_set: scope.get(PropertyKey::InstructionSet),
            version_flag: scope.get(PropertyKey::VersionFlag),
            semver,
            is_semver,
            supports_binary,
            supports_execute,
            disabled_filters: scope.list(PropertyKey::DisabledFilters, ','),
            libs_arr: libraries.accepted,
            tools: snapshot.tool_ids(language),
        }
    }
}

/// Compiler ids that resolved under more than one language, with those
/// languages in discovery order.
pub fn find_id_clashes(compilers: &[CompilerDescriptor]) -> BTreeMap<String, Vec<String>> {
    let mut by_id: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for compiler in compilers {
        by_id
            .entry(compiler.id.clone())
            .or_default()
            .push(compiler.lang.clone());
    }
    by_id.retain(|_, languages| languages.len() > 1);
    by_id
}
