//! Rendering of compiler descriptors and resolution issues.

use std::fmt;

use cfind_core::{CompilerDescriptor, ResolutionIssue};

use super::tables::{format_list, format_optional, truncate_string};

pub fn table_header() -> String {
    format!(
        "{:<10} {:<20} {:<24} {:<28} Libraries",
        "Lang", "Id", "Name", "Options"
    )
}

/// One table row per compiler.
pub fn compiler_row(compiler: &CompilerDescriptor) -> String {
    let options = if compiler.options.is_empty() {
        "--"
    } else {
        compiler.options.as_str()
    };
    format!(
        "{:<10} {:<20} {:<24} {:<28} {}",
        truncate_string(&compiler.lang, 10),
        truncate_string(&compiler.id, 20),
        truncate_string(&compiler.name, 24),
        truncate_string(options, 28),
        format_list(&compiler.libs_arr, "--"),
    )
}

/// Multi-line description of one compiler, as printed by `show`.
pub struct CompilerDetails<'a>(pub &'a CompilerDescriptor);

impl fmt::Display for CompilerDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compiler = self.0;
        let group = match (compiler.group.is_empty(), compiler.group_name.is_empty()) {
            (true, _) => "--".to_string(),
            (false, true) => compiler.group.clone(),
            (false, false) => format!("{} ({})", compiler.group, compiler.group_name),
        };
        let aliases = format_list(&compiler.alias, "--");
        let semver = format_optional(compiler.semver.as_ref(), "--");

        writeln!(f, "Id:               {}", compiler.id)?;
        writeln!(f, "Language:         {}", compiler.lang)?;
        writeln!(f, "Name:             {}", compiler.name)?;
        writeln!(f, "Executable:       {}", compiler.exe)?;
        writeln!(f, "Aliases:          {aliases}")?;
        writeln!(f, "Group:            {group}")?;
        writeln!(f, "Options:          {}", compiler.options)?;
        writeln!(f, "Semver:           {semver}")?;
        writeln!(
            f,
            "Binary/Execute:   {}/{}",
            compiler.supports_binary, compiler.supports_execute
        )?;
        writeln!(
            f,
            "Libraries:        {}",
            format_list(&compiler.libs_arr, "--")
        )?;
        writeln!(f, "Tools:            {}", format_list(&compiler.tools, "--"))
    }
}

pub fn describe_compiler(compiler: &CompilerDescriptor) -> CompilerDetails<'_> {
    CompilerDetails(compiler)
}

/// Print tolerated problems to stderr.
pub fn print_issues(issues: &[ResolutionIssue]) {
    for issue in issues {
        eprintln!("warning: {issue}");
    }
}
