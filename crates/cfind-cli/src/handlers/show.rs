//! Show command handler.

use cfind_core::CompilerDescriptor;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::describe_compiler;

/// Pick the compiler `id` refers to. Exact ids win over aliases.
pub fn select<'a>(compilers: &'a [CompilerDescriptor], id: &str) -> Option<&'a CompilerDescriptor> {
    compilers
        .iter()
        .find(|c| c.id == id)
        .or_else(|| compilers.iter().find(|c| c.answers_to(id)))
}

pub async fn execute(ctx: &CliContext, id: &str, json: bool) -> Result<(), CliError> {
    let compilers = ctx.finder.get_compilers().await?;
    let compiler = select(&compilers, id).ok_or_else(|| CliError::NotFound(id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(compiler)?);
    } else {
        print!("{}", describe_compiler(compiler));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &str, alias: &[&str]) -> CompilerDescriptor {
        CompilerDescriptor {
            id: id.to_string(),
            lang: "c++".to_string(),
            exe: id.to_string(),
            name: id.to_string(),
            alias: alias.iter().map(|a| (*a).to_string()).collect(),
            options: String::new(),
            group: String::new(),
            group_name: String::new(),
            compiler_type: String::new(),
            instruction_set: None,
            version_flag: None,
            semver: None,
            is_semver: false,
            supports_binary: true,
            supports_execute: true,
            disabled_filters: Vec::new(),
            libs_arr: Vec::new(),
            tools: Vec::new(),
        }
    }

    #[test]
    fn test_select_prefers_exact_id() {
        let compilers = vec![descriptor("g10", &["g9"]), descriptor("g9", &[])];
        assert_eq!(select(&compilers, "g9").map(|c| c.id.as_str()), Some("g9"));
    }

    #[test]
    fn test_select_by_alias() {
        let compilers = vec![descriptor("g10", &["gcc10"])];
        assert_eq!(
            select(&compilers, "gcc10").map(|c| c.id.as_str()),
            Some("g10")
        );
        assert!(select(&compilers, "clang").is_none());
    }
}
