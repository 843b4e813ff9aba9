//! End-to-end compiler discovery over the real adapters.

use std::sync::Arc;
use std::time::Duration;

use cfind_config::{CompilerProps, MemoryProperties, PropertyTree, StaticCatalog, level_hierarchy};
use cfind_core::{
    CatalogSnapshot, CompilerDescriptor, CompilerFinder, Library, LibraryCatalog, ResolutionIssue,
};

fn catalog() -> Arc<StaticCatalog> {
    let libs = LibraryCatalog::default()
        .with_library(
            "fmt",
            Library::with_versions([("trunk", "(trunk)", "/fmt/trunk/lib")]),
        )
        .with_library(
            "catch2",
            Library::with_versions([
                ("2101", "2.1.0.1", "/catch2/2.1.0.1/lib/x86_64"),
                ("2102", "2.1.0.2", "/catch2/2.1.0.2/lib/x86_64"),
            ]),
        );
    Arc::new(StaticCatalog::new(
        CatalogSnapshot::default().with_libraries("a-lang", libs),
    ))
}

fn finder(entries: &[(&str, &str)]) -> CompilerFinder {
    let global: MemoryProperties = entries.iter().copied().collect();
    let props = CompilerProps::new(vec!["a-lang".to_string()], Arc::new(global));
    CompilerFinder::new(Arc::new(props), catalog())
}

async fn compilers(entries: &[(&str, &str)]) -> Vec<CompilerDescriptor> {
    finder(entries).get_compilers().await.unwrap()
}

#[tokio::test]
async fn test_undefined_group_does_not_hang() {
    let finder = finder(&[("compilers", "goodCompiler:&badCompiler")]);
    let compilers = tokio::time::timeout(Duration::from_secs(5), finder.get_compilers())
        .await
        .expect("resolution hung")
        .unwrap();
    assert_eq!(compilers.len(), 1);
}

#[tokio::test]
async fn test_no_options_at_all() {
    let compilers = compilers(&[("compilers", "goodCompiler")]).await;
    assert_eq!(compilers[0].options, "");
}

#[tokio::test]
async fn test_no_base_options() {
    let compilers = compilers(&[("compilers", "goodCompiler"), ("options", "bar")]).await;
    assert_eq!(compilers[0].options, "bar");
}

#[tokio::test]
async fn test_only_base_options() {
    let compilers = compilers(&[("compilers", "goodCompiler"), ("baseOptions", "foo")]).await;
    assert_eq!(compilers[0].options, "foo");
}

#[tokio::test]
async fn test_both_options() {
    let compilers = compilers(&[
        ("compilers", "goodCompiler"),
        ("baseOptions", "foo"),
        ("options", "bar"),
    ])
    .await;
    assert_eq!(compilers[0].options, "foo bar");
}

#[tokio::test]
async fn test_filter_libraries() {
    let compilers = compilers(&[
        ("compilers", "goodCompiler"),
        ("supportsLibraries", "fmt:catch2.2101"),
    ])
    .await;
    assert_eq!(compilers[0].libs_arr, vec!["fmt", "catch2.2101"]);
}

#[tokio::test]
async fn test_cyclic_groups_complete() {
    let finder = finder(&[
        ("compilers", "&a"),
        ("group.a.compilers", "a1:&b"),
        ("group.b.compilers", "b1:&a:&b"),
    ]);
    let report = finder.find().await.unwrap();

    let ids: Vec<&str> = report.compilers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "b1"]);
    assert_eq!(report.compilers[1].group, "b");
    assert_eq!(report.issues.len(), 2);
    assert!(
        report
            .issues
            .iter()
            .all(|issue| matches!(issue, ResolutionIssue::CyclicGroup { .. }))
    );
}

#[tokio::test]
async fn test_loaded_tree_resolves() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a-lang.defaults.properties"),
        "compilers=&gcc:clang\n\
         group.gcc.compilers=g9:g10\n\
         group.gcc.groupName=GCC\n\
         group.gcc.baseOptions=-Wall\n\
         compiler.g10.alias=gcc10:g10x\n\
         compiler.clang.name=Clang trunk\n\
         supportsLibraries=fmt\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("a-lang.local.properties"),
        "compiler.g9.options=-O2\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("compiler-explorer.defaults.properties"),
        "disabledFilters=labels,directives\n",
    )
    .unwrap();

    let tree = PropertyTree::load(dir.path(), &level_hierarchy(None)).unwrap();
    let props = CompilerProps::from_tree(tree, &[]);
    let finder = CompilerFinder::new(Arc::new(props), catalog());
    let compilers = finder.get_compilers().await.unwrap();

    assert_eq!(compilers.len(), 3);
    let g9 = &compilers[0];
    assert_eq!(g9.options, "-Wall -O2");
    assert_eq!(g9.group, "gcc");
    assert_eq!(g9.group_name, "GCC");
    assert_eq!(g9.libs_arr, vec!["fmt"]);
    assert_eq!(g9.disabled_filters, vec!["labels", "directives"]);

    let g10 = &compilers[1];
    assert!(g10.answers_to("gcc10"));
    assert_eq!(g10.options, "-Wall");

    let clang = &compilers[2];
    assert_eq!(clang.name, "Clang trunk");
    assert_eq!(clang.group, "");
    assert_eq!(clang.options, "");
}

#[tokio::test]
async fn test_repeated_language_resolves_once() {
    let global: MemoryProperties = [("compilers", "g1")].into_iter().collect();
    let languages = vec!["a-lang".to_string(), "a-lang".to_string()];
    let props = CompilerProps::new(languages, Arc::new(global));
    let finder = CompilerFinder::new(Arc::new(props), catalog());

    let report = finder.find().await.unwrap();
    assert_eq!(report.compilers.len(), 1);
    assert!(report.issues.is_empty());
}
