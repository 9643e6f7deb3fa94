//! Project graph construction and queries over parsed sources.

use std::path::{Path, PathBuf};

use sift_analysis::adapters::parse_source;
use sift_analysis::project::{ProjectGraph, ProjectGraphBuilder};
use sift_analysis::scanner::Language;
use sift_analysis::scopes::build_scope_graph;

fn build(files: &[(&str, &str)]) -> ProjectGraph {
    let mut builder = ProjectGraphBuilder::new();
    for (name, source) in files {
        let path = Path::new(name);
        let language = Language::from_path(path).unwrap();
        let tree = parse_source(language, source.as_bytes(), path).unwrap();
        let scopes = build_scope_graph(&tree);
        builder.add_file(path, &scopes);
    }
    builder.finish()
}

#[test]
fn three_file_cycle_is_one_scc() {
    let graph = build(&[
        ("a.ts", "import { b } from './b';\nexport const a = b;\n"),
        ("b.ts", "import { c } from './c';\nexport const b = c;\n"),
        ("c.ts", "import { a } from './a';\nexport const c = 1;\n"),
    ]);
    let cycles = graph.cycles();
    assert_eq!(cycles.len(), 1);
    assert_eq!(
        cycles[0],
        vec![
            PathBuf::from("a.ts"),
            PathBuf::from("b.ts"),
            PathBuf::from("c.ts"),
        ]
    );
}

#[test]
fn acyclic_chain_has_no_cycles_and_transitive_impact() {
    let graph = build(&[
        ("app.ts", "import { mid } from './mid';\nmid();\n"),
        ("mid.ts", "import { leaf } from './leaf';\nexport function mid() { leaf(); }\n"),
        ("leaf.ts", "export function leaf() {}\n"),
    ]);
    assert!(graph.cycles().is_empty());

    // Editing the leaf touches everything above it.
    assert_eq!(
        graph.impact(Path::new("leaf.ts")),
        vec![PathBuf::from("app.ts"), PathBuf::from("mid.ts")]
    );
    assert_eq!(
        graph.dependents(Path::new("leaf.ts")),
        vec![PathBuf::from("mid.ts")]
    );
    assert!(graph.impact(Path::new("app.ts")).is_empty());
}

#[test]
fn python_imports_resolve_across_the_project() {
    let graph = build(&[
        ("pkg/__init__.py", ""),
        ("pkg/core.py", "from pkg.util import helper\n"),
        ("pkg/util.py", "def helper():\n    return 1\n"),
    ]);
    assert_eq!(
        graph.dependents(Path::new("pkg/util.py")),
        vec![PathBuf::from("pkg/core.py")]
    );
    assert!(graph.unresolved().is_empty());
}

#[test]
fn stdlib_import_is_an_unresolved_marker_not_an_edge() {
    let graph = build(&[("solo.py", "import json\nvalue = json\n")]);
    assert_eq!(graph.import_count(), 0);
    assert_eq!(graph.unresolved().len(), 1);
    assert_eq!(graph.unresolved()[0].specifier, "json");
    assert_eq!(graph.unresolved()[0].importer, Path::new("solo.py"));
}

#[test]
fn unused_exports_found_only_where_nothing_imports_them() {
    let graph = build(&[
        (
            "lib.ts",
            "export function used() {}\nexport function dead() {}\n",
        ),
        ("app.ts", "import { used } from './lib';\nused();\n"),
    ]);
    let unused = graph.unused_exports();
    assert_eq!(unused.len(), 1);
    assert_eq!(unused[0].0, Path::new("lib.ts"));
    assert_eq!(unused[0].1.name, "dead");
}

#[test]
fn module_metadata_is_queryable() {
    let graph = build(&[("leaf.ts", "export const value = 42;\n")]);
    let module = graph.module(Path::new("leaf.ts")).unwrap();
    assert_eq!(module.language, Language::TypeScript);
    assert_eq!(module.exports.len(), 1);
    assert_eq!(module.exports[0].name, "value");
    assert!(graph.module(Path::new("ghost.ts")).is_none());
}
