//! Runner behavior: capability minimality and failure isolation.

use std::path::PathBuf;
use std::sync::Arc;

use sift_analysis::findings::Finding;
use sift_analysis::rules::builtin::{
    import_cycle::ImportCycle, shadowed_variable::ShadowedVariable,
    trailing_whitespace::TrailingWhitespace,
};
use sift_analysis::rules::{Requires, Rule, RuleContext, RuleMeta, RuleRegistry};
use sift_analysis::runner::AnalysisRunner;
use sift_analysis::scanner::{hasher::hash_content, Language, SourceFile};
use sift_core::events::EventDispatcher;
use sift_core::SiftConfig;

fn source_file(name: &str, text: &str) -> SourceFile {
    let path = PathBuf::from(name);
    SourceFile {
        language: Language::from_path(&path).unwrap(),
        path,
        bytes: text.as_bytes().to_vec(),
        content_hash: hash_content(text.as_bytes()),
    }
}

fn run(
    files: Vec<SourceFile>,
    selected: Vec<Arc<dyn Rule>>,
    enable_project_graph: bool,
) -> sift_analysis::runner::RunOutput {
    let config = SiftConfig::default();
    let events = EventDispatcher::new();
    let runner = AnalysisRunner::new(&config, &events);
    runner.run(files, &selected, enable_project_graph)
}

#[test]
fn text_only_rules_build_no_graphs() {
    let files = vec![
        source_file("a.ts", "const x = 1;  \n"),
        source_file("b.py", "y = 2\t\n"),
    ];
    let output = run(files, vec![Arc::new(TrailingWhitespace)], true);

    assert_eq!(output.stats.artifacts.trees, 2);
    assert_eq!(output.stats.artifacts.scope_graphs, 0);
    assert_eq!(output.stats.artifacts.project_graphs, 0);
    assert_eq!(output.findings.len(), 2);
}

#[test]
fn syntax_only_rules_build_no_scope_or_project_graphs() {
    use sift_analysis::rules::builtin::empty_catch::EmptyCatch;
    let files = vec![source_file("a.ts", "try { go(); } catch (e) {}\n")];
    let output = run(files, vec![Arc::new(EmptyCatch)], true);

    assert_eq!(output.stats.artifacts.trees, 1);
    assert_eq!(output.stats.artifacts.scope_graphs, 0);
    assert_eq!(output.stats.artifacts.project_graphs, 0);
    assert_eq!(output.findings.len(), 1);
}

#[test]
fn scope_rules_build_scope_graphs_but_no_project_graph() {
    let files = vec![source_file("a.py", "x = 1\ndef f():\n    x = 2\n")];
    let output = run(files, vec![Arc::new(ShadowedVariable)], true);

    assert_eq!(output.stats.artifacts.scope_graphs, 1);
    assert_eq!(output.stats.artifacts.project_graphs, 0);
    assert_eq!(output.findings.len(), 1);
    assert_eq!(output.findings[0].rule_id, "shadowed-variable");
}

#[test]
fn project_rules_only_run_when_project_analysis_is_enabled() {
    let files = vec![
        source_file("a.ts", "import { b } from './b';\nexport const a = 1;\n"),
        source_file("b.ts", "import { a } from './a';\nexport const b = 2;\n"),
    ];

    let disabled = run(files.clone(), vec![Arc::new(ImportCycle)], false);
    assert_eq!(disabled.stats.artifacts.project_graphs, 0);
    assert!(disabled.findings.is_empty());

    let enabled = run(files, vec![Arc::new(ImportCycle)], true);
    assert_eq!(enabled.stats.artifacts.project_graphs, 1);
    assert_eq!(enabled.findings.len(), 1);
    assert_eq!(enabled.findings[0].rule_id, "import-cycle");
}

struct AlwaysPanics;

static PANIC_META: RuleMeta = RuleMeta {
    id: "always-panics",
    category: sift_analysis::rules::traits::RuleCategory::Correctness,
    languages: &[],
    priority: 1,
    autofix: sift_analysis::rules::traits::AutofixSafety::None,
};

impl Rule for AlwaysPanics {
    fn meta(&self) -> &RuleMeta {
        &PANIC_META
    }

    fn requires(&self) -> Requires {
        Requires::RAW_TEXT
    }

    fn visit(&self, _ctx: &RuleContext<'_>) -> Vec<Finding> {
        panic!("deliberate failure");
    }
}

#[test]
fn panicking_rule_does_not_suppress_other_rules() {
    let files = vec![source_file("a.ts", "const x = 1;  \n")];
    let output = run(
        files,
        vec![Arc::new(AlwaysPanics), Arc::new(TrailingWhitespace)],
        false,
    );

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].rule_id, "always-panics");
    assert!(output.diagnostics[0].message.contains("deliberate failure"));

    // The healthy rule's finding survives.
    assert_eq!(output.findings.len(), 1);
    assert_eq!(output.findings[0].rule_id, "trailing-whitespace");
    assert_eq!(output.stats.failed_rules, 1);
}

#[test]
fn unparseable_file_is_reported_and_skipped() {
    let files = vec![
        source_file("good.py", "x = 1  \n"),
        SourceFile {
            path: PathBuf::from("bad.py"),
            language: Language::Python,
            bytes: vec![0xff, 0xfe, 0x00],
            content_hash: 0,
        },
    ];
    let output = run(files, vec![Arc::new(TrailingWhitespace)], false);

    assert_eq!(output.parse_failures.len(), 1);
    assert_eq!(output.parse_failures[0].path, PathBuf::from("bad.py"));
    assert_eq!(output.stats.files_analyzed, 1);
    assert_eq!(output.findings.len(), 1);
}

#[test]
fn findings_are_sorted_by_file_then_span_then_rule() {
    let files = vec![
        source_file("z.ts", "const a = 1;  \n"),
        source_file("a.ts", "const b = 2;  \nconst c = 3;\t\n"),
    ];
    let output = run(files, vec![Arc::new(TrailingWhitespace)], false);
    let keys: Vec<(PathBuf, u32)> = output
        .findings
        .iter()
        .map(|f| (f.file.clone(), f.span.start))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(output.findings[0].file, PathBuf::from("a.ts"));
}

#[test]
fn profile_selection_flows_through_the_registry() {
    let registry = RuleRegistry::with_builtin_rules();
    let profile = sift_core::config::ProfileConfig::with_rules(["trailing-whitespace"]);
    let selected = registry.select("minimal", &profile).unwrap();
    assert_eq!(selected.len(), 1);

    let files = vec![source_file("a.py", "x = 1  # TODO later\n")];
    let output = run(files, selected, false);
    // todo-comment is registered but not selected, so its marker is ignored.
    assert!(output.findings.iter().all(|f| f.rule_id == "trailing-whitespace"));
}
