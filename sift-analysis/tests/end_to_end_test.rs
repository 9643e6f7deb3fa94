//! Whole-pipeline runs against files on disk.

use std::fs;
use std::path::PathBuf;

use sift_analysis::findings::apply_edits;
use sift_analysis::AnalysisPipeline;
use sift_core::errors::PipelineError;
use sift_core::SiftConfig;
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

#[test]
fn cycle_is_reported_only_with_project_analysis_enabled() {
    let dir = project(&[
        ("a.ts", "import { b } from './b';\nexport const a = b;\n"),
        ("b.ts", "import { a } from './a';\nexport const b = 1;\n"),
    ]);
    let pipeline = AnalysisPipeline::new(SiftConfig::default());
    let paths = vec![dir.path().to_path_buf()];

    let with_project = pipeline.validate(&paths, "default", true).unwrap();
    let cycles = with_project.findings_for_rule("import-cycle");
    assert_eq!(cycles.len(), 1);
    let members = cycles[0].meta["cycle"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert!(members[0].as_str().unwrap().ends_with("a.ts"));
    assert!(members[1].as_str().unwrap().ends_with("b.ts"));

    let without = pipeline.validate(&paths, "default", false).unwrap();
    assert!(without.findings_for_rule("import-cycle").is_empty());
    assert_eq!(without.stats.artifacts.project_graphs, 0);
}

#[test]
fn applying_the_autofix_clears_the_finding_on_rerun() {
    let dir = project(&[("messy.py", "x = 1   \ny = 2\n")]);
    let pipeline = AnalysisPipeline::new(SiftConfig::default());
    let paths = vec![dir.path().to_path_buf()];

    let first = pipeline.validate(&paths, "default", false).unwrap();
    let hits = first.findings_for_rule("trailing-whitespace");
    assert_eq!(hits.len(), 1);

    let source = fs::read_to_string(dir.path().join("messy.py")).unwrap();
    let edits: Vec<_> = hits.iter().flat_map(|f| f.autofix.clone()).collect();
    let fixed = apply_edits(&source, &edits).unwrap();
    fs::write(dir.path().join("messy.py"), &fixed).unwrap();

    let second = pipeline.validate(&paths, "default", false).unwrap();
    assert!(second.findings_for_rule("trailing-whitespace").is_empty());
}

#[test]
fn unknown_profile_and_unknown_rule_fail_before_scanning() {
    let pipeline = AnalysisPipeline::new(SiftConfig::default());
    // The path does not exist; config errors must fire first.
    let paths = vec![PathBuf::from("/definitely/not/here")];

    let err = pipeline.validate(&paths, "missing-profile", false).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));

    let config = SiftConfig::from_toml(
        "[profiles.strict]\nrules = [\"trailing-whitespace\", \"no-such-rule\"]\n",
    )
    .unwrap();
    let pipeline = AnalysisPipeline::new(config);
    let err = pipeline.validate(&paths, "strict", false).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
}

#[test]
fn mixed_language_project_is_analyzed_in_one_run() {
    let dir = project(&[
        ("app.py", "import helpers\n\ndef main():\n    print = 1\n    return print\n"),
        ("helpers.py", "def assist():\n    pass\n"),
        ("web.ts", "try { go(); } catch (e) {}\n"),
    ]);
    let pipeline = AnalysisPipeline::new(SiftConfig::default());
    let report = pipeline
        .validate(&[dir.path().to_path_buf()], "default", false)
        .unwrap();

    assert_eq!(report.stats.files_analyzed, 3);
    assert!(report.is_clean());
    assert_eq!(report.findings_for_rule("empty-catch").len(), 1);
    // `print = 1` shadows the builtin only; that is not a variable shadow,
    // and import-shadows-builtin only looks at imports. No scope findings.
    assert!(report.findings_for_rule("shadowed-variable").is_empty());
}

#[test]
fn profile_restricts_the_rule_set() {
    let dir = project(&[("a.py", "x = 1  \n# TODO tidy\n")]);
    let config = SiftConfig::from_toml(
        "[profiles.style-only]\nrules = [\"trailing-whitespace\"]\n",
    )
    .unwrap();
    let pipeline = AnalysisPipeline::new(config);
    let report = pipeline
        .validate(&[dir.path().to_path_buf()], "style-only", false)
        .unwrap();

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].rule_id, "trailing-whitespace");
}
