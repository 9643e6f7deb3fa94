//! Configuration layering and validation tests.

use sift_core::config::{CliOverrides, SiftConfig};
use sift_core::errors::ConfigError;

#[test]
fn defaults_include_a_default_profile() {
    let config = SiftConfig::default();
    let profile = config.profile("default").expect("default profile");
    assert!(profile.selects_all());
}

#[test]
fn unknown_profile_is_a_config_error() {
    let config = SiftConfig::default();
    match config.profile("nope") {
        Err(ConfigError::UnknownProfile(name)) => assert_eq!(name, "nope"),
        other => panic!("expected UnknownProfile, got {other:?}"),
    }
}

#[test]
fn toml_overrides_defaults() {
    let config = SiftConfig::from_toml(
        r#"
        [scan]
        max_file_size = 1024

        [analysis]
        ancestor_depth_limit = 8

        [profiles.strict]
        rules = ["shadowed-variable", "import-cycle"]
        "#,
    )
    .expect("valid toml");

    assert_eq!(config.scan.effective_max_file_size(), 1024);
    assert_eq!(config.analysis.effective_ancestor_depth_limit(), 8);
    let strict = config.profile("strict").expect("strict profile");
    assert_eq!(strict.rules, vec!["shadowed-variable", "import-cycle"]);
    // The built-in default profile survives merging.
    assert!(config.profile("default").is_ok());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = SiftConfig::from_toml("scan = 3").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_depth_limit_rejected_at_load() {
    let err = SiftConfig::from_toml(
        r#"
        [analysis]
        ancestor_depth_limit = 0
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn cli_overrides_beat_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("sift.toml"),
        "[scan]\nmax_file_size = 4096\n",
    )
    .unwrap();

    let cli = CliOverrides {
        scan_max_file_size: Some(512),
        ..Default::default()
    };
    let config = SiftConfig::load(dir.path(), Some(&cli)).expect("load");
    assert_eq!(config.scan.effective_max_file_size(), 512);
}

#[test]
fn rule_config_passes_through_verbatim() {
    let config = SiftConfig::from_toml(
        r#"
        [analysis.rule_config.todo-comment]
        markers = ["TODO", "HACK"]
        "#,
    )
    .expect("valid toml");
    let rule_cfg = config.analysis.rule_config_for("todo-comment");
    assert!(rule_cfg.contains_key("markers"));
    assert!(config.analysis.rule_config_for("absent").is_empty());
}
