use super::*;
use crate::core::errors::HeadstampError;
use tempfile::tempdir;

fn expect_config_error<T: std::fmt::Debug>(result: Result<T>) -> HeadstampError {
    result.expect_err("expected validation failure")
}

#[test]
fn default_config_validates_successfully() {
    HeadstampConfig::default()
        .validate()
        .expect("headstamp default");
}

#[test]
fn default_config_matches_async_stripe_pass() {
    let config = HeadstampConfig::default();
    assert_eq!(config.root_path, PathBuf::from("ft-stripe/src/async_stripe"));
    assert_eq!(config.pattern, "*.rs");
    assert_eq!(config.failure_policy, FailurePolicy::Abort);
    assert!(!config.skip_annotated);

    let lines: Vec<&str> = config.annotation_text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("async-stripe"));
    assert!(lines[1].contains("Alexander Lyon"));
    assert!(lines[3].contains("Apache License, Version 2.0"));
    assert!(lines[4].contains("MIT License"));
}

#[test]
fn blank_annotation_text_is_rejected() {
    let mut config = HeadstampConfig::default();
    config.annotation_text = "\r\n\n".to_string();
    let err = expect_config_error(config.validate());
    assert!(
        format!("{err}").contains("annotation_text"),
        "unexpected error message: {err}"
    );
}

#[test]
fn empty_root_path_is_rejected() {
    let mut config = HeadstampConfig::default();
    config.root_path = PathBuf::new();
    let err = expect_config_error(config.validate());
    assert!(matches!(err, HeadstampError::Config { .. }));
}

#[test]
fn invalid_globs_are_rejected_with_field_name() {
    let config = HeadstampConfig::new("src", "[invalid", "// header");
    let err = expect_config_error(config.validate());
    assert!(format!("{err}").contains("pattern"), "unexpected error message: {err}");

    let config = HeadstampConfig::new("src", "*.rs", "// header").with_exclude("{unclosed");
    let err = expect_config_error(config.validate());
    assert!(
        format!("{err}").contains("exclude_patterns[0]"),
        "unexpected error message: {err}"
    );
}

#[test]
fn yaml_round_trip_preserves_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".headstamp.yml");

    let config = HeadstampConfig::new("vendor", "*.go", "// Copyright Example\n")
        .with_failure_policy(FailurePolicy::Continue)
        .with_exclude("generated/**")
        .with_skip_annotated(true);
    config.to_yaml_file(&path).unwrap();

    let loaded = HeadstampConfig::from_yaml_file(&path).unwrap();
    assert_eq!(loaded.root_path, PathBuf::from("vendor"));
    assert_eq!(loaded.pattern, "*.go");
    assert_eq!(loaded.annotation_text, "// Copyright Example\n");
    assert_eq!(loaded.exclude_patterns, vec!["generated/**".to_string()]);
    assert_eq!(loaded.failure_policy, FailurePolicy::Continue);
    assert!(loaded.skip_annotated);
}

#[test]
fn partial_yaml_falls_back_to_defaults() {
    let config: HeadstampConfig =
        serde_yaml::from_str("root_path: crates\nfailure_policy: continue\n").unwrap();
    assert_eq!(config.root_path, PathBuf::from("crates"));
    assert_eq!(config.pattern, DEFAULT_PATTERN);
    assert_eq!(config.annotation_text, DEFAULT_ANNOTATION_TEXT);
    assert_eq!(config.failure_policy, FailurePolicy::Continue);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = expect_config_error(HeadstampConfig::from_yaml_file(dir.path().join("nope.yml")));
    assert!(matches!(err, HeadstampError::Io { .. }));
}
