//! Configuration Module Tests
//!
//! Tests for the ResolverConfig implementation and layered loading.

use std::collections::HashMap;
use std::io::Write;
use streamsx_deploy::{ResolverConfig, TypeMismatchPolicy};

#[test]
fn config_has_expected_defaults() {
    let config = ResolverConfig::default();
    assert_eq!(config.type_mismatch_policy, TypeMismatchPolicy::Lenient);
    assert!(config.log_defaults);
}

#[test]
fn strict_config_only_changes_policy() {
    let config = ResolverConfig::strict();
    assert_eq!(config.type_mismatch_policy, TypeMismatchPolicy::Strict);
    assert_eq!(config.log_defaults, ResolverConfig::default().log_defaults);
}

#[test]
fn config_loads_from_toml_file_with_env_override() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    writeln!(file, "type_mismatch_policy = \"strict\"").expect("write config");
    writeln!(file, "log_defaults = true").expect("write config");

    let env = HashMap::from([(
        "STREAMSX_DEPLOY_LOG_DEFAULTS".to_string(),
        "false".to_string(),
    )]);
    let config = ResolverConfig::load_with_environment(Some(file.path()), Some(env))
        .expect("config should load");

    assert_eq!(config.type_mismatch_policy, TypeMismatchPolicy::Strict);
    assert!(!config.log_defaults);
}

#[test]
fn config_serializes_policy_in_snake_case() {
    let json = serde_json::to_value(ResolverConfig::strict()).unwrap();
    assert_eq!(json["type_mismatch_policy"], "strict");
}
