//! Tests for submission keys and policies

use streamsx_deploy::{keys, TypeMismatchPolicy};

#[test]
fn test_submission_keys() {
    assert_eq!(keys::DEPLOY, "deploy");
    assert_eq!(keys::KEEP_ARTIFACTS, "keepArtifacts");
    assert_eq!(keys::PYTHON, "python");
    assert_eq!(keys::JOB_CONFIG_OVERLAYS, "jobConfigOverlays");
    assert_eq!(keys::python::PREFIX, "prefix");
    assert_eq!(keys::python::VERSION, "version");
}

#[test]
fn test_type_mismatch_policy_parsing() {
    assert_eq!("lenient".parse::<TypeMismatchPolicy>(), Ok(TypeMismatchPolicy::Lenient));
    assert_eq!(" STRICT ".parse::<TypeMismatchPolicy>(), Ok(TypeMismatchPolicy::Strict));
    assert!("fail".parse::<TypeMismatchPolicy>().is_err());
}

#[test]
fn test_type_mismatch_policy_helpers() {
    assert_eq!(TypeMismatchPolicy::default(), TypeMismatchPolicy::Lenient);
    assert!(TypeMismatchPolicy::Strict.is_strict());
    assert!(!TypeMismatchPolicy::Lenient.is_strict());
    assert_eq!(TypeMismatchPolicy::Strict.to_string(), "strict");
}
