//! # Submission Keys and Policies
//!
//! Well-known keys of the JSON submission document and the policy enum that
//! governs how wrongly typed values are treated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keys in the JSON submission document
pub mod keys {
    /// Key for deploy information in the top-level submission object.
    pub const DEPLOY: &str = "deploy";

    /// Boolean flag in the deploy object requesting that generated artifacts
    /// are kept after submission.
    pub const KEEP_ARTIFACTS: &str = "keepArtifacts";

    /// Python runtime information in the deploy object.
    ///
    /// A JSON object with `"prefix"` (the interpreter's exec prefix) and
    /// `"version"` (the interpreter's version string).
    pub const PYTHON: &str = "python";

    /// Job config overlays in the deploy object.
    ///
    /// Expected to be an array of job config overlays, though only the first
    /// one is consumed.
    pub const JOB_CONFIG_OVERLAYS: &str = "jobConfigOverlays";

    /// Keys inside the `"python"` object
    pub mod python {
        pub const PREFIX: &str = "prefix";
        pub const VERSION: &str = "version";
    }
}

/// How a present value of the wrong JSON type is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeMismatchPolicy {
    /// Treat the value as missing and return the default
    #[default]
    Lenient,
    /// Report a `DeployError::TypeMismatch`
    Strict,
}

impl TypeMismatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeMismatchPolicy::Lenient => "lenient",
            TypeMismatchPolicy::Strict => "strict",
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, TypeMismatchPolicy::Strict)
    }
}

impl fmt::Display for TypeMismatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeMismatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(TypeMismatchPolicy::Lenient),
            "strict" => Ok(TypeMismatchPolicy::Strict),
            other => Err(format!(
                "unknown type mismatch policy '{other}' (expected 'lenient' or 'strict')"
            )),
        }
    }
}
