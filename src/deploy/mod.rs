//! # Deploy Section Access
//!
//! Typed, default-safe accessors for the `"deploy"` object of a job
//! submission document.
//!
//! The free functions in this module use the lenient policy and never fail:
//! a missing or wrongly typed field resolves to its default. Use
//! [`ConfigOverlayResolver`] directly to pick a policy from configuration.
//!
//! ```rust
//! use serde_json::json;
//! use streamsx_deploy::deploy;
//!
//! let submission = json!({
//!     "deploy": {
//!         "keepArtifacts": true,
//!         "jobConfigOverlays": [{"jobConfig": {"jobName": "ingest"}}]
//!     }
//! });
//!
//! assert!(deploy::keep_artifacts(&submission));
//!
//! let section = deploy::deploy_section(&submission);
//! let overlays = section.job_config_overlays();
//! assert_eq!(
//!     overlays["jobConfigOverlays"],
//!     json!([{"jobConfig": {"jobName": "ingest"}}])
//! );
//! ```

mod builder;
mod resolver;

pub use builder::{insert_deploy, DeploySectionBuilder};
pub use resolver::ConfigOverlayResolver;

use crate::constants::keys;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// The `"deploy"` object of a submission.
///
/// Borrows from the submission when the object is present; holds an owned
/// empty object otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploySection<'a> {
    inner: Cow<'a, Map<String, Value>>,
}

impl<'a> DeploySection<'a> {
    pub(crate) fn borrowed(deploy: &'a Map<String, Value>) -> Self {
        Self {
            inner: Cow::Borrowed(deploy),
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            inner: Cow::Owned(Map::new()),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.inner
    }

    pub fn into_owned(self) -> Map<String, Value> {
        self.inner.into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn keep_artifacts(&self) -> bool {
        ConfigOverlayResolver::default()
            .try_keep_artifacts_in(self.as_map())
            .unwrap_or(false)
    }

    pub fn python_info(&self) -> Option<PythonInfo> {
        python_info(self.as_map())
    }

    pub fn job_config_overlays(&self) -> Map<String, Value> {
        job_config_overlays(self.as_map())
    }

    pub fn first_job_config_overlay(&self) -> Option<Map<String, Value>> {
        first_job_config_overlay(self.as_map())
    }
}

impl From<DeploySection<'_>> for Value {
    fn from(section: DeploySection<'_>) -> Self {
        Value::Object(section.into_owned())
    }
}

/// Python runtime that produced the submission
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PythonInfo {
    /// Interpreter installation prefix
    pub prefix: String,
    /// Interpreter version string
    pub version: String,
}

impl PythonInfo {
    pub fn new(prefix: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            version: version.into(),
        }
    }

    /// Read from a `"python"` object; both fields must be strings
    pub fn from_json(python: &Map<String, Value>) -> Option<Self> {
        let prefix = python.get(keys::python::PREFIX)?.as_str()?;
        let version = python.get(keys::python::VERSION)?.as_str()?;
        Some(Self::new(prefix, version))
    }

    pub fn to_json(&self) -> Map<String, Value> {
        let mut python = Map::new();
        python.insert(
            keys::python::PREFIX.to_string(),
            Value::String(self.prefix.clone()),
        );
        python.insert(
            keys::python::VERSION.to_string(),
            Value::String(self.version.clone()),
        );
        python
    }
}

/// The `"deploy"` object of a submission, if present and an object
pub fn find_deploy(submission: &Value) -> Option<&Map<String, Value>> {
    submission.get(keys::DEPLOY)?.as_object()
}

/// The `"deploy"` object of a submission, or an empty object when absent
pub fn deploy_section(submission: &Value) -> DeploySection<'_> {
    ConfigOverlayResolver::default()
        .try_deploy_section(submission)
        .unwrap_or_else(|_| DeploySection::empty())
}

/// Whether the submission asks for generated artifacts to be kept.
///
/// `false` when the flag or the deploy section is absent, or the flag is not
/// a boolean.
pub fn keep_artifacts(submission: &Value) -> bool {
    ConfigOverlayResolver::default()
        .try_keep_artifacts(submission)
        .unwrap_or(false)
}

/// A fresh object holding a copy of `deploy["jobConfigOverlays"]` under the
/// same key, or an empty object when the deploy object has no overlays.
pub fn job_config_overlays(deploy: &Map<String, Value>) -> Map<String, Value> {
    ConfigOverlayResolver::default().job_config_overlays(deploy)
}

/// The first job config overlay of a deploy object
pub fn first_job_config_overlay(deploy: &Map<String, Value>) -> Option<Map<String, Value>> {
    ConfigOverlayResolver::default()
        .try_first_job_config_overlay(deploy)
        .unwrap_or(None)
}

/// Python runtime information of a deploy object
pub fn python_info(deploy: &Map<String, Value>) -> Option<PythonInfo> {
    ConfigOverlayResolver::default()
        .try_python_info(deploy)
        .unwrap_or(None)
}
