//! Construction of deploy objects for new submissions.

use super::PythonInfo;
use crate::constants::keys;
use crate::error::{DeployError, Result};
use crate::utils::json::type_name;
use serde_json::{Map, Value};

/// Builds the `"deploy"` object of a submission
#[derive(Debug, Clone, Default)]
pub struct DeploySectionBuilder {
    deploy: Map<String, Value>,
    overlays: Vec<Value>,
}

impl DeploySectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep_artifacts(mut self, keep: bool) -> Self {
        self.deploy
            .insert(keys::KEEP_ARTIFACTS.to_string(), Value::Bool(keep));
        self
    }

    pub fn python(mut self, python: PythonInfo) -> Self {
        self.deploy
            .insert(keys::PYTHON.to_string(), Value::Object(python.to_json()));
        self
    }

    /// Append a job config overlay. Only the first overlay is consumed at
    /// submission time.
    pub fn job_config_overlay(mut self, overlay: Map<String, Value>) -> Self {
        self.overlays.push(Value::Object(overlay));
        self
    }

    pub fn build(self) -> Map<String, Value> {
        let mut deploy = self.deploy;
        if !self.overlays.is_empty() {
            deploy.insert(
                keys::JOB_CONFIG_OVERLAYS.to_string(),
                Value::Array(self.overlays),
            );
        }
        deploy
    }
}

/// Attach a deploy object to a submission, returning the one it replaced
pub fn insert_deploy(submission: &mut Value, deploy: Map<String, Value>) -> Result<Option<Value>> {
    match submission {
        Value::Object(document) => {
            Ok(document.insert(keys::DEPLOY.to_string(), Value::Object(deploy)))
        }
        other => Err(DeployError::InvalidDocument(format!(
            "submission must be a JSON object, got {}",
            type_name(other)
        ))),
    }
}
