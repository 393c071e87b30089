//! # Config Overlay Resolver
//!
//! Policy-aware lookups into the deploy section of a submission document.
//! Missing fields always resolve to defaults. A present value of the wrong
//! type resolves to the default with a warning under the lenient policy, and
//! to [`DeployError::TypeMismatch`] under the strict policy.

use super::{DeploySection, PythonInfo};
use crate::config::ResolverConfig;
use crate::constants::keys;
use crate::error::{DeployError, Result};
use crate::logging::log_deploy_resolution;
use crate::utils::json::{boolean_field, object_field, type_name, Field};
use serde_json::{Map, Value};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct ConfigOverlayResolver {
    config: ResolverConfig,
}

impl ConfigOverlayResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn strict() -> Self {
        Self::new(ResolverConfig::strict())
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the `"deploy"` object of a submission, or an empty section if absent
    pub fn try_deploy_section<'a>(&self, submission: &'a Value) -> Result<DeploySection<'a>> {
        let Some(document) = submission.as_object() else {
            return self.mismatch("submission", "object", submission, DeploySection::empty());
        };

        match object_field(document, keys::DEPLOY) {
            Field::Present(deploy) => Ok(DeploySection::borrowed(deploy)),
            Field::Missing => {
                self.defaulted(keys::DEPLOY, "empty object");
                Ok(DeploySection::empty())
            }
            Field::Mismatch(value) => {
                self.mismatch(keys::DEPLOY, "object", value, DeploySection::empty())
            }
        }
    }

    /// Resolve `deploy.keepArtifacts` from a whole submission
    pub fn try_keep_artifacts(&self, submission: &Value) -> Result<bool> {
        let deploy = self.try_deploy_section(submission)?;
        self.try_keep_artifacts_in(deploy.as_map())
    }

    /// Resolve `keepArtifacts` from an already extracted deploy object
    pub fn try_keep_artifacts_in(&self, deploy: &Map<String, Value>) -> Result<bool> {
        match boolean_field(deploy, keys::KEEP_ARTIFACTS) {
            Field::Present(keep) => Ok(keep),
            Field::Missing => {
                self.defaulted(keys::KEEP_ARTIFACTS, "false");
                Ok(false)
            }
            Field::Mismatch(value) => {
                self.mismatch("deploy.keepArtifacts", "boolean", value, false)
            }
        }
    }

    /// Wrap the job config overlays of a deploy object in a fresh object.
    ///
    /// The value is copied as-is without type checks; when the key is absent
    /// the result is empty rather than holding a null.
    pub fn job_config_overlays(&self, deploy: &Map<String, Value>) -> Map<String, Value> {
        let mut overlays = Map::new();
        match deploy.get(keys::JOB_CONFIG_OVERLAYS) {
            Some(value) => {
                overlays.insert(keys::JOB_CONFIG_OVERLAYS.to_string(), value.clone());
            }
            None => self.defaulted(keys::JOB_CONFIG_OVERLAYS, "empty object"),
        }
        overlays
    }

    /// Resolve the first job config overlay, the only one consumed at submission
    pub fn try_first_job_config_overlay(
        &self,
        deploy: &Map<String, Value>,
    ) -> Result<Option<Map<String, Value>>> {
        match deploy.get(keys::JOB_CONFIG_OVERLAYS) {
            None => {
                self.defaulted(keys::JOB_CONFIG_OVERLAYS, "none");
                Ok(None)
            }
            Some(Value::Array(overlays)) => match overlays.first() {
                None => {
                    self.defaulted("jobConfigOverlays[0]", "none");
                    Ok(None)
                }
                Some(Value::Object(overlay)) => {
                    if overlays.len() > 1 {
                        debug!(
                            count = overlays.len(),
                            "Multiple job config overlays supplied, only the first is used"
                        );
                    }
                    Ok(Some(overlay.clone()))
                }
                Some(other) => self.mismatch("deploy.jobConfigOverlays[0]", "object", other, None),
            },
            Some(Value::Object(overlay)) => Ok(Some(overlay.clone())),
            Some(other) => self.mismatch("deploy.jobConfigOverlays", "array", other, None),
        }
    }

    /// Resolve the python runtime information of a deploy object
    pub fn try_python_info(&self, deploy: &Map<String, Value>) -> Result<Option<PythonInfo>> {
        match deploy.get(keys::PYTHON) {
            None => {
                self.defaulted(keys::PYTHON, "none");
                Ok(None)
            }
            Some(value) => match value.as_object().and_then(PythonInfo::from_json) {
                Some(info) => Ok(Some(info)),
                None if value.is_object() => self.mismatch(
                    "deploy.python",
                    "object with string prefix and version",
                    value,
                    None,
                ),
                None => self.mismatch("deploy.python", "object", value, None),
            },
        }
    }

    fn defaulted(&self, field: &str, default: &str) {
        if self.config.log_defaults {
            log_deploy_resolution(field, "default", Some(default));
        }
    }

    fn mismatch<T>(&self, field: &str, expected: &str, actual: &Value, default: T) -> Result<T> {
        if self.config.type_mismatch_policy.is_strict() {
            return Err(DeployError::type_mismatch(field, expected, actual));
        }

        warn!(
            field = %field,
            expected = %expected,
            actual = %type_name(actual),
            "Wrongly typed value in submission, using default"
        );
        Ok(default)
    }
}
