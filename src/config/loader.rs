//! Configuration Loader
//!
//! Layered loading through the `config` crate: built-in defaults, then an
//! optional TOML file, then `STREAMSX_DEPLOY_*` environment variables.

use super::{ResolverConfig, ENV_PREFIX};
use crate::constants::TypeMismatchPolicy;
use crate::error::{DeployError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Unvalidated values as they come out of the layered sources
#[derive(Debug, Deserialize)]
struct RawResolverConfig {
    type_mismatch_policy: String,
    log_defaults: bool,
}

impl RawResolverConfig {
    fn validate(self) -> Result<ResolverConfig> {
        let type_mismatch_policy: TypeMismatchPolicy =
            self.type_mismatch_policy.parse().map_err(|e: String| {
                DeployError::Configuration(format!("Invalid type_mismatch_policy: {e}"))
            })?;

        Ok(ResolverConfig {
            type_mismatch_policy,
            log_defaults: self.log_defaults,
        })
    }
}

impl ResolverConfig {
    /// Load configuration from defaults, an optional TOML file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_environment(path, None)
    }

    /// Load configuration with an explicit environment variable map.
    ///
    /// `None` reads the process environment. Passing a map keeps tests
    /// independent of global state.
    pub fn load_with_environment(
        path: Option<&Path>,
        environment: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        let defaults = ResolverConfig::default();

        let mut builder = Config::builder()
            .set_default(
                "type_mismatch_policy",
                defaults.type_mismatch_policy.as_str(),
            )?
            .set_default("log_defaults", defaults.log_defaults)?;

        if let Some(path) = path {
            debug!("Loading resolver configuration from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(environment),
        );

        let raw: RawResolverConfig = builder.build()?.try_deserialize()?;
        let config = raw.validate()?;

        debug!(
            type_mismatch_policy = %config.type_mismatch_policy,
            log_defaults = config.log_defaults,
            "Resolver configuration loaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env() -> Option<HashMap<String, String>> {
        Some(HashMap::new())
    }

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_load_defaults_only() {
        let config = ResolverConfig::load_with_environment(None, no_env()).unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let file = toml_file("type_mismatch_policy = \"strict\"\nlog_defaults = false\n");
        let config = ResolverConfig::load_with_environment(Some(file.path()), no_env()).unwrap();
        assert_eq!(config.type_mismatch_policy, TypeMismatchPolicy::Strict);
        assert!(!config.log_defaults);
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = toml_file("type_mismatch_policy = \"strict\"\n");
        let env = HashMap::from([(
            "STREAMSX_DEPLOY_TYPE_MISMATCH_POLICY".to_string(),
            "lenient".to_string(),
        )]);
        let config = ResolverConfig::load_with_environment(Some(file.path()), Some(env)).unwrap();
        assert_eq!(config.type_mismatch_policy, TypeMismatchPolicy::Lenient);
        assert!(config.log_defaults);
    }

    #[test]
    fn test_invalid_policy_in_file_is_rejected() {
        let file = toml_file("type_mismatch_policy = \"whenever\"\n");
        let err = ResolverConfig::load_with_environment(Some(file.path()), no_env()).unwrap_err();
        assert!(matches!(err, DeployError::Configuration(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = ResolverConfig::load_with_environment(
            Some(Path::new("/nonexistent/streamsx-deploy.toml")),
            no_env(),
        )
        .unwrap_err();
        assert!(matches!(err, DeployError::Configuration(_)));
    }
}
