//! # Resolver Configuration
//!
//! Controls how the deploy section resolver reacts to wrongly typed values
//! and whether default substitutions are logged.
//!
//! ## Sources
//!
//! - **Defaults**: lenient policy, default substitutions logged
//! - **TOML file**: optional, passed explicitly to [`ResolverConfig::load`]
//! - **Environment**: `STREAMSX_DEPLOY_*` variables override everything else
//!
//! ## Usage
//!
//! ```rust,no_run
//! use streamsx_deploy::config::ResolverConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ResolverConfig::load(None)?;
//! println!("policy: {}", config.type_mismatch_policy);
//! # Ok(())
//! # }
//! ```

pub mod loader;

use crate::constants::TypeMismatchPolicy;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "STREAMSX_DEPLOY";

/// Variables read after `ENV_PREFIX`, one per configuration field
const ENV_KEYS: [&str; 2] = ["TYPE_MISMATCH_POLICY", "LOG_DEFAULTS"];

/// Configuration for [`crate::deploy::ConfigOverlayResolver`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Reaction to present but wrongly typed values
    pub type_mismatch_policy: TypeMismatchPolicy,

    /// Emit a debug event whenever a default is substituted for a missing field
    pub log_defaults: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            type_mismatch_policy: TypeMismatchPolicy::Lenient,
            log_defaults: true,
        }
    }
}

impl ResolverConfig {
    /// Strict configuration: wrongly typed values are errors
    pub fn strict() -> Self {
        Self {
            type_mismatch_policy: TypeMismatchPolicy::Strict,
            ..Self::default()
        }
    }

    /// Build configuration from process environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        Self::load_with_environment(None, None)
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Values go through the same parsing as [`ResolverConfig::load`].
    /// Useful for testing without modifying global environment variables.
    pub fn from_env_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment: HashMap<String, String> = ENV_KEYS
            .iter()
            .filter_map(|suffix| {
                let key = format!("{ENV_PREFIX}_{suffix}");
                lookup(&key).map(|value| (key, value))
            })
            .collect();

        Self::load_with_environment(None, Some(environment))
    }
}
