#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Streams Deploy
//!
//! Typed, default-safe access to the deploy section of stream job submission
//! documents.
//!
//! ## Overview
//!
//! A job submission is a generic JSON document. Deployment settings live in
//! its `"deploy"` object: whether to keep generated artifacts, the python
//! runtime that produced the job, and job config overlays that override the
//! default job configuration at submission time.
//!
//! Every accessor is a pure read over a borrowed [`serde_json::Value`]. A
//! missing field is never an error: the boolean flag defaults to `false`,
//! job config overlays to an empty object.
//!
//! ## Module Organization
//!
//! - [`deploy`] - Deploy section accessors and builder
//! - [`constants`] - Well-known submission keys and policies
//! - [`config`] - Resolver configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use streamsx_deploy::{deploy_section, job_config_overlays, keep_artifacts};
//!
//! let submission = json!({"deploy": {}});
//! assert!(!keep_artifacts(&submission));
//!
//! let section = deploy_section(&submission);
//! assert!(job_config_overlays(section.as_map()).is_empty());
//! ```

pub mod config;
pub mod constants;
pub mod deploy;
pub mod error;
pub mod logging;
pub mod utils;

pub use crate::config::ResolverConfig;
pub use constants::{keys, TypeMismatchPolicy};
pub use deploy::{
    deploy_section, find_deploy, first_job_config_overlay, insert_deploy, job_config_overlays,
    keep_artifacts, python_info, ConfigOverlayResolver, DeploySection, DeploySectionBuilder,
    PythonInfo,
};
pub use error::{DeployError, Result};
