//! lira-config: assemble the Lira workflow-submission service configuration
//!
//! Lira sits in front of a Cromwell workflow engine and turns data-store
//! notifications into adapter workflow submissions. Its deployment
//! configuration is one JSON document built from three inputs: WDL location
//! prefixes, an environment document naming the deployment and its
//! notification subscriptions, and an opaque secrets document. This crate
//! assembles that document and prints it.

pub mod assemble;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;

pub use assemble::assemble;
pub use config::{load_env_config, load_secrets_config};
pub use domain::{EnvConfig, OutputConfig, PathPrefixes, SecretsConfig, WdlDescriptor};
pub use error::ConfigError;
