//! JSON input loading

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::{EnvConfig, SecretsConfig};
use crate::error::ConfigError;

/// Load and validate the environment configuration document.
///
/// The three required keys are checked here, once, so a missing or mistyped
/// key surfaces as a typed error naming the key rather than failing later
/// during assembly.
pub fn load_env_config(path: &Path) -> Result<EnvConfig, ConfigError> {
    let doc = read_json_object(path)?;
    let env_config = EnvConfig {
        env: require_string(&doc, "env")?,
        tenx_subscription_id: require_string(&doc, "10x_subscription_id")?,
        ss2_subscription_id: require_string(&doc, "ss2_subscription_id")?,
    };
    tracing::debug!(path = %path.display(), env = %env_config.env, "loaded environment config");
    Ok(env_config)
}

/// Load the secrets document.
///
/// Secrets are opaque: any top-level JSON object is accepted and later merged
/// verbatim into the output. Keys that happen to match an environment key are
/// not rejected here; merge precedence is the assembler's concern.
pub fn load_secrets_config(path: &Path) -> Result<SecretsConfig, ConfigError> {
    let doc = read_json_object(path)?;
    tracing::debug!(path = %path.display(), keys = doc.len(), "loaded secrets config");
    Ok(doc)
}

fn read_json_object(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    match value {
        Value::Object(doc) => Ok(doc),
        _ => Err(ConfigError::NotAnObject { path: path.to_path_buf() }),
    }
}

fn require_string(doc: &Map<String, Value>, key: &'static str) -> Result<String, ConfigError> {
    match doc.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ConfigError::WrongType { key }),
        None => Err(ConfigError::MissingKey { key }),
    }
}
