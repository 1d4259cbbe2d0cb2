//! Error taxonomy for input loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced while loading or validating the input documents.
///
/// Nothing here is recovered: every variant aborts the run before any output
/// is printed. Usage errors (missing flags) never reach this type; clap
/// reports those itself.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An input file could not be opened or read.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file held something other than valid JSON.
    #[error("{} is not valid JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An input file parsed, but its top level is not a JSON object.
    #[error("{} must hold a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },

    /// The environment config lacks a key the assembly needs.
    #[error("environment config is missing required key '{key}'")]
    MissingKey { key: &'static str },

    /// A required environment config key holds a non-string value.
    #[error("environment config key '{key}' must be a string")]
    WrongType { key: &'static str },
}
