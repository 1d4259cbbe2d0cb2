//! Input-document loading
//!
//! The two JSON inputs are read and validated here, once, so the assembly
//! core only ever sees well-formed typed values.

pub mod loader;

pub use loader::{load_env_config, load_secrets_config};
