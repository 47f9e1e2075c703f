//! Error types for configuration loading
//!
//! A placeholder credential is not an error; it is reported through
//! [`crate::config::ConfigDiagnostics`] and loading continues.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to get app config directory")]
    NoConfigDir,
    #[error("Config file already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("Configuration has already been installed")]
    AlreadyInstalled,
}
