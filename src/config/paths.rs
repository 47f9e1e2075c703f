//! Default config locations

use directories::ProjectDirs;
use std::path::PathBuf;

use super::template::CONFIG_FILE_NAME;
use crate::error::ConfigError;

/// Per-user config directory for the application
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("com", "client-config", "ClientConfig")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(ConfigError::NoConfigDir)
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(default_config_dir()?.join(CONFIG_FILE_NAME))
}
