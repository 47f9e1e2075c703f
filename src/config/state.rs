//! Process-wide configuration
//!
//! Dependents should receive the record from the startup routine. This slot
//! exists for code that cannot be handed one; it is written once and never
//! replaced.

use std::sync::OnceLock;

use super::credentials::AppConfig;
use crate::error::ConfigError;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Install the record for the lifetime of the process
pub fn install(config: AppConfig) -> Result<&'static AppConfig, ConfigError> {
    APP_CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)?;

    APP_CONFIG.get().ok_or(ConfigError::AlreadyInstalled)
}

/// The installed record, if startup has run
pub fn installed() -> Option<&'static AppConfig> {
    APP_CONFIG.get()
}
