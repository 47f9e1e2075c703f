//! Configuration loading
//!
//! Builds the [`AppConfig`] from an optional JSON file plus environment
//! overrides, then runs the placeholder check once.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::credentials::AppConfig;
use super::validation::{check_placeholders, ConfigDiagnostics, LogDiagnostics};
use crate::error::ConfigError;

/// Environment variable overriding the Gemini API key
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Environment variable overriding the Google OAuth client ID
pub const ENV_GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

pub struct ConfigLoader {
    file: Option<PathBuf>,
    env_lookup: Option<EnvLookup>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// No file, overrides read from the process environment
    pub fn new() -> Self {
        Self {
            file: None,
            env_lookup: Some(Box::new(|name: &str| env::var(name).ok())),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replace the process environment with a custom lookup
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.env_lookup = Some(Box::new(lookup));
        self
    }

    pub fn without_env(mut self) -> Self {
        self.env_lookup = None;
        self
    }

    /// Build the record and report placeholder credentials to `diagnostics`
    pub fn load(self, diagnostics: &mut dyn ConfigDiagnostics) -> Result<AppConfig, ConfigError> {
        let base = match &self.file {
            Some(path) => read_config_file(path)?,
            None => AppConfig::placeholder(),
        };

        let config = match &self.env_lookup {
            Some(lookup) => apply_env_overrides(base, lookup.as_ref()),
            None => base,
        };

        check_placeholders(&config, diagnostics);
        Ok(config)
    }
}

/// Load from `path` with process environment overrides, logging diagnostics
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    ConfigLoader::new().with_file(path).load(&mut LogDiagnostics)
}

/// Read a config file, falling back to the template when it does not exist
fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No config file at {:?}, using template values", path);
            return Ok(AppConfig::placeholder());
        }
        Err(e) => return Err(e.into()),
    };

    let config = serde_json::from_str(&content)?;
    log::debug!("Loaded config from {:?}", path);
    Ok(config)
}

fn apply_env_overrides(config: AppConfig, lookup: &dyn Fn(&str) -> Option<String>) -> AppConfig {
    let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

    let gemini_api_key = match non_empty(ENV_GEMINI_API_KEY) {
        Some(key) => {
            log::info!("Loaded Gemini API key from {}", ENV_GEMINI_API_KEY);
            key
        }
        None => config.gemini_api_key().to_string(),
    };

    let google_client_id = match non_empty(ENV_GOOGLE_CLIENT_ID) {
        Some(id) => {
            log::info!("Loaded Google Client ID from {}", ENV_GOOGLE_CLIENT_ID);
            id
        }
        None => config.google_client_id().to_string(),
    };

    AppConfig::new(gemini_api_key, google_client_id)
}
