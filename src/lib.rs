pub mod config;
pub mod error;

use std::path::{Path, PathBuf};

pub use config::{AppConfig, ConfigLoader, ConfigStatus};
pub use error::ConfigError;

/// Resolve the config path from an explicit argument or the per-user default
fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(path) => Ok(path),
        None => config::default_config_path(),
    }
}

/// Load the record, falling back to the template if the file cannot be used.
///
/// `make_loader` supplies the environment handling for both attempts, so
/// overrides still apply when the file is unreadable.
fn load_or_template<F>(
    path: &Path,
    make_loader: F,
    diagnostics: &mut dyn config::ConfigDiagnostics,
) -> AppConfig
where
    F: Fn() -> ConfigLoader,
{
    match make_loader().with_file(path).load(diagnostics) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::warn!("Failed to load config from {:?}: {}", path, e);
            make_loader()
                .load(diagnostics)
                .unwrap_or_else(|_| AppConfig::placeholder())
        }
    }
}

/// Warn when the secrets file sits next to a .gitignore that does not list it
fn warn_if_not_ignored(path: &Path) {
    let Some(dir) = path.parent() else {
        return;
    };

    match config::is_gitignored(dir) {
        Ok(true) => {}
        Ok(false) if dir.join(".gitignore").exists() => {
            log::warn!(
                "{} is not listed in {:?}; do not commit real credentials",
                config::CONFIG_FILE_NAME,
                dir.join(".gitignore")
            );
        }
        Ok(false) => {}
        Err(e) => log::warn!("Failed to read .gitignore in {:?}: {}", dir, e),
    }
}

/// Application startup: initialize logging, load and install the configuration.
///
/// The returned record is the one dependents should be handed.
pub fn run(path: Option<PathBuf>) -> AppConfig {
    // Initialize logger - info for our crate, warn for others
    if let Err(e) = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("client_config=info,warn"),
    )
    .format_timestamp_secs()
    .try_init()
    {
        log::debug!("Logger already initialized: {}", e);
    }

    let loaded = match resolve_config_path(path) {
        Ok(path) => {
            log::info!("Loading config from {:?}", path);
            warn_if_not_ignored(&path);
            load_or_template(&path, ConfigLoader::new, &mut config::LogDiagnostics)
        }
        Err(e) => {
            log::warn!("{}, using environment and template values", e);
            ConfigLoader::new()
                .load(&mut config::LogDiagnostics)
                .unwrap_or_else(|_| AppConfig::placeholder())
        }
    };

    let status = loaded.status();
    log::info!(
        "Config status: gemini configured={}, google configured={}",
        status.gemini_configured,
        status.google_configured
    );

    if let Err(e) = config::install(loaded.clone()) {
        log::warn!("{}", e);
    }

    loaded
}
