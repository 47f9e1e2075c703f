//! Credential configuration
//!
//! Loading, placeholder detection, and the operator-facing template files.

pub mod credentials;
pub mod loader;
pub mod paths;
pub mod state;
pub mod template;
pub mod validation;

pub use credentials::{
    AppConfig, ConfigStatus, PLACEHOLDER_GEMINI_API_KEY, PLACEHOLDER_GOOGLE_CLIENT_ID,
};
pub use loader::{load_config, ConfigLoader, ENV_GEMINI_API_KEY, ENV_GOOGLE_CLIENT_ID};
pub use paths::{default_config_dir, default_config_path};
pub use state::{install, installed};
pub use template::{
    ensure_gitignored, init_config, is_gitignored, write_example, CONFIG_FILE_NAME,
    EXAMPLE_FILE_NAME,
};
pub use validation::{check_placeholders, ConfigDiagnostics, LogDiagnostics};
