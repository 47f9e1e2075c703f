//! Example template and secrets file management
//!
//! `config.example.json` is committed with placeholder values. Operators copy
//! it to `config.json`, fill in real credentials, and keep `config.json` out of
//! version control.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::credentials::AppConfig;
use crate::error::ConfigError;

pub const EXAMPLE_FILE_NAME: &str = "config.example.json";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Write the placeholder template into `dir`, returning its path
pub fn write_example(dir: &Path) -> Result<PathBuf, ConfigError> {
    fs::create_dir_all(dir)?;

    let path = dir.join(EXAMPLE_FILE_NAME);
    let content = serde_json::to_string_pretty(&AppConfig::placeholder())?;
    fs::write(&path, content + "\n")?;

    Ok(path)
}

/// Copy the template to `config.json`, creating the template first if needed.
///
/// An existing `config.json` is never overwritten.
pub fn init_config(dir: &Path) -> Result<PathBuf, ConfigError> {
    let target = dir.join(CONFIG_FILE_NAME);
    if target.exists() {
        return Err(ConfigError::AlreadyExists(target));
    }

    let example = dir.join(EXAMPLE_FILE_NAME);
    if !example.exists() {
        write_example(dir)?;
    }

    fs::copy(&example, &target)?;
    log::info!("Created {:?} from template, fill in your credentials", target);

    Ok(target)
}

/// Check whether `dir/.gitignore` lists `config.json`.
///
/// Recognizes `config.json`, `/config.json` and `**/config.json`. Other glob
/// patterns that happen to match are not evaluated.
pub fn is_gitignored(dir: &Path) -> Result<bool, ConfigError> {
    let gitignore = dir.join(".gitignore");
    if !gitignore.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(gitignore)?;
    Ok(content.lines().any(ignores_config_file))
}

fn ignores_config_file(line: &str) -> bool {
    let line = line.trim();
    if line.starts_with('#') {
        return false;
    }

    let pattern = line.strip_prefix("**/").unwrap_or(line);
    pattern.strip_prefix('/').unwrap_or(pattern) == CONFIG_FILE_NAME
}

/// Append `config.json` to `dir/.gitignore` unless it is already listed.
///
/// Returns true if the file was changed.
pub fn ensure_gitignored(dir: &Path) -> Result<bool, ConfigError> {
    if is_gitignored(dir)? {
        return Ok(false);
    }

    let gitignore = dir.join(".gitignore");
    let needs_newline = match fs::read_to_string(&gitignore) {
        Ok(content) => !content.is_empty() && !content.ends_with('\n'),
        Err(_) => false,
    };

    let mut file = OpenOptions::new().create(true).append(true).open(&gitignore)?;
    if needs_newline {
        writeln!(file)?;
    }
    writeln!(file, "# Local credentials")?;
    writeln!(file, "{}", CONFIG_FILE_NAME)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_example_holds_placeholders() {
        let dir = TempDir::new().unwrap();
        let path = write_example(dir.path()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let config: AppConfig = serde_json::from_str(&content).unwrap();
        assert_eq!(config, AppConfig::placeholder());
    }

    #[test]
    fn test_shipped_example_matches_placeholders() {
        let shipped = include_str!("../../config.example.json");
        let config: AppConfig = serde_json::from_str(shipped).unwrap();
        assert!(config.has_placeholder_gemini_key());
        assert!(config.has_placeholder_client_id());
    }

    #[test]
    fn test_init_config_copies_template_once() {
        let dir = TempDir::new().unwrap();

        let path = init_config(dir.path()).unwrap();
        assert!(path.exists());
        assert!(dir.path().join(EXAMPLE_FILE_NAME).exists());

        fs::write(&path, "edited").unwrap();
        let second = init_config(dir.path());
        assert!(matches!(second, Err(ConfigError::AlreadyExists(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "edited");
    }

    #[test]
    fn test_is_gitignored() {
        let dir = TempDir::new().unwrap();
        assert!(!is_gitignored(dir.path()).unwrap());

        fs::write(dir.path().join(".gitignore"), "target/\n# config.json\n").unwrap();
        assert!(!is_gitignored(dir.path()).unwrap());

        fs::write(dir.path().join(".gitignore"), "target/\n/config.json\n").unwrap();
        assert!(is_gitignored(dir.path()).unwrap());
    }

    #[test]
    fn test_is_gitignored_accepts_any_depth_pattern() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "**/config.json  \n").unwrap();
        assert!(is_gitignored(dir.path()).unwrap());

        fs::write(dir.path().join(".gitignore"), "*.json\nconfig.json.bak\n").unwrap();
        assert!(!is_gitignored(dir.path()).unwrap());
    }

    #[test]
    fn test_ensure_gitignored_appends_once() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "target/").unwrap();

        assert!(ensure_gitignored(dir.path()).unwrap());
        assert!(!ensure_gitignored(dir.path()).unwrap());

        let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(content, "target/\n# Local credentials\nconfig.json\n");
    }

    #[test]
    fn test_ensure_gitignored_creates_file() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_gitignored(dir.path()).unwrap());
        assert!(is_gitignored(dir.path()).unwrap());
    }
}
