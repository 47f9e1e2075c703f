//! Placeholder check
//!
//! Runs once after the record is built. The check is advisory: it reports
//! through a [`ConfigDiagnostics`] sink and never fails the load.

use super::credentials::AppConfig;

pub const PLACEHOLDER_ERROR: &str = "Configuration Error: Please copy config.example.json \
     to config.json and add your actual API credentials.";
pub const PLACEHOLDER_HINT: &str = "See README.md for instructions on how to obtain API keys.";

/// Receives configuration diagnostics
pub trait ConfigDiagnostics {
    fn error(&mut self, message: &str);
}

/// Forwards diagnostics to the `log` error stream
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl ConfigDiagnostics for LogDiagnostics {
    fn error(&mut self, message: &str) {
        log::error!("{}", message);
    }
}

/// Collects messages instead of logging them
impl ConfigDiagnostics for Vec<String> {
    fn error(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Emit the placeholder warning pair if either credential is unchanged.
///
/// One pair is emitted whether one or both fields are placeholders.
/// Returns whether anything was reported.
pub fn check_placeholders(config: &AppConfig, diagnostics: &mut dyn ConfigDiagnostics) -> bool {
    if !config.uses_placeholders() {
        return false;
    }

    diagnostics.error(PLACEHOLDER_ERROR);
    diagnostics.error(PLACEHOLDER_HINT);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::credentials::{PLACEHOLDER_GEMINI_API_KEY, PLACEHOLDER_GOOGLE_CLIENT_ID};

    #[test]
    fn test_placeholders_emit_two_messages() {
        let mut messages: Vec<String> = Vec::new();
        assert!(check_placeholders(&AppConfig::placeholder(), &mut messages));
        assert_eq!(messages, vec![PLACEHOLDER_ERROR.to_string(), PLACEHOLDER_HINT.to_string()]);
    }

    #[test]
    fn test_single_placeholder_still_emits_one_pair() {
        let mut messages: Vec<String> = Vec::new();
        let config = AppConfig::new(PLACEHOLDER_GEMINI_API_KEY, "1234.apps.googleusercontent.com");
        check_placeholders(&config, &mut messages);
        assert_eq!(messages.len(), 2);

        let mut messages: Vec<String> = Vec::new();
        let config = AppConfig::new("AIzaReal", PLACEHOLDER_GOOGLE_CLIENT_ID);
        check_placeholders(&config, &mut messages);
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_real_values_emit_nothing() {
        let mut messages: Vec<String> = Vec::new();
        let config = AppConfig::new("AIzaReal", "1234.apps.googleusercontent.com");
        let reported = check_placeholders(&config, &mut messages);
        assert!(!reported);
        assert!(messages.is_empty());
    }
}
