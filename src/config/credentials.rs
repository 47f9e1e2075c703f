//! Credential record
//!
//! Holds the Gemini API key and the Google OAuth client ID the rest of the
//! application authenticates with. The record is built once and only read
//! afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel left in the template until a real Gemini key is supplied
pub const PLACEHOLDER_GEMINI_API_KEY: &str = "YOUR_GEMINI_API_KEY_HERE";

/// Sentinel left in the template until a real Google client ID is supplied
pub const PLACEHOLDER_GOOGLE_CLIENT_ID: &str =
    "YOUR_GOOGLE_CLIENT_ID_HERE.apps.googleusercontent.com";

/// Runtime credentials for the generative-AI service and the OAuth provider
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    gemini_api_key: String,
    google_client_id: String,
}

/// Which credentials have been filled in with real values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatus {
    pub is_configured: bool,
    pub gemini_configured: bool,
    pub google_configured: bool,
}

impl AppConfig {
    pub fn new(gemini_api_key: impl Into<String>, google_client_id: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            google_client_id: google_client_id.into(),
        }
    }

    /// The unedited template record
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_GEMINI_API_KEY, PLACEHOLDER_GOOGLE_CLIENT_ID)
    }

    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }

    pub fn google_client_id(&self) -> &str {
        &self.google_client_id
    }

    pub fn has_placeholder_gemini_key(&self) -> bool {
        self.gemini_api_key == PLACEHOLDER_GEMINI_API_KEY
    }

    pub fn has_placeholder_client_id(&self) -> bool {
        self.google_client_id == PLACEHOLDER_GOOGLE_CLIENT_ID
    }

    /// True if either credential still equals its sentinel
    pub fn uses_placeholders(&self) -> bool {
        self.has_placeholder_gemini_key() || self.has_placeholder_client_id()
    }

    pub fn status(&self) -> ConfigStatus {
        let gemini_configured = !self.has_placeholder_gemini_key();
        let google_configured = !self.has_placeholder_client_id();

        ConfigStatus {
            is_configured: gemini_configured && google_configured,
            gemini_configured,
            google_configured,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.gemini_api_key.is_empty() || self.has_placeholder_gemini_key() {
            self.gemini_api_key.as_str()
        } else {
            "<redacted>"
        };

        f.debug_struct("AppConfig")
            .field("gemini_api_key", &key)
            .field("google_client_id", &self.google_client_id)
            .finish()
    }
}
