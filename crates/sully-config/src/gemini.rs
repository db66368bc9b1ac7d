//! Generative-AI API configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_flash_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_pro_model() -> String {
    "gemini-3-pro-preview".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. `GEMINI_API_KEY` is also honoured.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the `generateContent` API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Fast model used for ICP synthesis, reply analysis and copywriting.
    #[serde(default = "default_flash_model")]
    pub flash_model: String,

    /// Search-grounded model used for lead scoring and strategy advice.
    #[serde(default = "default_pro_model")]
    pub pro_model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            flash_model: default_flash_model(),
            pro_model: default_pro_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is available for live model calls.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
