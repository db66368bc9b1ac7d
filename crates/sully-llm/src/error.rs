//! Model client error types.

use thiserror::Error;

/// Errors that can occur when calling the generative-AI API.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key is configured.
    #[error("no API key configured (set SULLY_GEMINI__API_KEY or GEMINI_API_KEY)")]
    NotConfigured,

    /// An inline attachment is not valid base64.
    #[error("invalid attachment '{0}': payload is not base64")]
    InvalidAsset(String),
}
