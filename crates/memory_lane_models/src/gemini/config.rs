//! Gemini client configuration.

use serde::{Deserialize, Serialize};

/// Settings for [`crate::GeminiClient`], loaded from the `[model]` section.
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gemini-2.5-flash"
/// temperature = 0.7
/// rpm = 10
/// max_retries = 3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model identifier used when a request does not name one
    pub name: String,
    /// API root, without the version segment
    pub base_url: String,
    /// Default sampling temperature
    pub temperature: Option<f32>,
    /// Default output token cap
    pub max_tokens: Option<u32>,
    /// Requests per minute; `None` disables client-side rate limiting
    pub rpm: Option<u32>,
    /// Disable automatic retry
    pub no_retry: bool,
    /// Override the error-specific retry count
    pub max_retries: Option<usize>,
    /// Override the error-specific initial backoff
    pub retry_backoff_ms: Option<u64>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: None,
            max_tokens: None,
            rpm: Some(10),
            no_retry: false,
            max_retries: None,
            retry_backoff_ms: None,
            timeout_secs: 60,
        }
    }
}
