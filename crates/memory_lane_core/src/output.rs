//! Output types from model replies.

use serde::{Deserialize, Serialize};

/// Supported output types from a generative model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
    /// Structured JSON output.
    Json(serde_json::Value),
}

impl Output {
    /// Text of this output, rendering JSON compactly.
    pub fn as_text(&self) -> String {
        match self {
            Output::Text(text) => text.clone(),
            Output::Json(value) => value.to_string(),
        }
    }
}
