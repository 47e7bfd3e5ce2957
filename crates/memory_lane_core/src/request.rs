//! Request and response types for model generation.

use crate::{Message, Output};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Generic generation request (multimodal-safe).
///
/// `response_schema` asks the provider to constrain its reply to a JSON
/// schema; providers that cannot do so must still return JSON text.
///
/// # Examples
///
/// ```
/// use memory_lane_core::{GenerateRequest, Input, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::new(Role::User, vec![Input::Text("Hi".into())])])
///     .max_tokens(Some(100))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(100));
/// assert!(request.response_schema().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Getters, Builder)]
#[builder(default, setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 2.0)
    temperature: Option<f32>,
    /// Model identifier to use
    model: Option<String>,
    /// JSON schema the reply must conform to
    response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Concatenated text of every output.
    pub fn text(&self) -> String {
        self.outputs.iter().map(Output::as_text).collect()
    }
}
