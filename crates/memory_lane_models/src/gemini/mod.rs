//! Google Gemini REST API implementation.

mod client;
mod config;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use conversion::{from_gemini_response, to_gemini_request};
pub use dto::{
    Candidate, Content, GeminiRequest, GeminiResponse, GenerationConfig, InlineData, Part,
    PromptFeedback,
};
