//! Generative model and image fetch clients for Memory Lane.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - enabled by the default `gemini` feature
//!
//! The crate also provides [`HttpImageFetcher`], which downloads a photo and
//! encodes it as an image blob for the model.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use memory_lane_models::GeminiClient;
//! use memory_lane_interface::GenerativeDriver;
//! use memory_lane_core::{GenerateRequest, Input, Message, Role};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let message = Message::new(Role::User, vec![Input::Text("Hello".to_string())]);
//! let request = GenerateRequest::builder().messages(vec![message]).build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fetch;

pub use fetch::{FetchConfig, HttpImageFetcher};

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, Content, GeminiClient, GeminiConfig, GeminiRequest, GeminiResponse,
    GenerationConfig, InlineData, Part, PromptFeedback, from_gemini_response, to_gemini_request,
};
