//! Single-photo caption generation.

use crate::extraction::decode_reply;
use memory_lane_core::{GenerateRequest, ImageBlob, Input, Message, Role};
use memory_lane_error::{MemoryLaneResult, ServiceError, ServiceErrorKind};
use memory_lane_interface::GenerativeDriver;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};

/// Instruction preceding the photo. The image is sent inline after `Photo: `.
pub const CAPTION_INSTRUCTION: &str = "You are an AI assistant that generates captions for photos. Analyze the photo and create a concise and descriptive caption.";

/// Reply shape of the caption prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionReply {
    /// Generated caption
    pub caption: String,
}

/// Response schema requiring `{ caption: string }`.
pub fn caption_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "caption": {
                "type": "STRING",
                "description": "A concise and descriptive caption for the photo"
            }
        },
        "required": ["caption"]
    })
}

/// Generates a caption for one photo.
///
/// # Examples
///
/// ```no_run
/// use memory_lane_core::ImageBlob;
/// use memory_lane_flows::CaptionFlow;
/// use memory_lane_models::GeminiClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let flow = CaptionFlow::new(GeminiClient::new()?);
/// let photo: ImageBlob = "data:image/png;base64,iVBORw0KGgo=".parse()?;
/// let caption = flow.caption(&photo).await?;
/// println!("{caption}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CaptionFlow<D> {
    driver: D,
}

impl<D: GenerativeDriver> CaptionFlow<D> {
    /// Wrap a model driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Build the request for `image` without sending it.
    pub fn request(&self, image: &ImageBlob) -> MemoryLaneResult<GenerateRequest> {
        image.validate()?;

        let message = Message::new(
            Role::User,
            vec![
                Input::Text(format!("{CAPTION_INSTRUCTION}\n\nPhoto: ")),
                Input::Image(image.clone()),
                Input::Text("\n\nCaption:".to_string()),
            ],
        );

        GenerateRequest::builder()
            .messages(vec![message])
            .response_schema(Some(caption_schema()))
            .build()
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::ClientCreation(format!(
                    "Failed to build request: {e}"
                )))
                .into()
            })
    }

    /// Generate a caption for `image`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the image lacks a MIME type or
    /// payload, and a service error when the call fails or the reply has no
    /// `caption` string.
    #[instrument(
        name = "caption_flow",
        skip(self, image),
        fields(provider = self.driver.provider_name(), mime = %image.mime(), bytes = image.len())
    )]
    pub async fn caption(&self, image: &ImageBlob) -> MemoryLaneResult<String> {
        let request = self.request(image)?;
        let response = self.driver.generate(&request).await?;
        let reply: CaptionReply = decode_reply(&response)?;
        debug!(chars = reply.caption.len(), "Caption generated");
        Ok(reply.caption)
    }
}
