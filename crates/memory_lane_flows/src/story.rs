//! Themed story generation over an ordered set of photos.

use crate::extraction::decode_reply;
use derive_getters::Getters;
use memory_lane_core::{GenerateRequest, ImageBlob, Input, Message, Role};
use memory_lane_error::{
    InputError, InputErrorKind, MemoryLaneResult, ServiceError, ServiceErrorKind,
};
use memory_lane_interface::GenerativeDriver;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument, warn};

/// One generated caption, matched to a photo by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoCaption {
    /// Caption tying the photo into the story
    pub caption: String,
}

/// Reply shape of the story prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPage {
    /// Story title
    pub title: String,
    /// Opening paragraph
    pub introduction: String,
    /// One caption per photo, in photo order
    pub photos: Vec<PhotoCaption>,
    /// Closing paragraph
    pub conclusion: String,
}

impl StoryPage {
    /// Captions in photo order.
    pub fn captions(&self) -> Vec<String> {
        self.photos.iter().map(|p| p.caption.clone()).collect()
    }
}

/// A decoded story page and how many captions it should have carried.
///
/// The model is not guaranteed to return one caption per photo; callers
/// decide what to do when [`StoryReply::is_complete`] is false.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StoryReply {
    /// Decoded page
    page: StoryPage,
    /// Number of photos sent
    expected_captions: usize,
}

impl StoryReply {
    /// True when the page has exactly one caption per photo.
    pub fn is_complete(&self) -> bool {
        self.page.photos.len() == self.expected_captions
    }

    /// Take the page.
    pub fn into_page(self) -> StoryPage {
        self.page
    }
}

/// Response schema requiring `{ title, introduction, photos: [{caption}], conclusion }`.
pub fn story_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {"type": "STRING", "description": "A creative title for the story"},
            "introduction": {"type": "STRING", "description": "An introductory paragraph that sets the scene"},
            "photos": {
                "type": "ARRAY",
                "description": "One entry per photo, in the order the photos were given",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "caption": {"type": "STRING", "description": "A caption tying the photo into the story"}
                    },
                    "required": ["caption"]
                }
            },
            "conclusion": {"type": "STRING", "description": "A concluding paragraph that wraps up the story"}
        },
        "required": ["title", "introduction", "photos", "conclusion"]
    })
}

/// Assemble the story prompt: theme first, then every photo in order.
pub fn story_prompt(theme: &str, images: &[ImageBlob]) -> Vec<Input> {
    let mut parts = vec![Input::Text(format!(
        "You are a creative storyteller. Given a series of photos and a theme, generate a cohesive story page.\n\nTheme: {theme}\n\nPhotos:"
    ))];

    for (i, image) in images.iter().enumerate() {
        parts.push(Input::Text(format!("\n- Photo {}: ", i + 1)));
        parts.push(Input::Image(image.clone()));
    }

    parts.push(Input::Text(
        "\n\nBased on the theme and the photos, create a compelling narrative with a title, introduction, a unique caption for each photo that ties into the story, and a conclusion.".to_string(),
    ));
    parts
}

/// Generates a story page from photos and a theme.
#[derive(Debug, Clone)]
pub struct StoryFlow<D> {
    driver: D,
}

impl<D: GenerativeDriver> StoryFlow<D> {
    /// Wrap a model driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Validate inputs and build the request without sending it.
    pub fn request(&self, images: &[ImageBlob], theme: &str) -> MemoryLaneResult<GenerateRequest> {
        if images.is_empty() {
            return Err(InputError::new(InputErrorKind::NoImages).into());
        }
        if theme.trim().is_empty() {
            return Err(InputError::new(InputErrorKind::BlankTheme).into());
        }
        for image in images {
            image.validate()?;
        }
        if images.len() > self.driver.max_images_per_request() {
            warn!(
                images = images.len(),
                limit = self.driver.max_images_per_request(),
                "Story request exceeds the provider's image limit"
            );
        }

        GenerateRequest::builder()
            .messages(vec![Message::new(Role::User, story_prompt(theme.trim(), images))])
            .response_schema(Some(story_schema()))
            .build()
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::ClientCreation(format!(
                    "Failed to build request: {e}"
                )))
                .into()
            })
    }

    /// Generate a story page for `images` under `theme`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when `images` is empty, `theme` is blank
    /// or any image lacks a MIME type or payload, and a service error when the
    /// call fails or the reply does not match the story shape.
    #[instrument(
        name = "story_flow",
        skip(self, images),
        fields(provider = self.driver.provider_name(), images = images.len())
    )]
    pub async fn generate(&self, images: &[ImageBlob], theme: &str) -> MemoryLaneResult<StoryReply> {
        let request = self.request(images, theme)?;
        let response = self.driver.generate(&request).await?;
        let page: StoryPage = decode_reply(&response)?;

        let reply = StoryReply {
            page,
            expected_captions: images.len(),
        };
        if !reply.is_complete() {
            warn!(
                expected = reply.expected_captions,
                received = reply.page.photos.len(),
                "Story caption count does not match photo count"
            );
        }
        debug!(title = %reply.page.title, "Story generated");
        Ok(reply)
    }
}
