//! Input types for model requests.

use crate::ImageBlob;
use serde::{Deserialize, Serialize};

/// A single part of a multimodal prompt.
///
/// # Examples
///
/// ```
/// use memory_lane_core::{ImageBlob, Input};
///
/// let text = Input::Text("Caption:".to_string());
/// let image = Input::Image(ImageBlob::new("image/png", vec![0x89, 0x50]));
/// assert!(matches!(image, Input::Image(_)));
/// # let _ = text;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text.
    Text(String),
    /// Inline image.
    Image(ImageBlob),
}
