//! Caption and story prompt flows for Memory Lane.
//!
//! A flow owns one prompt template and one reply schema. It validates its
//! inputs, assembles a multimodal [`GenerateRequest`](memory_lane_core::GenerateRequest),
//! sends it through any [`GenerativeDriver`](memory_lane_interface::GenerativeDriver)
//! and decodes the reply into a typed value.
//!
//! - [`CaptionFlow`] turns one image into a caption.
//! - [`StoryFlow`] turns an ordered list of images and a theme into a [`StoryPage`].
//!
//! Replies that are not valid JSON in the expected shape fail with a
//! schema-mismatch service error. Models that wrap JSON in prose or code
//! fences are handled by [`extract_json`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod caption;
mod extraction;
mod story;

pub use caption::{CAPTION_INSTRUCTION, CaptionFlow, CaptionReply, caption_schema};
pub use extraction::{decode_reply, extract_json, parse_json};
pub use story::{PhotoCaption, StoryFlow, StoryPage, StoryReply, story_prompt, story_schema};
