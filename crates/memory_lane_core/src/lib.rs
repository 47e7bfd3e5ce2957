//! Core data types for the Memory Lane photo album.
//!
//! This crate provides the foundation types shared by every Memory Lane crate:
//! the album/photo model, self-describing image blobs, the generated story
//! model, and the request/response types exchanged with generative models.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blob;
mod file;
mod input;
mod message;
mod output;
mod photo;
mod request;
mod role;
mod story;

pub use blob::ImageBlob;
pub use file::LocalFile;
pub use input::Input;
pub use message::Message;
pub use output::Output;
pub use photo::{Album, AlbumRecord, Photo, PhotoRecord, PlaceholderImage};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use story::{Story, StoryPhoto};
