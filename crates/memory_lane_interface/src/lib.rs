//! Trait definitions for the Memory Lane photo album.
//!
//! Every external dependency of the workflows sits behind one of these
//! traits so that production implementations and test fakes are
//! interchangeable:
//!
//! - [`GenerativeDriver`] - hosted generative model
//! - [`ImageFetcher`] - retrieves a photo's bytes by URL
//! - [`PhotoCatalog`] - read-only album/photo data
//! - [`UploadTransport`] - moves a batch of files somewhere, reporting progress
//! - [`PreviewStore`] - creates and revokes local preview handles

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{
    GenerativeDriver, ImageFetcher, PhotoCatalog, PreviewStore, ProgressStream, UploadTransport,
};
pub use types::{PhotoSize, PreviewHandle, UploadBatch, UploadItem, UploadProgress};
