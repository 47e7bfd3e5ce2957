//! Trait definitions for external services and data sources.

use crate::{PhotoSize, PreviewHandle, UploadBatch, UploadProgress};
use async_trait::async_trait;
use futures_util::stream::Stream;
use memory_lane_core::{Album, GenerateRequest, GenerateResponse, ImageBlob, LocalFile, Photo};
use memory_lane_error::MemoryLaneResult;
use std::pin::Pin;

/// Stream of progress reports produced by an upload.
pub type ProgressStream = Pin<Box<dyn Stream<Item = MemoryLaneResult<UploadProgress>> + Send>>;

/// Core trait that every generative model backend implements.
#[async_trait]
pub trait GenerativeDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> MemoryLaneResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;

    /// Maximum number of images accepted in one request.
    fn max_images_per_request(&self) -> usize {
        16
    }
}

/// Retrieves a remote photo and encodes it as an [`ImageBlob`].
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the bytes at `url`.
    ///
    /// # Errors
    ///
    /// Returns a fetch error when the request fails, the server answers with
    /// a non-success status, or the body cannot be read.
    async fn fetch(&self, url: &str) -> MemoryLaneResult<ImageBlob>;
}

/// Read-only source of albums and photos.
pub trait PhotoCatalog: Send + Sync {
    /// All albums with their covers resolved.
    fn albums(&self) -> Vec<Album>;

    /// One album by id.
    fn album(&self, id: &str) -> Option<Album>;

    /// Photos belonging to an album, in catalog order.
    fn album_photos(&self, album_id: &str, size: PhotoSize) -> Vec<Photo>;

    /// One photo by id.
    fn photo(&self, id: &str, size: PhotoSize) -> Option<Photo>;

    /// Photos offered for story creation.
    fn story_photos(&self) -> Vec<Photo>;
}

/// Moves a batch of files to storage, reporting progress as it goes.
///
/// The stream must end once 100% has been reported.
pub trait UploadTransport: Send + Sync {
    /// Start uploading `batch`.
    fn upload(&self, batch: UploadBatch) -> ProgressStream;

    /// Transport name for logging.
    fn name(&self) -> &str;
}

/// Creates and revokes local preview references for selected files.
pub trait PreviewStore: Send + Sync {
    /// Create a preview for `file`.
    fn create(&self, file: &LocalFile) -> PreviewHandle;

    /// Release a preview. Consumes the handle.
    fn revoke(&self, handle: PreviewHandle);
}
