//! Value types exchanged across the interface traits.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Rendition of a photo to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PhotoSize {
    /// Album cover, 400x300
    Cover,
    /// Grid thumbnail, 800x600
    #[default]
    Grid,
    /// Full-screen view, 1600x1200
    Full,
}

impl PhotoSize {
    /// Pixel dimensions as `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            PhotoSize::Cover => (400, 300),
            PhotoSize::Grid => (800, 600),
            PhotoSize::Full => (1600, 1200),
        }
    }

    /// Dimensions as a `<w>/<h>` path segment.
    pub fn path_segment(self) -> String {
        let (w, h) = self.dimensions();
        format!("{}/{}", w, h)
    }
}

/// A local preview reference for a selected file.
///
/// Handles are move-only: revoking one through [`crate::PreviewStore::revoke`]
/// consumes it, so the same handle cannot be released twice.
#[derive(Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", url)]
pub struct PreviewHandle {
    url: String,
}

impl PreviewHandle {
    /// Wrap a preview URL. Only preview stores should mint handles.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The preview URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// One file in an upload batch.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct UploadItem {
    /// File name
    name: String,
    /// Caption entered or generated for the file
    caption: String,
    /// File size in bytes
    size: u64,
}

impl UploadItem {
    /// Describe one file of a batch.
    pub fn new(name: impl Into<String>, caption: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            caption: caption.into(),
            size,
        }
    }
}

/// A queue snapshot handed to an [`crate::UploadTransport`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct UploadBatch {
    /// Files in queue order
    items: Vec<UploadItem>,
}

impl UploadBatch {
    /// Build a batch from its items.
    pub fn new(items: Vec<UploadItem>) -> Self {
        Self { items }
    }

    /// Aggregate size of every item.
    pub fn total_bytes(&self) -> u64 {
        self.items.iter().map(|item| item.size).sum()
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to upload.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A progress report from a transport.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct UploadProgress {
    /// Bytes transferred so far
    transferred: u64,
    /// Total bytes in the batch
    total: u64,
}

impl UploadProgress {
    /// Report `transferred` of `total` bytes.
    pub fn new(transferred: u64, total: u64) -> Self {
        Self { transferred, total }
    }

    /// Progress as a percentage in `[0, 100]`. An empty batch is complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_lane_interface::UploadProgress;
    ///
    /// assert_eq!(UploadProgress::new(50, 200).percent(), 25.0);
    /// assert_eq!(UploadProgress::new(0, 0).percent(), 100.0);
    /// assert_eq!(UploadProgress::new(300, 200).percent(), 100.0);
    /// ```
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.transferred as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }
}
