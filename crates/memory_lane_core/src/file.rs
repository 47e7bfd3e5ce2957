//! Locally selected files.

use crate::ImageBlob;
use derive_getters::Getters;
use memory_lane_error::{FetchError, FetchErrorKind, MemoryLaneResult};
use std::path::Path;
use tracing::{debug, instrument};

/// A file picked from the local filesystem, held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LocalFile {
    /// File name without directories
    name: String,
    /// MIME type, guessed from the extension when not supplied
    mime: String,
    /// File contents
    bytes: Vec<u8>,
}

impl LocalFile {
    /// Build a file from in-memory contents, guessing the MIME type from the name.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_lane_core::LocalFile;
    ///
    /// let file = LocalFile::new("beach.jpg", vec![0xFF, 0xD8]);
    /// assert_eq!(file.mime(), "image/jpeg");
    /// assert!(file.is_image());
    /// ```
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self { name, mime, bytes }
    }

    /// Build a file with an explicit MIME type.
    pub fn with_mime(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a file from disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn from_path(path: impl AsRef<Path>) -> MemoryLaneResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            FetchError::new(FetchErrorKind::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!(name = %name, size = bytes.len(), "Read local file");
        Ok(Self::new(name, bytes))
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// True for `image/*` MIME types.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Encode the contents as an image blob.
    pub fn to_blob(&self) -> ImageBlob {
        ImageBlob::new(self.mime.clone(), self.bytes.clone())
    }
}
