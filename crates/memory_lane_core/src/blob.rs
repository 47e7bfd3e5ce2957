//! Self-describing image payloads.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use derive_getters::Getters;
use memory_lane_error::{InputError, InputErrorKind, MemoryLaneResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Binary image data tagged with its MIME type.
///
/// On the wire a blob is a data URI: `data:<mimetype>;base64,<encoded>`.
///
/// # Examples
///
/// ```
/// use memory_lane_core::ImageBlob;
///
/// let blob = ImageBlob::new("image/png", vec![1, 2, 3]);
/// let uri = blob.to_data_uri();
/// assert_eq!(uri, "data:image/png;base64,AQID");
///
/// let parsed: ImageBlob = uri.parse().unwrap();
/// assert_eq!(parsed, blob);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(try_from = "String", into = "String")]
pub struct ImageBlob {
    /// MIME type, e.g. "image/jpeg"
    mime: String,
    /// Raw image bytes
    data: Vec<u8>,
}

impl ImageBlob {
    /// Wrap raw bytes with their MIME type.
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Check that both the format tag and the payload are present.
    #[track_caller]
    pub fn validate(&self) -> MemoryLaneResult<()> {
        if self.mime.trim().is_empty() {
            return Err(InputError::new(InputErrorKind::MissingMimeType).into());
        }
        if self.data.is_empty() {
            return Err(InputError::new(InputErrorKind::MissingPayload).into());
        }
        Ok(())
    }

    /// Payload encoded as standard base64.
    pub fn base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Render as `data:<mime>;base64,<encoded>`.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64())
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromStr for ImageBlob {
    type Err = InputError;

    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| {
            InputError::new(InputErrorKind::MalformedDataUri(reason.to_string()))
        };

        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| malformed("missing 'data:' prefix"))?;
        let (header, encoded) = rest
            .split_once(',')
            .ok_or_else(|| malformed("missing ',' separator"))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| malformed("payload is not base64"))?;

        if mime.is_empty() {
            return Err(InputError::new(InputErrorKind::MissingMimeType));
        }
        if encoded.is_empty() {
            return Err(InputError::new(InputErrorKind::MissingPayload));
        }

        let data = STANDARD
            .decode(encoded)
            .map_err(|e| malformed(&format!("invalid base64: {}", e)))?;

        Ok(Self::new(mime, data))
    }
}

impl TryFrom<String> for ImageBlob {
    type Error = InputError;

    fn try_from(uri: String) -> Result<Self, Self::Error> {
        uri.parse()
    }
}

impl From<ImageBlob> for String {
    fn from(blob: ImageBlob) -> Self {
        blob.to_data_uri()
    }
}
