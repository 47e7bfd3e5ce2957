//! HTTP retrieval of photo bytes.

use async_trait::async_trait;
use memory_lane_core::ImageBlob;
use memory_lane_error::{FetchError, FetchErrorKind, MemoryLaneResult};
use memory_lane_interface::ImageFetcher;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Settings for [`HttpImageFetcher`], loaded from the `[fetch]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Fetches photos over HTTP and tags them with their MIME type.
///
/// The type comes from the `Content-Type` header, falling back to the URL's
/// extension and finally to `image/jpeg`.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    http: reqwest::Client,
}

impl HttpImageFetcher {
    /// Build a fetcher with the given settings.
    pub fn new(config: &FetchConfig) -> MemoryLaneResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                FetchError::new(FetchErrorKind::Request {
                    url: String::new(),
                    message: e.to_string(),
                })
            })?;
        Ok(Self { http })
    }
}

/// Strip parameters from a `Content-Type` value.
fn essence(content_type: &str) -> Option<String> {
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
    (!mime.is_empty()).then_some(mime)
}

fn guess_mime(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    mime_guess::from_path(path)
        .first()
        .filter(|m| m.type_() == mime_guess::mime::IMAGE)
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| "image/jpeg".to_string())
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    #[instrument(name = "fetch_image", skip(self))]
    async fn fetch(&self, url: &str) -> MemoryLaneResult<ImageBlob> {
        let response = self.http.get(url).send().await.map_err(|e| {
            FetchError::new(FetchErrorKind::Request {
                url: url.to_string(),
                message: e.to_string(),
            })
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(FetchErrorKind::Status {
                url: url.to_string(),
                status_code: status.as_u16(),
            })
            .into());
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(essence)
            .filter(|m| m.starts_with("image/"))
            .unwrap_or_else(|| guess_mime(url));

        let bytes = response.bytes().await.map_err(|e| {
            FetchError::new(FetchErrorKind::Body {
                url: url.to_string(),
                message: e.to_string(),
            })
        })?;

        if bytes.is_empty() {
            return Err(FetchError::new(FetchErrorKind::Body {
                url: url.to_string(),
                message: "empty body".to_string(),
            })
            .into());
        }

        debug!(mime = %mime, bytes = bytes.len(), "Fetched image");
        Ok(ImageBlob::new(mime, bytes.to_vec()))
    }
}
