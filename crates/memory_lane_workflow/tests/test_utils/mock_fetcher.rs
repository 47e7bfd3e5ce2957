//! Mock image fetcher for testing.

use async_trait::async_trait;
use memory_lane_core::ImageBlob;
use memory_lane_error::{FetchError, FetchErrorKind, MemoryLaneResult};
use memory_lane_interface::ImageFetcher;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Serves a blob derived from the URL, failing for configured URLs.
///
/// Each fetch can be delayed so tests can force completion out of order.
#[derive(Clone, Default)]
pub struct MockFetcher {
    failing: Arc<Mutex<Vec<String>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    fetched: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with HTTP 404.
    pub fn fail_on(self, url: impl Into<String>) -> Self {
        self.failing.lock().unwrap().push(url.into());
        self
    }

    /// Delay the reply for `url`.
    pub fn delay(self, url: impl Into<String>, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(url.into(), delay);
        self
    }

    /// URLs fetched so far, in completion order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    /// The blob this fetcher serves for `url`.
    pub fn blob_for(url: &str) -> ImageBlob {
        ImageBlob::new("image/jpeg", url.as_bytes().to_vec())
    }
}

#[async_trait]
impl ImageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> MemoryLaneResult<ImageBlob> {
        let delay = self.delays.lock().unwrap().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.fetched.lock().unwrap().push(url.to_string());

        if self.failing.lock().unwrap().iter().any(|u| u == url) {
            return Err(FetchError::new(FetchErrorKind::Status {
                url: url.to_string(),
                status_code: 404,
            })
            .into());
        }
        Ok(Self::blob_for(url))
    }
}
