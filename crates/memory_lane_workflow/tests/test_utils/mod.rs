//! Test utilities for workflow tests.

pub mod mock_driver;
pub mod mock_fetcher;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};
#[allow(unused_imports)]
pub use mock_fetcher::MockFetcher;

use memory_lane_core::{LocalFile, Photo};

/// A story photo whose URL the mock fetcher understands.
#[allow(dead_code)]
pub fn photo(id: &str) -> Photo {
    Photo {
        id: id.to_string(),
        url: format!("https://picsum.photos/seed/{id}/800/600"),
        caption: format!("Photo {id}"),
        album_id: "unknown".to_string(),
        hint: "placeholder".to_string(),
    }
}

/// A small JPEG-named file.
#[allow(dead_code)]
pub fn jpeg(name: &str, size: usize) -> LocalFile {
    LocalFile::new(name, vec![0xAB; size])
}

/// A story reply with the given captions.
#[allow(dead_code)]
pub fn story_json(captions: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "title": "Summer at the Lake",
        "introduction": "The water was warm.",
        "photos": captions.iter().map(|c| serde_json::json!({"caption": c})).collect::<Vec<_>>(),
        "conclusion": "We will be back."
    })
}
