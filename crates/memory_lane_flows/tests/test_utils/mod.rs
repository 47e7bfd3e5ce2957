//! Test utilities for flow tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};

use memory_lane_core::ImageBlob;

/// A tiny image blob with a recognizable payload.
#[allow(dead_code)]
pub fn test_image(tag: u8) -> ImageBlob {
    ImageBlob::new("image/jpeg", vec![0xff, 0xd8, tag])
}
