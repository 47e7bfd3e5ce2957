//! Placeholder data store for Memory Lane.
//!
//! Albums and photos are seed records; their URLs, captions and hints come
//! from a bundled list of placeholder images. Anything without a matching
//! placeholder resolves to a deterministic `picsum.photos` URL seeded by the
//! entity id.
//!
//! # Example
//!
//! ```
//! use memory_lane_catalog::PlaceholderCatalog;
//! use memory_lane_interface::{PhotoCatalog, PhotoSize};
//!
//! let catalog = PlaceholderCatalog::seed().unwrap();
//! assert_eq!(catalog.albums().len(), 6);
//! assert_eq!(catalog.album_photos("1", PhotoSize::Grid).len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod seed;

pub use catalog::{FALLBACK_CAPTION, FALLBACK_HINT, PlaceholderCatalog, fallback_url};
pub use seed::{seed_albums, seed_photos, seed_placeholders};
