//! Placeholder-backed photo catalog.

use crate::seed::{parse_placeholders, seed_albums, seed_photos, seed_placeholders};
use memory_lane_core::{Album, AlbumRecord, Photo, PhotoRecord, PlaceholderImage};
use memory_lane_error::MemoryLaneResult;
use memory_lane_interface::{PhotoCatalog, PhotoSize};
use std::collections::HashMap;
use tracing::debug;

/// Caption used when a photo has no placeholder.
pub const FALLBACK_CAPTION: &str = "A beautiful memory";

/// Hint used when an album cover or photo has no placeholder.
pub const FALLBACK_HINT: &str = "placeholder";

/// Album id assigned to photos listed outside of an album.
const UNKNOWN_ALBUM: &str = "unknown";

/// Deterministic image URL for an entity without a placeholder.
///
/// # Examples
///
/// ```
/// use memory_lane_catalog::fallback_url;
/// use memory_lane_interface::PhotoSize;
///
/// assert_eq!(
///     fallback_url("7", PhotoSize::Cover),
///     "https://picsum.photos/seed/7/400/300"
/// );
/// ```
pub fn fallback_url(id: &str, size: PhotoSize) -> String {
    format!("https://picsum.photos/seed/{}/{}", id, size.path_segment())
}

/// Rewrite the size segment of a placeholder URL for full-screen display.
fn sized_url(url: &str, size: PhotoSize) -> String {
    match size {
        PhotoSize::Full => {
            let full = PhotoSize::Full.path_segment();
            url.replace(&PhotoSize::Grid.path_segment(), &full)
                .replace(&PhotoSize::Cover.path_segment(), &full)
        }
        PhotoSize::Grid | PhotoSize::Cover => url.to_string(),
    }
}

/// Read-only catalog that resolves seed records against placeholder images.
#[derive(Debug, Clone)]
pub struct PlaceholderCatalog {
    albums: Vec<AlbumRecord>,
    photos: Vec<PhotoRecord>,
    placeholders: Vec<PlaceholderImage>,
    index: HashMap<String, usize>,
}

impl PlaceholderCatalog {
    /// Build a catalog from arbitrary records.
    ///
    /// When two placeholders share an id the first one wins.
    pub fn new(
        albums: Vec<AlbumRecord>,
        photos: Vec<PhotoRecord>,
        placeholders: Vec<PlaceholderImage>,
    ) -> Self {
        let mut index = HashMap::with_capacity(placeholders.len());
        for (position, image) in placeholders.iter().enumerate() {
            index.entry(image.id.clone()).or_insert(position);
        }
        debug!(
            albums = albums.len(),
            photos = photos.len(),
            placeholders = placeholders.len(),
            "Built placeholder catalog"
        );
        Self {
            albums,
            photos,
            placeholders,
            index,
        }
    }

    /// The bundled seed albums, photos and placeholder images.
    pub fn seed() -> MemoryLaneResult<Self> {
        Ok(Self::new(seed_albums(), seed_photos(), seed_placeholders()?))
    }

    /// Seed albums and photos resolved against a custom placeholder list.
    ///
    /// `json` has the shape `{ "placeholderImages": [{ id, description, imageHint, imageUrl }] }`.
    pub fn with_placeholders_json(json: &str) -> MemoryLaneResult<Self> {
        Ok(Self::new(seed_albums(), seed_photos(), parse_placeholders(json)?))
    }

    fn placeholder(&self, id: &str) -> Option<&PlaceholderImage> {
        self.index.get(id).map(|&position| &self.placeholders[position])
    }

    /// Resolve an album's cover URL and hint.
    pub fn album_cover(&self, record: &AlbumRecord) -> Album {
        let placeholder = self.placeholder(&record.cover_photo_id);
        Album {
            id: record.id.clone(),
            name: record.name.clone(),
            cover_photo_id: record.cover_photo_id.clone(),
            cover_photo_url: placeholder
                .map(|p| p.image_url.clone())
                .unwrap_or_else(|| fallback_url(&record.id, PhotoSize::Cover)),
            hint: placeholder
                .map(|p| p.image_hint.clone())
                .unwrap_or_else(|| FALLBACK_HINT.to_string()),
        }
    }

    /// Resolve a photo's URL, caption and hint at the requested size.
    pub fn photo_details(&self, record: &PhotoRecord, size: PhotoSize) -> Photo {
        match self.placeholder(&record.id) {
            Some(placeholder) => Photo {
                id: record.id.clone(),
                url: sized_url(&placeholder.image_url, size),
                caption: placeholder.description.clone(),
                album_id: record.album_id.clone(),
                hint: placeholder.image_hint.clone(),
            },
            None => Photo {
                id: record.id.clone(),
                url: fallback_url(&record.id, size),
                caption: FALLBACK_CAPTION.to_string(),
                album_id: record.album_id.clone(),
                hint: FALLBACK_HINT.to_string(),
            },
        }
    }
}

impl PhotoCatalog for PlaceholderCatalog {
    fn albums(&self) -> Vec<Album> {
        self.albums.iter().map(|a| self.album_cover(a)).collect()
    }

    fn album(&self, id: &str) -> Option<Album> {
        self.albums
            .iter()
            .find(|a| a.id == id)
            .map(|a| self.album_cover(a))
    }

    fn album_photos(&self, album_id: &str, size: PhotoSize) -> Vec<Photo> {
        self.photos
            .iter()
            .filter(|p| p.album_id == album_id)
            .map(|p| self.photo_details(p, size))
            .collect()
    }

    fn photo(&self, id: &str, size: PhotoSize) -> Option<Photo> {
        self.photos
            .iter()
            .find(|p| p.id == id)
            .map(|p| self.photo_details(p, size))
    }

    fn story_photos(&self) -> Vec<Photo> {
        self.placeholders
            .iter()
            .filter(|image| image.id.starts_with('p'))
            .map(|image| Photo {
                id: image.id.clone(),
                url: image.image_url.clone(),
                caption: image.description.clone(),
                album_id: UNKNOWN_ALBUM.to_string(),
                hint: image.image_hint.clone(),
            })
            .collect()
    }
}
