//! Bundled seed records.

use memory_lane_core::{AlbumRecord, PhotoRecord, PlaceholderImage};
use memory_lane_error::{JsonError, MemoryLaneResult};
use serde::Deserialize;

const PLACEHOLDER_IMAGES: &str = include_str!("../placeholder-images.json");

const ALBUMS: &[(&str, &str, &str)] = &[
    ("1", "Family Vacation", "album-1-cover"),
    ("2", "Summer Memories", "album-2-cover"),
    ("3", "City Adventures", "album-3-cover"),
    ("4", "Our Wedding Day", "album-4-cover"),
    ("5", "Baby's First Year", "album-5-cover"),
    ("6", "Road Trip 2023", "album-6-cover"),
];

const PHOTOS: &[(&str, &str)] = &[
    ("p1", "1"),
    ("p2", "1"),
    ("p3", "1"),
    ("p4", "2"),
    ("p5", "2"),
    ("p6", "3"),
    ("p7", "3"),
    ("p8", "4"),
    ("p9", "4"),
    ("p10", "5"),
    ("p11", "6"),
    ("p12", "6"),
];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceholderFile {
    placeholder_images: Vec<PlaceholderImage>,
}

/// The six seed albums.
pub fn seed_albums() -> Vec<AlbumRecord> {
    ALBUMS
        .iter()
        .map(|(id, name, cover)| AlbumRecord {
            id: id.to_string(),
            name: name.to_string(),
            cover_photo_id: cover.to_string(),
        })
        .collect()
}

/// The twelve seed photos.
pub fn seed_photos() -> Vec<PhotoRecord> {
    PHOTOS
        .iter()
        .map(|(id, album_id)| PhotoRecord {
            id: id.to_string(),
            album_id: album_id.to_string(),
        })
        .collect()
}

/// Parse the bundled placeholder image list.
pub fn seed_placeholders() -> MemoryLaneResult<Vec<PlaceholderImage>> {
    parse_placeholders(PLACEHOLDER_IMAGES)
}

pub(crate) fn parse_placeholders(json: &str) -> MemoryLaneResult<Vec<PlaceholderImage>> {
    let file: PlaceholderFile = serde_json::from_str(json)
        .map_err(|e| JsonError::new("placeholder images", e))?;
    Ok(file.placeholder_images)
}
