//! Album and photo records.

use serde::{Deserialize, Serialize};

/// A seed image entry: the source of truth for URLs, descriptions and hints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderImage {
    /// Placeholder id, matched against photo ids and album cover ids
    pub id: String,
    /// Human description, used as the default caption
    pub description: String,
    /// Short hint describing the subject
    pub image_hint: String,
    /// Image URL
    pub image_url: String,
}

/// An album before its cover is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRecord {
    /// Album id
    pub id: String,
    /// Display name
    pub name: String,
    /// Placeholder id of the cover photo
    pub cover_photo_id: String,
}

/// A photo before its placeholder details are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    /// Photo id
    pub id: String,
    /// Owning album id
    pub album_id: String,
}

/// A resolved album, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Album id
    pub id: String,
    /// Display name
    pub name: String,
    /// Placeholder id of the cover photo
    pub cover_photo_id: String,
    /// Resolved cover URL
    pub cover_photo_url: String,
    /// Display hint for the cover
    #[serde(rename = "dataAiHint")]
    pub hint: String,
}

/// A resolved photo, ready for display.
///
/// # Examples
///
/// ```
/// use memory_lane_core::Photo;
///
/// let photo = Photo {
///     id: "p1".to_string(),
///     url: "https://picsum.photos/seed/p1/800/600".to_string(),
///     caption: "A beautiful memory".to_string(),
///     album_id: "1".to_string(),
///     hint: "placeholder".to_string(),
/// };
/// let json = serde_json::to_value(&photo).unwrap();
/// assert_eq!(json["albumId"], "1");
/// assert_eq!(json["dataAiHint"], "placeholder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Photo id
    pub id: String,
    /// Display URL
    pub url: String,
    /// Caption text
    pub caption: String,
    /// Owning album id
    pub album_id: String,
    /// Display hint
    #[serde(rename = "dataAiHint")]
    pub hint: String,
}
