//! Generated story model.

use crate::Photo;
use serde::{Deserialize, Serialize};

/// One photo of a story, carrying the caption generated for its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPhoto {
    /// Zero-based position in the selection the story was generated from
    pub position: usize,
    /// The selected photo
    pub photo: Photo,
    /// Caption generated for this photo
    pub caption: String,
}

/// A generated narrative over a themed selection of photos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Story title
    pub title: String,
    /// Scene-setting introduction
    pub introduction: String,
    /// Photos in selection order with their generated captions
    pub photos: Vec<StoryPhoto>,
    /// Closing paragraph
    pub conclusion: String,
}

impl Story {
    /// Pair generated captions with the photos they were generated for.
    ///
    /// Pairing is positional: the i-th photo receives the i-th caption. When
    /// the counts differ the longer side is truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_lane_core::{Photo, Story};
    ///
    /// let photo = |id: &str| Photo {
    ///     id: id.to_string(),
    ///     url: format!("https://example.com/{id}.jpg"),
    ///     caption: String::new(),
    ///     album_id: "1".to_string(),
    ///     hint: String::new(),
    /// };
    /// let story = Story::compose(
    ///     "Title",
    ///     "Intro",
    ///     vec![photo("p1"), photo("p2")],
    ///     vec!["first".to_string()],
    ///     "The end",
    /// );
    /// assert_eq!(story.photos.len(), 1);
    /// assert_eq!(story.photos[0].photo.id, "p1");
    /// assert_eq!(story.photos[0].caption, "first");
    /// ```
    pub fn compose(
        title: impl Into<String>,
        introduction: impl Into<String>,
        photos: Vec<Photo>,
        captions: Vec<String>,
        conclusion: impl Into<String>,
    ) -> Self {
        let photos = photos
            .into_iter()
            .zip(captions)
            .enumerate()
            .map(|(position, (photo, caption))| StoryPhoto {
                position,
                photo,
                caption,
            })
            .collect();

        Self {
            title: title.into(),
            introduction: introduction.into(),
            photos,
            conclusion: conclusion.into(),
        }
    }
}
