//! Plain-text rendering of catalog and workflow state.
//!
//! Every function here is pure: it formats what it is given and never
//! touches a workflow.

use memory_lane_core::{Album, Photo, Story};
use memory_lane_workflow::{Notification, UploadCandidate};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// The album grid.
pub fn albums(albums: &[Album]) -> String {
    let mut out = String::from("My Albums\n");
    for album in albums {
        let _ = writeln!(out, "  [{}] {}", album.id, album.name);
        let _ = writeln!(out, "      cover: {} ({})", album.cover_photo_url, album.hint);
    }
    out
}

/// One album and its photos.
pub fn album(album: &Album, photos: &[Photo]) -> String {
    let mut out = format!("{}\n", album.name);
    for photo in photos {
        let _ = writeln!(out, "  {:<4} {}", photo.id, photo.caption);
        let _ = writeln!(out, "       {}", photo.url);
    }
    if photos.is_empty() {
        out.push_str("  (no photos)\n");
    }
    let _ = writeln!(out, "\nView a photo: memory-lane photo <id> --album {}", album.id);
    out.push_str("Back to albums: memory-lane albums\n");
    out
}

/// A single photo with a way back.
pub fn photo(photo: &Photo, album_id: Option<&str>) -> String {
    let mut out = format!("{}\n  {}\n", photo.caption, photo.url);
    match album_id {
        Some(id) => {
            let _ = writeln!(out, "  Part of Album {id}");
            let _ = writeln!(out, "\nBack to album: memory-lane album {id}");
        }
        None => out.push_str("\nBack to albums: memory-lane albums\n"),
    }
    out
}

/// Photos offered for story creation.
pub fn story_photos(photos: &[Photo]) -> String {
    let mut out = String::from("Photos available for stories\n");
    for photo in photos {
        let _ = writeln!(out, "  {:<4} {}", photo.id, photo.caption);
    }
    out
}

/// One notification line.
pub fn notification(notification: &Notification) -> String {
    let marker = if notification.is_error() { "!" } else { "i" };
    format!(
        "[{marker}] {}: {}",
        notification.title(),
        notification.description()
    )
}

/// The upload queue.
pub fn upload_queue(candidates: &[UploadCandidate]) -> String {
    let mut out = String::new();
    for candidate in candidates {
        let caption = if candidate.is_pending() {
            "(generating caption...)"
        } else if candidate.caption().is_empty() {
            "(no caption)"
        } else {
            candidate.caption().as_str()
        };
        let _ = writeln!(
            out,
            "  {} {} [{} bytes] {}",
            candidate.id(),
            candidate.file().name(),
            candidate.file().size(),
            caption
        );
    }
    out
}

/// A fixed-width progress bar, e.g. `[###...]  50%`.
pub fn progress_bar(percent: f64) -> String {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// A generated story page.
pub fn story(story: &Story) -> String {
    let underline = "=".repeat(story.title.chars().count());
    let mut out = format!(
        "{}\n{}\n\n{}\n\n",
        story.title, underline, story.introduction
    );
    for entry in &story.photos {
        let _ = writeln!(out, "{}. {}", entry.position + 1, entry.caption);
        let _ = writeln!(out, "   {}", entry.photo.url);
    }
    let _ = writeln!(out, "\n{}", story.conclusion);
    out
}
