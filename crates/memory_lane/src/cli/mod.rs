//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! memory-lane binary.

mod browse;
mod caption;
mod commands;
mod story;
mod upload;

pub use browse::{list_albums, list_story_photos, show_album, show_photo};
pub use caption::caption_file;
pub use commands::{Cli, Commands};
pub use story::create_story;
pub use upload::upload_files;

use memory_lane::{Notification, view};

/// Print workflow notifications; they are informational, never errors.
fn print_notifications(notifications: Vec<Notification>) {
    for notification in &notifications {
        println!("{}", view::notification(notification));
    }
}
