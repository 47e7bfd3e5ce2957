//! User-facing notifications raised by the workflows.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    /// Informational
    #[default]
    #[display("default")]
    Default,
    /// Something went wrong
    #[display("destructive")]
    Destructive,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_more::Display)]
#[display("{}: {}", title, description)]
pub struct Notification {
    /// Short headline
    title: String,
    /// Full message
    description: String,
    /// Visual weight
    variant: NotificationVariant,
}

impl Notification {
    /// An informational notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// A notification reporting a failure.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// True for [`NotificationVariant::Destructive`].
    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }

    pub(crate) fn caption_failed() -> Self {
        Self::error(
            "Caption Generation Failed",
            "Could not generate a caption for the image. Please try again.",
        )
    }

    pub(crate) fn upload_complete(count: usize) -> Self {
        let plural = if count == 1 { "" } else { "s" };
        Self::info(
            "Upload Complete",
            format!("{count} photo{plural} have been successfully uploaded."),
        )
    }

    pub(crate) fn unsupported_file(name: &str) -> Self {
        Self::error("Unsupported File", format!("'{name}' is not an image."))
    }

    pub(crate) fn file_too_large(name: &str, limit: u64) -> Self {
        Self::error(
            "File Too Large",
            format!("'{name}' exceeds the {} MiB limit.", limit / (1024 * 1024)),
        )
    }

    pub(crate) fn missing_information() -> Self {
        Self::error(
            "Missing Information",
            "Please select at least one photo and provide a theme.",
        )
    }

    pub(crate) fn story_failed() -> Self {
        Self::error(
            "Story Generation Failed",
            "Something went wrong. Please try again.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_complete_pluralizes() {
        assert_eq!(
            Notification::upload_complete(1).description(),
            "1 photo have been successfully uploaded."
        );
        assert_eq!(
            Notification::upload_complete(3).description(),
            "3 photos have been successfully uploaded."
        );
        assert!(!Notification::upload_complete(3).is_error());
    }

    #[test]
    fn failures_are_destructive() {
        assert!(Notification::caption_failed().is_error());
        assert!(Notification::story_failed().is_error());
        assert_eq!(Notification::missing_information().title(), "Missing Information");
    }
}
