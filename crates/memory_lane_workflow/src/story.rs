//! Story composition state machine.

use crate::notification::Notification;
use derive_getters::Getters;
use memory_lane_core::{ImageBlob, Photo, Story};
use memory_lane_error::{InputError, InputErrorKind, MemoryLaneResult};
use memory_lane_flows::{StoryFlow, StoryReply};
use memory_lane_interface::{GenerativeDriver, ImageFetcher};
use tracing::{debug, info, instrument, warn};

/// Story workflow state.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum StoryState {
    /// Choosing photos and a theme
    #[display("composing")]
    Composing,
    /// Waiting on an attempt
    #[display("generating")]
    Generating {
        /// Attempt being waited on
        attempt: u64,
    },
    /// Showing a finished story
    #[display("presenting")]
    Presenting(Story),
}

/// One story attempt: the selection and theme it was started with.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct GenerationTicket {
    /// Attempt number
    attempt: u64,
    /// Selected photos in selection order
    photos: Vec<Photo>,
    /// Trimmed theme
    theme: String,
}

/// Fetch every photo concurrently, preserving order.
///
/// # Errors
///
/// Fails with the first fetch error; the other results are discarded.
#[instrument(skip(fetcher, photos), fields(count = photos.len()))]
pub async fn fetch_all(fetcher: &dyn ImageFetcher, photos: &[Photo]) -> MemoryLaneResult<Vec<ImageBlob>> {
    futures::future::try_join_all(photos.iter().map(|photo| fetcher.fetch(&photo.url))).await
}

/// Selection, theme and generated story for the story page.
#[derive(Debug)]
pub struct StoryWorkflow {
    state: StoryState,
    selection: Vec<Photo>,
    theme: String,
    next_attempt: u64,
    notifications: Vec<Notification>,
}

impl Default for StoryWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryWorkflow {
    /// Start composing with nothing selected.
    pub fn new() -> Self {
        Self {
            state: StoryState::Composing,
            selection: Vec::new(),
            theme: String::new(),
            next_attempt: 1,
            notifications: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &StoryState {
        &self.state
    }

    /// Selected photos in selection order.
    pub fn selection(&self) -> &[Photo] {
        &self.selection
    }

    /// Theme as entered.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The presented story, if any.
    pub fn story(&self) -> Option<&Story> {
        match &self.state {
            StoryState::Presenting(story) => Some(story),
            _ => None,
        }
    }

    /// True if a photo with this id is selected.
    pub fn is_selected(&self, photo_id: &str) -> bool {
        self.selection.iter().any(|p| p.id == photo_id)
    }

    /// Pending notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn ensure_composing(&self, action: &str) -> MemoryLaneResult<()> {
        match self.state {
            StoryState::Composing => Ok(()),
            ref other => Err(InputError::invalid_state(action, other.to_string()).into()),
        }
    }

    /// Add or remove a photo. Adding an already selected photo is a no-op.
    pub fn toggle_photo(&mut self, photo: &Photo, selected: bool) -> MemoryLaneResult<()> {
        self.ensure_composing("change the selection")?;
        if selected {
            if !self.is_selected(&photo.id) {
                self.selection.push(photo.clone());
            }
        } else {
            self.selection.retain(|p| p.id != photo.id);
        }
        Ok(())
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: impl Into<String>) -> MemoryLaneResult<()> {
        self.ensure_composing("change the theme")?;
        self.theme = theme.into();
        Ok(())
    }

    /// Validate the draft and enter `Generating`.
    ///
    /// Without a photo or a theme a "Missing Information" notification is
    /// queued and the workflow stays in `Composing`.
    pub fn begin_generation(&mut self) -> MemoryLaneResult<GenerationTicket> {
        self.ensure_composing("generate a story")?;

        let missing = if self.selection.is_empty() {
            Some(InputErrorKind::EmptySelection)
        } else if self.theme.trim().is_empty() {
            Some(InputErrorKind::BlankTheme)
        } else {
            None
        };
        if let Some(kind) = missing {
            self.notifications.push(Notification::missing_information());
            return Err(InputError::new(kind).into());
        }

        let attempt = self.next_attempt;
        self.next_attempt += 1;
        self.state = StoryState::Generating { attempt };
        info!(attempt, photos = self.selection.len(), "Story generation started");

        Ok(GenerationTicket {
            attempt,
            photos: self.selection.clone(),
            theme: self.theme.trim().to_string(),
        })
    }

    /// Apply the outcome of an attempt.
    ///
    /// Returns false, changing nothing, unless the workflow is still waiting
    /// on this ticket's attempt.
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        result: MemoryLaneResult<StoryReply>,
    ) -> bool {
        if self.state != (StoryState::Generating { attempt: ticket.attempt }) {
            debug!(attempt = ticket.attempt, state = %self.state, "Dropped stale story result");
            return false;
        }

        match result {
            Ok(reply) => {
                if !reply.is_complete() {
                    warn!(
                        attempt = ticket.attempt,
                        photos = ticket.photos.len(),
                        captions = reply.page().photos.len(),
                        "Caption count differs from photo count, truncating"
                    );
                }
                let page = reply.into_page();
                let captions = page.captions();
                let story = Story::compose(
                    page.title,
                    page.introduction,
                    ticket.photos,
                    captions,
                    page.conclusion,
                );
                info!(attempt = ticket.attempt, title = %story.title, "Story ready");
                self.state = StoryState::Presenting(story);
            }
            Err(e) => {
                warn!(attempt = ticket.attempt, error = %e, "Story generation failed");
                self.notifications.push(Notification::story_failed());
                self.state = StoryState::Composing;
            }
        }
        true
    }

    /// Run a whole attempt: fetch the selected photos, generate, apply.
    ///
    /// Returns whether a story is now presented. Fetch and service failures
    /// become a notification; precondition failures are returned.
    pub async fn generate<D: GenerativeDriver>(
        &mut self,
        fetcher: &dyn ImageFetcher,
        flow: &StoryFlow<D>,
    ) -> MemoryLaneResult<bool> {
        let ticket = self.begin_generation()?;

        let result = match fetch_all(fetcher, ticket.photos()).await {
            Ok(images) => flow.generate(&images, ticket.theme()).await,
            Err(e) => Err(e),
        };

        let presented = result.is_ok();
        Ok(self.complete_generation(ticket, result) && presented)
    }

    /// Clear selection, theme and story and return to `Composing`.
    ///
    /// Any attempt still in flight becomes stale.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.theme.clear();
        self.state = StoryState::Composing;
        debug!("Story workflow reset");
    }
}
