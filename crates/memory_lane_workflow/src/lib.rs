//! Upload and story workflows for Memory Lane.
//!
//! Both workflows are explicit state machines owned by a single caller and
//! driven by named events. Long-running work (caption generation, photo
//! fetching, story generation, upload progress) is split into a `begin_*`
//! event that hands out a ticket and a `complete_*` event that applies the
//! result only if the ticket is still current. Results arriving after a
//! removal or reset are dropped.
//!
//! Failures never escape as errors once work has started: they become
//! [`Notification`]s, collected with `take_notifications()`, and the workflow
//! falls back to its last stable state. Precondition violations are still
//! returned as invalid-input errors.
//!
//! # Example
//!
//! ```
//! use memory_lane_core::LocalFile;
//! use memory_lane_workflow::{InMemoryPreviewStore, UploadConfig, UploadWorkflow};
//! use std::sync::Arc;
//!
//! let previews = Arc::new(InMemoryPreviewStore::new());
//! let mut workflow = UploadWorkflow::new(previews.clone(), UploadConfig::default());
//!
//! let ids = workflow.select_files(vec![LocalFile::new("beach.jpg", vec![0xff; 64])]).unwrap();
//! workflow.set_caption(ids[0], "Sandcastles").unwrap();
//!
//! workflow.start_upload().unwrap();
//! workflow.record_progress(100.0).unwrap();
//!
//! assert_eq!(previews.live_count(), 0);
//! assert_eq!(workflow.take_notifications()[0].title(), "Upload Complete");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod notification;
mod preview;
mod story;
mod transport;
mod upload;

pub use notification::{Notification, NotificationVariant};
pub use preview::InMemoryPreviewStore;
pub use story::{GenerationTicket, StoryState, StoryWorkflow, fetch_all};
pub use transport::SimulatedTransport;
pub use upload::{
    CandidateId, CandidateStatus, CaptionRequest, CaptionTicket, UploadCandidate, UploadConfig,
    UploadState, UploadWorkflow,
};
