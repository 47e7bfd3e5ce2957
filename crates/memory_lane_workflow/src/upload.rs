//! Upload queue state machine.

use crate::notification::Notification;
use derive_getters::Getters;
use futures::StreamExt;
use memory_lane_core::{ImageBlob, LocalFile};
use memory_lane_error::{InputError, InputErrorKind, MemoryLaneError, MemoryLaneResult};
use memory_lane_flows::CaptionFlow;
use memory_lane_interface::{
    GenerativeDriver, PreviewHandle, PreviewStore, UploadBatch, UploadItem, UploadTransport,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Upload settings, loaded from the `[upload]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Largest accepted file in bytes
    pub max_file_bytes: u64,
    /// Progress reports per simulated upload
    pub ticks: u32,
    /// Delay between simulated progress reports in milliseconds
    pub tick_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024,
            ticks: 10,
            tick_ms: 200,
        }
    }
}

impl UploadConfig {
    /// Check that `file` is an image within the size cap.
    pub fn admit(&self, file: &LocalFile) -> Result<(), InputError> {
        if !file.is_image() {
            return Err(InputError::new(InputErrorKind::UnsupportedFileType {
                name: file.name().clone(),
                mime: file.mime().clone(),
            }));
        }
        if file.size() > self.max_file_bytes {
            return Err(InputError::new(InputErrorKind::FileTooLarge {
                name: file.name().clone(),
                size: file.size(),
                limit: self.max_file_bytes,
            }));
        }
        Ok(())
    }
}

/// Stable identifier of a queued file. Never reused within a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{}", _0)]
pub struct CandidateId(u64);

impl CandidateId {
    /// Numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Identifies one caption attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("caption-{}", _0)]
pub struct CaptionTicket(u64);

/// Caption state of a queued file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStatus {
    /// Idle
    Ready,
    /// A caption attempt is in flight
    CaptionPending(CaptionTicket),
}

/// A locally selected file awaiting caption and upload.
#[derive(Debug, Getters)]
pub struct UploadCandidate {
    /// Stable id
    id: CandidateId,
    /// The selected file
    file: LocalFile,
    /// Local preview
    #[getter(skip)]
    preview: PreviewHandle,
    /// Caption entered or generated so far
    caption: String,
    /// Caption state
    status: CandidateStatus,
}

impl UploadCandidate {
    /// Preview URL for display.
    pub fn preview_url(&self) -> &str {
        self.preview.url()
    }

    /// True while a caption attempt is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self.status, CandidateStatus::CaptionPending(_))
    }
}

/// Everything needed to run one caption attempt outside the workflow.
#[derive(Debug, Clone, Getters)]
pub struct CaptionRequest {
    /// Ticket to hand back with the result
    ticket: CaptionTicket,
    /// Candidate being captioned
    candidate: CandidateId,
    /// The candidate's image
    blob: ImageBlob,
}

/// Upload queue state.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub enum UploadState {
    /// Nothing queued
    #[display("empty")]
    Empty,
    /// Files queued, not uploading
    #[display("selecting")]
    Selecting,
    /// Upload running
    #[display("uploading")]
    Uploading {
        /// Percentage in `[0, 100]`
        progress: f64,
    },
    /// Last upload finished; the queue is empty
    #[display("complete")]
    Complete {
        /// Files in the finished batch
        uploaded: usize,
    },
}

/// Queue of files to caption and upload.
///
/// Every preview handle the workflow creates is revoked exactly once: on
/// removal, on upload completion, on reset or when the workflow is dropped.
pub struct UploadWorkflow {
    previews: Arc<dyn PreviewStore>,
    config: UploadConfig,
    candidates: Vec<UploadCandidate>,
    state: UploadState,
    next_id: u64,
    next_ticket: u64,
    notifications: Vec<Notification>,
}

impl std::fmt::Debug for UploadWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadWorkflow")
            .field("state", &self.state)
            .field("candidates", &self.candidates)
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}

impl UploadWorkflow {
    /// An empty queue.
    pub fn new(previews: Arc<dyn PreviewStore>, config: UploadConfig) -> Self {
        Self {
            previews,
            config,
            candidates: Vec::new(),
            state: UploadState::Empty,
            next_id: 1,
            next_ticket: 1,
            notifications: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> UploadState {
        self.state
    }

    /// Queued files in selection order.
    pub fn candidates(&self) -> &[UploadCandidate] {
        &self.candidates
    }

    /// One queued file.
    pub fn candidate(&self, id: CandidateId) -> Option<&UploadCandidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Current upload percentage; 0 outside an upload, 100 once complete.
    pub fn progress(&self) -> f64 {
        match self.state {
            UploadState::Uploading { progress } => progress,
            UploadState::Complete { .. } => 100.0,
            _ => 0.0,
        }
    }

    /// Pending notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn ensure_not_uploading(&self) -> MemoryLaneResult<()> {
        if matches!(self.state, UploadState::Uploading { .. }) {
            return Err(InputError::new(InputErrorKind::UploadInProgress).into());
        }
        Ok(())
    }

    fn position(&self, id: CandidateId) -> MemoryLaneResult<usize> {
        self.candidates
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| InputError::new(InputErrorKind::CandidateNotFound(id.get())).into())
    }

    fn settle_idle_state(&mut self) {
        if !matches!(self.state, UploadState::Uploading { .. }) {
            self.state = if self.candidates.is_empty() {
                UploadState::Empty
            } else {
                UploadState::Selecting
            };
        }
    }

    /// Queue files. Non-images and files over the size cap are skipped with a
    /// notification.
    ///
    /// Returns the ids of the accepted files.
    #[instrument(skip(self, files), fields(count = files.len()))]
    pub fn select_files(&mut self, files: Vec<LocalFile>) -> MemoryLaneResult<Vec<CandidateId>> {
        self.ensure_not_uploading()?;

        let mut accepted = Vec::with_capacity(files.len());
        for file in files {
            if let Err(rejection) = self.config.admit(&file) {
                warn!(error = %rejection, "Rejected file");
                let notification = match rejection.kind {
                    InputErrorKind::FileTooLarge { limit, .. } => {
                        Notification::file_too_large(file.name(), limit)
                    }
                    _ => Notification::unsupported_file(file.name()),
                };
                self.notifications.push(notification);
                continue;
            }

            let id = CandidateId(self.next_id);
            self.next_id += 1;
            let preview = self.previews.create(&file);
            debug!(candidate = %id, name = %file.name(), "Queued file");
            self.candidates.push(UploadCandidate {
                id,
                file,
                preview,
                caption: String::new(),
                status: CandidateStatus::Ready,
            });
            accepted.push(id);
        }

        self.settle_idle_state();
        Ok(accepted)
    }

    /// Mark a candidate as captioning and hand out what the caption call needs.
    pub fn begin_caption(&mut self, id: CandidateId) -> MemoryLaneResult<CaptionRequest> {
        self.ensure_not_uploading()?;
        let index = self.position(id)?;
        let ticket = CaptionTicket(self.next_ticket);

        let candidate = &mut self.candidates[index];
        if candidate.is_pending() {
            return Err(InputError::new(InputErrorKind::CaptionPending(id.get())).into());
        }
        self.next_ticket += 1;
        candidate.status = CandidateStatus::CaptionPending(ticket);

        debug!(candidate = %id, ticket = %ticket, "Caption requested");
        Ok(CaptionRequest {
            ticket,
            candidate: id,
            blob: candidate.file.to_blob(),
        })
    }

    /// Apply a caption result.
    ///
    /// Returns false, changing nothing, when the candidate was removed or the
    /// ticket is no longer the one it is waiting on.
    pub fn complete_caption(
        &mut self,
        ticket: CaptionTicket,
        result: MemoryLaneResult<String>,
    ) -> bool {
        self.settle_caption(ticket, result.map_err(|e| e.to_string()))
    }

    fn settle_caption(&mut self, ticket: CaptionTicket, outcome: Result<String, String>) -> bool {
        let Some(candidate) = self
            .candidates
            .iter_mut()
            .find(|c| c.status == CandidateStatus::CaptionPending(ticket))
        else {
            debug!(ticket = %ticket, "Dropped stale caption result");
            return false;
        };

        candidate.status = CandidateStatus::Ready;
        match outcome {
            Ok(caption) => {
                debug!(candidate = %candidate.id, "Caption applied");
                candidate.caption = caption;
            }
            Err(error) => {
                warn!(candidate = %candidate.id, %error, "Caption generation failed");
                self.notifications.push(Notification::caption_failed());
            }
        }
        true
    }

    /// Record a failed caption attempt for each candidate without calling a
    /// service, e.g. when no caption client could be built.
    ///
    /// Each candidate that could start an attempt gets a "Caption Generation
    /// Failed" notification and keeps its caption. Returns how many failed.
    pub fn fail_captions(&mut self, ids: &[CandidateId], error: &MemoryLaneError) -> usize {
        let mut failed = 0;
        for id in ids {
            match self.begin_caption(*id) {
                Ok(request) => {
                    if self.settle_caption(request.ticket, Err(error.to_string())) {
                        failed += 1;
                    }
                }
                Err(e) => debug!(candidate = %id, error = %e, "Skipped caption request"),
            }
        }
        failed
    }

    /// Caption one candidate through `flow`.
    ///
    /// Returns whether the caption was applied. Service failures become a
    /// notification.
    pub async fn generate_caption<D: GenerativeDriver>(
        &mut self,
        id: CandidateId,
        flow: &CaptionFlow<D>,
    ) -> MemoryLaneResult<bool> {
        let request = self.begin_caption(id)?;
        let result = flow.caption(request.blob()).await;
        let succeeded = result.is_ok();
        Ok(self.complete_caption(request.ticket, result) && succeeded)
    }

    /// Caption several candidates with their requests in flight together.
    ///
    /// Candidates that cannot start (unknown, already pending) are skipped.
    /// Returns how many captions were applied.
    #[instrument(skip(self, ids, flow), fields(count = ids.len()))]
    pub async fn generate_captions<D: GenerativeDriver>(
        &mut self,
        ids: &[CandidateId],
        flow: &CaptionFlow<D>,
    ) -> usize {
        let requests: Vec<CaptionRequest> = ids
            .iter()
            .filter_map(|id| match self.begin_caption(*id) {
                Ok(request) => Some(request),
                Err(e) => {
                    debug!(candidate = %id, error = %e, "Skipped caption request");
                    None
                }
            })
            .collect();

        let results =
            futures::future::join_all(requests.iter().map(|r| flow.caption(&r.blob))).await;

        let mut applied = 0;
        for (request, result) in requests.iter().zip(results) {
            let ok = result.is_ok();
            if self.complete_caption(request.ticket, result) && ok {
                applied += 1;
            }
        }
        applied
    }

    /// Replace a candidate's caption by hand.
    pub fn set_caption(&mut self, id: CandidateId, caption: impl Into<String>) -> MemoryLaneResult<()> {
        self.ensure_not_uploading()?;
        let index = self.position(id)?;
        let candidate = &mut self.candidates[index];
        if candidate.is_pending() {
            return Err(InputError::new(InputErrorKind::CaptionPending(id.get())).into());
        }
        candidate.caption = caption.into();
        Ok(())
    }

    /// Drop a candidate and revoke its preview.
    pub fn remove(&mut self, id: CandidateId) -> MemoryLaneResult<()> {
        self.ensure_not_uploading()?;
        let index = self.position(id)?;
        self.remove_index(index);
        Ok(())
    }

    /// Drop the candidate at `index` in queue order.
    pub fn remove_at(&mut self, index: usize) -> MemoryLaneResult<()> {
        self.ensure_not_uploading()?;
        if index >= self.candidates.len() {
            return Err(InputError::new(InputErrorKind::CandidateIndexOutOfRange {
                index,
                len: self.candidates.len(),
            })
            .into());
        }
        self.remove_index(index);
        Ok(())
    }

    fn remove_index(&mut self, index: usize) {
        let candidate = self.candidates.remove(index);
        debug!(candidate = %candidate.id, "Removed file");
        self.previews.revoke(candidate.preview);
        self.settle_idle_state();
    }

    /// Snapshot the queue and enter `Uploading` at 0%.
    pub fn start_upload(&mut self) -> MemoryLaneResult<UploadBatch> {
        self.ensure_not_uploading()?;
        if self.candidates.is_empty() {
            return Err(InputError::new(InputErrorKind::EmptyQueue).into());
        }

        let batch = UploadBatch::new(
            self.candidates
                .iter()
                .map(|c| UploadItem::new(c.file.name().clone(), c.caption.clone(), c.file.size()))
                .collect(),
        );
        info!(files = batch.len(), total_bytes = batch.total_bytes(), "Upload started");
        self.state = UploadState::Uploading { progress: 0.0 };
        Ok(batch)
    }

    /// Record a progress report in percent.
    ///
    /// Values are clamped to `[0, 100]` and never move backwards. Reaching
    /// 100 finishes the upload. Returns true once finished.
    pub fn record_progress(&mut self, percent: f64) -> MemoryLaneResult<bool> {
        let UploadState::Uploading { progress } = self.state else {
            return Err(InputError::invalid_state("record upload progress", self.state.to_string()).into());
        };

        if percent.is_nan() {
            warn!("Ignored NaN upload progress");
            return Ok(false);
        }
        let progress = percent.clamp(0.0, 100.0).max(progress);
        if progress < 100.0 {
            self.state = UploadState::Uploading { progress };
            return Ok(false);
        }

        self.finish_upload();
        Ok(true)
    }

    fn finish_upload(&mut self) {
        let uploaded = self.candidates.len();
        for candidate in self.candidates.drain(..) {
            self.previews.revoke(candidate.preview);
        }
        self.state = UploadState::Complete { uploaded };
        self.notifications.push(Notification::upload_complete(uploaded));
        info!(uploaded, "Upload complete");
    }

    /// Run a whole upload through `transport`.
    ///
    /// Returns the number of files uploaded.
    pub async fn upload(&mut self, transport: &dyn UploadTransport) -> MemoryLaneResult<usize> {
        self.upload_with_progress(transport, |_| {}).await
    }

    /// Like [`Self::upload`], calling `on_progress` with each recorded percentage.
    #[instrument(skip(self, transport, on_progress), fields(transport = transport.name()))]
    pub async fn upload_with_progress(
        &mut self,
        transport: &dyn UploadTransport,
        mut on_progress: impl FnMut(f64),
    ) -> MemoryLaneResult<usize> {
        let batch = self.start_upload()?;
        let count = batch.len();
        let mut reports = transport.upload(batch);

        while let Some(report) = reports.next().await {
            match report {
                Ok(report) => {
                    let done = self.record_progress(report.percent())?;
                    on_progress(self.progress());
                    if done {
                        return Ok(count);
                    }
                }
                Err(e) => warn!(error = %e, "Transport reported an error, continuing"),
            }
        }

        warn!("Transport ended before reporting completion");
        self.record_progress(100.0)?;
        on_progress(self.progress());
        Ok(count)
    }

    /// Release every preview and return to `Empty`.
    pub fn reset(&mut self) -> MemoryLaneResult<()> {
        self.ensure_not_uploading()?;
        for candidate in self.candidates.drain(..) {
            self.previews.revoke(candidate.preview);
        }
        self.state = UploadState::Empty;
        debug!("Upload queue reset");
        Ok(())
    }
}

impl Drop for UploadWorkflow {
    fn drop(&mut self) {
        for candidate in self.candidates.drain(..) {
            self.previews.revoke(candidate.preview);
        }
    }
}
