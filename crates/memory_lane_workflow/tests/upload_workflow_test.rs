mod test_utils;

use memory_lane_core::LocalFile;
use memory_lane_error::{
    InputErrorKind, MemoryLaneError, MemoryLaneErrorKind, ServiceError, ServiceErrorKind,
};
use memory_lane_flows::CaptionFlow;
use memory_lane_workflow::{
    InMemoryPreviewStore, SimulatedTransport, UploadConfig, UploadState, UploadWorkflow,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockDriver, jpeg};

fn workflow() -> (UploadWorkflow, Arc<InMemoryPreviewStore>) {
    let previews = Arc::new(InMemoryPreviewStore::new());
    let workflow = UploadWorkflow::new(previews.clone(), UploadConfig::default());
    (workflow, previews)
}

fn input_kind(err: &MemoryLaneError) -> InputErrorKind {
    match err.kind() {
        MemoryLaneErrorKind::InvalidInput(e) => e.kind.clone(),
        other => panic!("expected invalid input, got {other}"),
    }
}

#[test]
fn selecting_queues_images_with_previews() -> anyhow::Result<()> {
    let (mut wf, previews) = workflow();
    assert_eq!(wf.state(), UploadState::Empty);

    let ids = wf.select_files(vec![jpeg("a.jpg", 10), jpeg("b.png", 20)])?;

    assert_eq!(ids.len(), 2);
    assert_eq!(wf.state(), UploadState::Selecting);
    assert_eq!(previews.live_count(), 2);
    for candidate in wf.candidates() {
        assert!(candidate.caption().is_empty());
        assert!(!candidate.is_pending());
        assert!(previews.is_live(candidate.preview_url()));
    }
    Ok(())
}

#[test]
fn non_images_and_oversized_files_are_rejected_individually() -> anyhow::Result<()> {
    let previews = Arc::new(InMemoryPreviewStore::new());
    let config = UploadConfig {
        max_file_bytes: 100,
        ..UploadConfig::default()
    };
    let mut wf = UploadWorkflow::new(previews.clone(), config);

    let ids = wf.select_files(vec![
        LocalFile::new("notes.txt", b"hello".to_vec()),
        jpeg("huge.jpg", 101),
        jpeg("ok.jpg", 100),
    ])?;

    assert_eq!(ids.len(), 1);
    assert_eq!(wf.candidates()[0].file().name(), "ok.jpg");
    assert_eq!(previews.created_count(), 1);

    let notes = wf.take_notifications();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title(), "Unsupported File");
    assert_eq!(notes[1].title(), "File Too Large");
    assert!(notes.iter().all(|n| n.is_error()));
    Ok(())
}

#[test]
fn admission_reports_the_rejection_reason() {
    let config = UploadConfig {
        max_file_bytes: 10,
        ..UploadConfig::default()
    };

    assert!(config.admit(&jpeg("fits.jpg", 10)).is_ok());
    assert_eq!(
        config.admit(&jpeg("big.jpg", 11)).unwrap_err().kind,
        InputErrorKind::FileTooLarge {
            name: "big.jpg".to_string(),
            size: 11,
            limit: 10,
        }
    );
    assert!(matches!(
        config.admit(&LocalFile::new("song.mp3", vec![1])).unwrap_err().kind,
        InputErrorKind::UnsupportedFileType { .. }
    ));
}

#[test]
fn removal_revokes_exactly_once_and_keeps_ids_stable() -> anyhow::Result<()> {
    let (mut wf, previews) = workflow();
    let ids = wf.select_files(vec![jpeg("a.jpg", 1), jpeg("b.jpg", 1), jpeg("c.jpg", 1)])?;

    wf.remove(ids[0])?;
    wf.set_caption(ids[2], "Still me")?;

    assert_eq!(previews.revoked_count(), 1);
    assert_eq!(wf.candidate(ids[2]).map(|c| c.caption().as_str()), Some("Still me"));

    let err = wf.remove(ids[0]).unwrap_err();
    assert_eq!(input_kind(&err), InputErrorKind::CandidateNotFound(ids[0].get()));
    assert_eq!(previews.revoked_count(), 1);

    wf.remove_at(0)?;
    assert_eq!(wf.candidates()[0].id(), &ids[2]);
    let err = wf.remove_at(5).unwrap_err();
    assert_eq!(
        input_kind(&err),
        InputErrorKind::CandidateIndexOutOfRange { index: 5, len: 1 }
    );

    wf.remove(ids[2])?;
    assert_eq!(wf.state(), UploadState::Empty);
    assert_eq!(previews.live_count(), 0);
    assert_eq!(previews.revoked_count(), 3);
    Ok(())
}

#[test]
fn caption_attempt_cannot_be_reentered_or_edited() -> anyhow::Result<()> {
    let (mut wf, _) = workflow();
    let id = wf.select_files(vec![jpeg("a.jpg", 4)])?[0];

    let request = wf.begin_caption(id)?;
    assert_eq!(request.blob().mime(), "image/jpeg");
    assert!(wf.candidate(id).is_some_and(|c| c.is_pending()));

    assert_eq!(
        input_kind(&wf.begin_caption(id).unwrap_err()),
        InputErrorKind::CaptionPending(id.get())
    );
    assert_eq!(
        input_kind(&wf.set_caption(id, "manual").unwrap_err()),
        InputErrorKind::CaptionPending(id.get())
    );

    assert!(wf.complete_caption(*request.ticket(), Ok("Generated".into())));
    assert_eq!(wf.candidate(id).map(|c| c.caption().as_str()), Some("Generated"));
    assert!(!wf.candidate(id).is_some_and(|c| c.is_pending()));
    Ok(())
}

#[test]
fn failed_caption_keeps_text_and_notifies() -> anyhow::Result<()> {
    let (mut wf, _) = workflow();
    let id = wf.select_files(vec![jpeg("a.jpg", 4)])?[0];
    wf.set_caption(id, "Typed by hand")?;

    let request = wf.begin_caption(id)?;
    let failure: MemoryLaneError = ServiceError::new(ServiceErrorKind::EmptyResponse).into();
    assert!(wf.complete_caption(*request.ticket(), Err(failure)));

    assert_eq!(wf.candidate(id).map(|c| c.caption().as_str()), Some("Typed by hand"));
    let notes = wf.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title(), "Caption Generation Failed");
    assert_eq!(
        notes[0].description(),
        "Could not generate a caption for the image. Please try again."
    );
    Ok(())
}

#[tokio::test]
async fn unavailable_caption_service_still_uploads() -> anyhow::Result<()> {
    let (mut wf, previews) = workflow();
    let ids = wf.select_files(vec![jpeg("a.jpg", 4), jpeg("b.png", 8)])?;
    wf.set_caption(ids[1], "Kept")?;

    let missing_key: MemoryLaneError = ServiceError::new(ServiceErrorKind::MissingApiKey).into();
    assert_eq!(wf.fail_captions(&ids, &missing_key), 2);

    assert!(wf.candidates().iter().all(|c| !c.is_pending()));
    assert_eq!(wf.candidate(ids[1]).map(|c| c.caption().as_str()), Some("Kept"));
    let notes = wf.take_notifications();
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|n| n.title() == "Caption Generation Failed"));

    let uploaded = wf
        .upload(&SimulatedTransport::new(2, Duration::from_millis(1)))
        .await?;
    assert_eq!(uploaded, 2);
    assert_eq!(wf.state(), UploadState::Complete { uploaded: 2 });
    assert_eq!(previews.live_count(), 0);
    Ok(())
}

#[test]
fn late_caption_after_removal_is_dropped() -> anyhow::Result<()> {
    let (mut wf, _) = workflow();
    let ids = wf.select_files(vec![jpeg("a.jpg", 1), jpeg("b.jpg", 1)])?;

    let request = wf.begin_caption(ids[0])?;
    wf.remove(ids[0])?;

    assert!(!wf.complete_caption(*request.ticket(), Ok("Too late".into())));
    assert!(wf.candidates().iter().all(|c| c.caption().is_empty()));
    assert!(wf.take_notifications().is_empty());
    Ok(())
}

#[test]
fn late_caption_after_reset_is_dropped() -> anyhow::Result<()> {
    let (mut wf, previews) = workflow();
    let id = wf.select_files(vec![jpeg("a.jpg", 1)])?[0];

    let request = wf.begin_caption(id)?;
    wf.reset()?;

    assert_eq!(wf.state(), UploadState::Empty);
    assert_eq!(previews.live_count(), 0);
    assert!(!wf.complete_caption(*request.ticket(), Ok("Too late".into())));
    Ok(())
}

#[tokio::test]
async fn generate_caption_through_flow() -> anyhow::Result<()> {
    let (mut wf, _) = workflow();
    let id = wf.select_files(vec![jpeg("a.jpg", 8)])?[0];
    let flow = CaptionFlow::new(MockDriver::new_json(json!({"caption": "Campfire stories"})));

    assert!(wf.generate_caption(id, &flow).await?);
    assert_eq!(wf.candidate(id).map(|c| c.caption().as_str()), Some("Campfire stories"));
    Ok(())
}

#[tokio::test]
async fn generate_caption_failure_becomes_notification() -> anyhow::Result<()> {
    let (mut wf, _) = workflow();
    let id = wf.select_files(vec![jpeg("a.jpg", 8)])?[0];
    let flow = CaptionFlow::new(MockDriver::new_error(ServiceErrorKind::Blocked("SAFETY".into())));

    assert!(!wf.generate_caption(id, &flow).await?);
    assert!(wf.candidate(id).is_some_and(|c| c.caption().is_empty() && !c.is_pending()));
    assert_eq!(wf.take_notifications()[0].title(), "Caption Generation Failed");
    Ok(())
}

#[tokio::test]
async fn independent_captions_run_together() -> anyhow::Result<()> {
    let (mut wf, _) = workflow();
    let ids = wf.select_files(vec![jpeg("a.jpg", 1), jpeg("b.jpg", 2), jpeg("c.jpg", 3)])?;
    let driver = MockDriver::new_json(json!({"caption": "Same for all"}));
    let flow = CaptionFlow::new(driver.clone());

    let applied = wf.generate_captions(&ids, &flow).await;

    assert_eq!(applied, 3);
    assert_eq!(driver.call_count(), 3);
    assert!(wf.candidates().iter().all(|c| c.caption() == "Same for all"));
    Ok(())
}

#[test]
fn progress_is_clamped_monotonic_and_completes_once() -> anyhow::Result<()> {
    let (mut wf, previews) = workflow();
    let ids = wf.select_files(vec![jpeg("a.jpg", 10), jpeg("b.jpg", 30)])?;
    wf.set_caption(ids[1], "Second")?;

    let batch = wf.start_upload()?;
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.total_bytes(), 40);
    assert_eq!(batch.items()[1].caption(), "Second");
    assert_eq!(wf.state(), UploadState::Uploading { progress: 0.0 });

    assert!(!wf.record_progress(-5.0)?);
    assert_eq!(wf.progress(), 0.0);
    assert!(!wf.record_progress(40.0)?);
    assert!(!wf.record_progress(20.0)?);
    assert_eq!(wf.progress(), 40.0);
    assert!(!wf.record_progress(f64::NAN)?);
    assert_eq!(wf.progress(), 40.0);

    assert_eq!(
        input_kind(&wf.select_files(vec![jpeg("c.jpg", 1)]).unwrap_err()),
        InputErrorKind::UploadInProgress
    );
    assert_eq!(
        input_kind(&wf.remove(ids[0]).unwrap_err()),
        InputErrorKind::UploadInProgress
    );

    assert!(wf.record_progress(250.0)?);
    assert_eq!(wf.state(), UploadState::Complete { uploaded: 2 });
    assert_eq!(wf.progress(), 100.0);
    assert!(wf.candidates().is_empty());
    assert_eq!(previews.live_count(), 0);
    assert_eq!(previews.revoked_count(), 2);

    let err = wf.record_progress(100.0).unwrap_err();
    assert!(matches!(input_kind(&err), InputErrorKind::InvalidState { .. }));

    let notes = wf.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].description(), "2 photos have been successfully uploaded.");
    Ok(())
}

#[test]
fn empty_queue_cannot_upload() {
    let (mut wf, _) = workflow();
    assert_eq!(
        input_kind(&wf.start_upload().unwrap_err()),
        InputErrorKind::EmptyQueue
    );
}

#[tokio::test]
async fn simulated_upload_reports_rising_progress() -> anyhow::Result<()> {
    let (mut wf, previews) = workflow();
    wf.select_files(vec![jpeg("a.jpg", 1000), jpeg("b.jpg", 3000)])?;
    let transport = SimulatedTransport::new(5, Duration::from_millis(1));

    let mut seen = Vec::new();
    let uploaded = wf.upload_with_progress(&transport, |p| seen.push(p)).await?;

    assert_eq!(uploaded, 2);
    assert_eq!(seen.len(), 5);
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(seen.iter().filter(|p| **p == 100.0).count(), 1);
    assert_eq!(wf.state(), UploadState::Complete { uploaded: 2 });
    assert_eq!(previews.live_count(), 0);
    Ok(())
}

#[tokio::test]
async fn zero_byte_batch_completes_in_one_step() -> anyhow::Result<()> {
    let (mut wf, _) = workflow();
    wf.select_files(vec![jpeg("empty.jpg", 0)])?;
    let transport = SimulatedTransport::new(10, Duration::from_secs(60));

    let mut seen = Vec::new();
    let uploaded = wf.upload_with_progress(&transport, |p| seen.push(p)).await?;

    assert_eq!(uploaded, 1);
    assert_eq!(seen, vec![100.0]);
    Ok(())
}

#[tokio::test]
async fn new_selection_after_completion_starts_over() -> anyhow::Result<()> {
    let (mut wf, _) = workflow();
    wf.select_files(vec![jpeg("a.jpg", 5)])?;
    wf.upload(&SimulatedTransport::new(2, Duration::ZERO)).await?;

    wf.select_files(vec![jpeg("b.jpg", 5)])?;

    assert_eq!(wf.state(), UploadState::Selecting);
    assert_eq!(wf.progress(), 0.0);
    assert_eq!(wf.candidates().len(), 1);
    Ok(())
}

#[test]
fn dropping_the_workflow_releases_previews() -> anyhow::Result<()> {
    let (mut wf, previews) = workflow();
    wf.select_files(vec![jpeg("a.jpg", 1), jpeg("b.jpg", 1)])?;
    drop(wf);

    assert_eq!(previews.live_count(), 0);
    assert_eq!(previews.revoked_count(), 2);
    Ok(())
}
