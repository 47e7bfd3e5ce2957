//! Upload command: queue, optionally caption, then upload with a progress readout.

use super::print_notifications;
use memory_lane::{
    CandidateId, CaptionFlow, GeminiClient, GenerativeDriver, InMemoryPreviewStore, LocalFile,
    MemoryLaneConfig, MemoryLaneResult, UploadWorkflow, view,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Queue `paths`, caption them when asked, and run the simulated upload.
#[instrument(skip(paths, config), fields(count = paths.len()))]
pub async fn upload_files(
    paths: &[PathBuf],
    caption: bool,
    config: &MemoryLaneConfig,
) -> MemoryLaneResult<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match LocalFile::from_path(path).await {
            Ok(file) => files.push(file),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                println!("[!] Could not read {}", path.display());
            }
        }
    }

    let previews = Arc::new(InMemoryPreviewStore::new());
    let mut workflow = UploadWorkflow::new(previews, config.upload.clone());
    let ids = workflow.select_files(files)?;
    print_notifications(workflow.take_notifications());

    if ids.is_empty() {
        println!("Nothing to upload.");
        return Ok(());
    }

    if caption {
        caption_queued(&mut workflow, &ids, || {
            Ok(CaptionFlow::new(GeminiClient::from_config(config.model.clone())?))
        })
        .await;
        print_notifications(workflow.take_notifications());
    }

    println!("Queued:");
    print!("{}", view::upload_queue(workflow.candidates()));

    let transport = config.transport();
    workflow
        .upload_with_progress(&transport, |percent| {
            print!("\r{}", view::progress_bar(percent));
            let _ = std::io::stdout().flush();
        })
        .await?;
    println!();

    print_notifications(workflow.take_notifications());
    Ok(())
}

/// Caption every queued file. If the caption client cannot be built, each
/// file gets a failed attempt and keeps its caption; the queue is untouched.
async fn caption_queued<D: GenerativeDriver>(
    workflow: &mut UploadWorkflow,
    ids: &[CandidateId],
    flow: impl FnOnce() -> MemoryLaneResult<CaptionFlow<D>>,
) -> usize {
    match flow() {
        Ok(flow) => workflow.generate_captions(ids, &flow).await,
        Err(e) => {
            warn!(error = %e, "Caption service unavailable");
            workflow.fail_captions(ids, &e);
            0
        }
    }
}
