//! Single-file caption command.

use memory_lane::{
    CaptionFlow, GeminiClient, InputError, InputErrorKind, LocalFile, MemoryLaneConfig,
    MemoryLaneResult,
};
use std::path::Path;
use tracing::instrument;

/// Caption a local image and print the caption.
#[instrument(skip(config), fields(path = %path.display()))]
pub async fn caption_file(path: &Path, config: &MemoryLaneConfig) -> MemoryLaneResult<()> {
    let file = LocalFile::from_path(path).await?;
    if !file.is_image() {
        return Err(InputError::new(InputErrorKind::UnsupportedFileType {
            name: file.name().clone(),
            mime: file.mime().clone(),
        })
        .into());
    }

    let flow = CaptionFlow::new(GeminiClient::from_config(config.model.clone())?);
    let caption = flow.caption(&file.to_blob()).await?;
    println!("{caption}");
    Ok(())
}
