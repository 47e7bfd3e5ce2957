//! Story command.

use super::print_notifications;
use memory_lane::{
    CatalogError, CatalogErrorKind, GeminiClient, GenerativeDriver, HttpImageFetcher,
    ImageFetcher, MemoryLaneConfig, MemoryLaneResult, PhotoCatalog, PlaceholderCatalog, StoryFlow,
    StoryWorkflow, fetch_all, view,
};
use tracing::{debug, instrument};

/// Generate and print a story for the given photos and theme.
#[instrument(skip(config), fields(photos = photo_ids.len()))]
pub async fn create_story(
    theme: &str,
    photo_ids: &[String],
    config: &MemoryLaneConfig,
) -> MemoryLaneResult<()> {
    let catalog = PlaceholderCatalog::seed()?;
    let available = catalog.story_photos();

    let mut workflow = StoryWorkflow::new();
    for id in photo_ids {
        let photo = available
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CatalogError::new(CatalogErrorKind::PhotoNotFound(id.clone())))?;
        workflow.toggle_photo(photo, true)?;
    }
    workflow.set_theme(theme)?;

    let presented = run_generation(&mut workflow, || {
        let fetcher = HttpImageFetcher::new(&config.fetch)?;
        let flow = StoryFlow::new(GeminiClient::from_config(config.model.clone())?);
        Ok((fetcher, flow))
    })
    .await;
    print_notifications(workflow.take_notifications());

    if presented {
        if let Some(story) = workflow.story() {
            print!("{}", view::story(story));
        }
    }
    Ok(())
}

/// Validate the draft, then build the clients and run one attempt.
///
/// Clients are only built once the draft is valid. A client that cannot be
/// built fails the attempt like any other service error.
async fn run_generation<F, D>(
    workflow: &mut StoryWorkflow,
    clients: impl FnOnce() -> MemoryLaneResult<(F, StoryFlow<D>)>,
) -> bool
where
    F: ImageFetcher,
    D: GenerativeDriver,
{
    let ticket = match workflow.begin_generation() {
        Ok(ticket) => ticket,
        Err(e) => {
            debug!(error = %e, "Story not started");
            return false;
        }
    };

    let result = match clients() {
        Ok((fetcher, flow)) => match fetch_all(&fetcher, ticket.photos()).await {
            Ok(images) => flow.generate(&images, ticket.theme()).await,
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    let succeeded = result.is_ok();
    workflow.complete_generation(ticket, result) && succeeded
}
