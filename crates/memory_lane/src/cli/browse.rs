//! Catalog browsing commands.

use memory_lane::{
    CatalogError, CatalogErrorKind, MemoryLaneResult, PhotoCatalog, PhotoSize, PlaceholderCatalog,
    view,
};
use tracing::instrument;

/// Print every album.
#[instrument]
pub fn list_albums() -> MemoryLaneResult<()> {
    let catalog = PlaceholderCatalog::seed()?;
    print!("{}", view::albums(&catalog.albums()));
    Ok(())
}

/// Print one album's photos.
#[instrument]
pub fn show_album(id: &str) -> MemoryLaneResult<()> {
    let catalog = PlaceholderCatalog::seed()?;
    let album = catalog
        .album(id)
        .ok_or_else(|| CatalogError::new(CatalogErrorKind::AlbumNotFound(id.to_string())))?;
    let photos = catalog.album_photos(id, PhotoSize::Grid);
    print!("{}", view::album(&album, &photos));
    Ok(())
}

/// Print one photo at full size.
#[instrument]
pub fn show_photo(id: &str, album: Option<&str>) -> MemoryLaneResult<()> {
    let catalog = PlaceholderCatalog::seed()?;
    let photo = catalog
        .photo(id, PhotoSize::Full)
        .ok_or_else(|| CatalogError::new(CatalogErrorKind::PhotoNotFound(id.to_string())))?;
    print!("{}", view::photo(&photo, album));
    Ok(())
}

/// Print the photos offered for stories.
#[instrument]
pub fn list_story_photos() -> MemoryLaneResult<()> {
    let catalog = PlaceholderCatalog::seed()?;
    print!("{}", view::story_photos(&catalog.story_photos()));
    Ok(())
}
