//! Catalog lookup errors.

/// Lookups against the photo catalog that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CatalogErrorKind {
    /// No album with this id
    #[display("Album not found: {}", _0)]
    AlbumNotFound(String),
    /// No photo with this id
    #[display("Photo not found: {}", _0)]
    PhotoNotFound(String),
}

/// Catalog error with location tracking.
///
/// # Examples
///
/// ```
/// use memory_lane_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::AlbumNotFound("42".to_string()));
/// assert!(format!("{}", err).contains("Album not found: 42"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The kind of error that occurred
    pub kind: CatalogErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new CatalogError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
