//! Top-level error wrapper types.

use crate::{CatalogError, ConfigError, FetchError, InputError, JsonError, ServiceError};

/// Every error a Memory Lane operation can produce.
///
/// # Examples
///
/// ```
/// use memory_lane_error::{MemoryLaneError, MemoryLaneErrorKind, FetchError, FetchErrorKind};
///
/// let fetch = FetchError::new(FetchErrorKind::Status {
///     url: "https://example.com/p1.jpg".to_string(),
///     status_code: 404,
/// });
/// let err: MemoryLaneError = fetch.into();
/// assert!(matches!(err.kind(), MemoryLaneErrorKind::Fetch(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MemoryLaneErrorKind {
    /// Caller violated a precondition
    #[from(InputError)]
    InvalidInput(InputError),
    /// Generative model call failed
    #[from(ServiceError)]
    Service(ServiceError),
    /// Photo bytes could not be retrieved
    #[from(FetchError)]
    Fetch(FetchError),
    /// Catalog lookup failed
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Memory Lane error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Memory Lane Error: {}", _0)]
pub struct MemoryLaneError(Box<MemoryLaneErrorKind>);

impl MemoryLaneError {
    /// Create a new error from a kind.
    pub fn new(kind: MemoryLaneErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MemoryLaneErrorKind {
        &self.0
    }

    /// True when the caller violated a precondition.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind(), MemoryLaneErrorKind::InvalidInput(_))
    }
}

// Generic From implementation for any type that converts to MemoryLaneErrorKind
impl<T> From<T> for MemoryLaneError
where
    T: Into<MemoryLaneErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Memory Lane operations.
pub type MemoryLaneResult<T> = std::result::Result<T, MemoryLaneError>;
