//! Errors retrieving photo bytes.

/// Ways retrieving or encoding a photo can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FetchErrorKind {
    /// Request could not be sent or timed out
    #[display("Request to {} failed: {}", url, message)]
    Request {
        /// Requested URL
        url: String,
        /// Underlying error message
        message: String,
    },
    /// Server answered with a non-success status
    #[display("GET {} returned HTTP {}", url, status_code)]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status_code: u16,
    },
    /// Body could not be read
    #[display("Failed to read body of {}: {}", url, message)]
    Body {
        /// Requested URL
        url: String,
        /// Underlying error message
        message: String,
    },
    /// Local file could not be read
    #[display("Failed to read {}: {}", path, message)]
    FileRead {
        /// File path
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// Fetch error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new FetchError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
