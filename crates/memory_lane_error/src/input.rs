//! Precondition violations (`InvalidInput`).

/// Conditions where the caller violated a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputErrorKind {
    /// Image blob has no MIME type
    #[display("Image is missing its MIME type")]
    MissingMimeType,
    /// Image blob has no payload
    #[display("Image is missing its data")]
    MissingPayload,
    /// String is not a `data:<mime>;base64,<data>` URI
    #[display("Malformed data URI: {}", _0)]
    MalformedDataUri(String),
    /// Story generation without any selected photo
    #[display("Select at least one photo")]
    EmptySelection,
    /// Story generation with an empty or whitespace theme
    #[display("Theme must not be blank")]
    BlankTheme,
    /// Story request without images
    #[display("At least one image is required")]
    NoImages,
    /// Upload candidate does not exist
    #[display("Upload candidate {} not found", _0)]
    CandidateNotFound(u64),
    /// Upload candidate index is out of range
    #[display("No upload candidate at index {} (queue length {})", index, len)]
    CandidateIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current queue length
        len: usize,
    },
    /// Caption generation already running for this candidate
    #[display("Caption generation already in progress for candidate {}", _0)]
    CaptionPending(u64),
    /// Operation not allowed while the queue is uploading
    #[display("Upload in progress")]
    UploadInProgress,
    /// Upload requested with nothing queued
    #[display("Nothing to upload")]
    EmptyQueue,
    /// Selected file is not an image
    #[display("Unsupported file type for '{}': {}", name, mime)]
    UnsupportedFileType {
        /// File name
        name: String,
        /// Detected MIME type
        mime: String,
    },
    /// Selected file exceeds the size cap
    #[display("File '{}' is {} bytes, limit is {} bytes", name, size, limit)]
    FileTooLarge {
        /// File name
        name: String,
        /// File size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },
    /// Operation does not apply to the workflow's current state
    #[display("Cannot {} while {}", action, state)]
    InvalidState {
        /// Attempted action
        action: String,
        /// Current state name
        state: String,
    },
}

/// Invalid input error with location tracking.
///
/// # Examples
///
/// ```
/// use memory_lane_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::EmptySelection);
/// assert_eq!(err.kind, InputErrorKind::EmptySelection);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid Input: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The kind of error that occurred
    pub kind: InputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`InputErrorKind::InvalidState`].
    #[track_caller]
    pub fn invalid_state(action: impl Into<String>, state: impl Into<String>) -> Self {
        Self::new(InputErrorKind::InvalidState {
            action: action.into(),
            state: state.into(),
        })
    }
}
