//! JSON error types.

/// Bundled or received JSON that could not be decoded.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Could not parse {}: {} ({}:{})", context, message, file, line)]
pub struct JsonError {
    /// What was being parsed, e.g. "placeholder images"
    pub context: String,
    /// Decoder message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Record a decode failure for `context` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_lane_error::JsonError;
    ///
    /// let err = JsonError::new("placeholder images", "missing field `imageUrl`");
    /// assert_eq!(err.context, "placeholder images");
    /// assert!(err.to_string().starts_with("Could not parse placeholder images"));
    /// ```
    #[track_caller]
    pub fn new(context: impl Into<String>, message: impl std::fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self {
            context: context.into(),
            message: message.to_string(),
            line: location.line(),
            file: location.file(),
        }
    }
}
