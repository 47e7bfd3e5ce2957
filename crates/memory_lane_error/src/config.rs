//! Configuration error types.

/// Settings that could not be loaded or that no component can run with.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Offending setting, e.g. `upload.ticks`, when one is to blame
    pub key: Option<String>,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// A loading failure not tied to one setting.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(None, message.into())
    }

    /// A rejected value for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_lane_error::ConfigError;
    ///
    /// let err = ConfigError::invalid("upload.ticks", "must be positive");
    /// assert_eq!(err.key.as_deref(), Some("upload.ticks"));
    /// assert_eq!(err.message, "upload.ticks must be positive");
    /// ```
    #[track_caller]
    pub fn invalid(key: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let key = key.into();
        let message = format!("{key} {reason}");
        Self::at(Some(key), message)
    }

    #[track_caller]
    fn at(key: Option<String>, message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            key,
            message,
            line: location.line(),
            file: location.file(),
        }
    }
}
