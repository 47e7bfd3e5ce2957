//! Error types for Memory Lane.
//!
//! This crate provides the error taxonomy shared by every Memory Lane crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The three conditions callers branch on are [`InputError`] (a precondition
//! was violated), [`ServiceError`] (the generative model call failed or its
//! reply did not match the schema) and [`FetchError`] (a photo's bytes could
//! not be retrieved).
//!
//! # Examples
//!
//! ```
//! use memory_lane_error::{InputError, InputErrorKind, MemoryLaneResult};
//!
//! fn require_theme(theme: &str) -> MemoryLaneResult<()> {
//!     if theme.trim().is_empty() {
//!         Err(InputError::new(InputErrorKind::BlankTheme))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_theme("  ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod fetch;
mod input;
mod json;
mod service;

pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::ConfigError;
pub use error::{MemoryLaneError, MemoryLaneErrorKind, MemoryLaneResult};
pub use fetch::{FetchError, FetchErrorKind};
pub use input::{InputError, InputErrorKind};
pub use json::JsonError;
pub use service::{RetryableError, ServiceError, ServiceErrorKind};
