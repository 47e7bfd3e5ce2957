//! Memory Lane - photo albums with AI-generated captions and stories.
//!
//! Browse seed albums, queue local photos for a (simulated) upload with
//! generated captions, and turn a themed selection of photos into a story
//! page written by a hosted generative model.
//!
//! # Quick Start
//!
//! ```no_run
//! use memory_lane::{CaptionFlow, GeminiClient, LocalFile, MemoryLaneConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MemoryLaneConfig::load()?;
//! let flow = CaptionFlow::new(GeminiClient::from_config(config.model.clone())?);
//!
//! let file = LocalFile::from_path("beach.jpg").await?;
//! println!("{}", flow.caption(&file.to_blob()).await?);
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export to stdout
//! - `api` - enable tests that call the real Gemini API
//!
//! # Architecture
//!
//! - `memory_lane_error` - error types
//! - `memory_lane_core` - data model and model request types
//! - `memory_lane_interface` - traits at the service seams
//! - `memory_lane_catalog` - seed albums and photos
//! - `memory_lane_models` - Gemini client and image fetcher
//! - `memory_lane_flows` - caption and story prompts
//! - `memory_lane_workflow` - upload and story state machines
//!
//! This crate re-exports everything and hosts configuration, logging setup,
//! terminal views and the `memory-lane` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use memory_lane_catalog::*;
pub use memory_lane_core::*;
pub use memory_lane_error::*;
pub use memory_lane_flows::*;
pub use memory_lane_interface::*;
pub use memory_lane_models::*;
pub use memory_lane_workflow::*;

mod config;
mod observability;
pub mod view;

pub use config::MemoryLaneConfig;
pub use observability::{ObservabilityConfig, init_observability, shutdown_observability};
