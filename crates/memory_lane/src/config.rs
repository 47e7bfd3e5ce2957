//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//! 1. Bundled defaults (include_str! from memory_lane.toml)
//! 2. `~/.config/memory_lane/memory_lane.toml`
//! 3. `./memory_lane.toml`
//!
//! The Gemini API key is never read from these files; see `GEMINI_API_KEY`.

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use memory_lane_error::{ConfigError, MemoryLaneError, MemoryLaneResult};
use memory_lane_models::{FetchConfig, GeminiConfig};
use memory_lane_workflow::{SimulatedTransport, UploadConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../memory_lane.toml");

/// All runtime settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryLaneConfig {
    /// `[model]`: generative model client
    pub model: GeminiConfig,
    /// `[upload]`: upload queue and simulated transport
    pub upload: UploadConfig,
    /// `[fetch]`: photo retrieval
    pub fetch: FetchConfig,
}

impl MemoryLaneConfig {
    /// Load bundled defaults merged with the user's config files.
    #[instrument(name = "config_load")]
    pub fn load() -> MemoryLaneResult<Self> {
        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/memory_lane/memory_lane.toml");
            debug!(path = %home_config.display(), "Checking home configuration");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("memory_lane").required(false));
        Self::finish(builder)
    }

    /// Load bundled defaults merged with one explicit file, which must exist.
    #[instrument(name = "config_from_file", skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MemoryLaneResult<Self> {
        let builder = Self::bundled().add_source(File::from(path.as_ref()).required(true));
        Self::finish(builder)
    }

    /// Load bundled defaults merged with TOML text.
    pub fn from_toml_str(toml: &str) -> MemoryLaneResult<Self> {
        Self::finish(Self::bundled().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> MemoryLaneResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                MemoryLaneError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MemoryLaneError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no component can run with.
    pub fn validate(&self) -> MemoryLaneResult<()> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigError::invalid("model.name", "must not be empty").into());
        }
        if self.model.timeout_secs == 0 {
            return Err(ConfigError::invalid("model.timeout_secs", "must be positive").into());
        }
        if self.upload.max_file_bytes == 0 {
            return Err(ConfigError::invalid("upload.max_file_bytes", "must be positive").into());
        }
        if self.upload.ticks == 0 {
            return Err(ConfigError::invalid("upload.ticks", "must be positive").into());
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::invalid("fetch.timeout_secs", "must be positive").into());
        }
        Ok(())
    }

    /// Simulated transport paced by the `[upload]` settings.
    pub fn transport(&self) -> SimulatedTransport {
        SimulatedTransport::new(self.upload.ticks, Duration::from_millis(self.upload.tick_ms))
    }
}
