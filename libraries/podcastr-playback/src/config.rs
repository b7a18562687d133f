//! Player configuration
//!
//! Loaded from an optional `podcastr.toml` and `PODCASTR_*` environment
//! variables. Every flag defaults to off, which is the state a fresh session
//! starts in.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "podcastr.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PODCASTR";

/// Initial settings for a [`PlayerStore`](crate::PlayerStore)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Start with shuffle enabled
    #[serde(default)]
    pub shuffle: bool,

    /// Start with loop enabled
    #[serde(default)]
    pub looping: bool,

    /// Start with the player panel visible
    #[serde(default)]
    pub show_player: bool,

    /// Seed for shuffle draws. `None` seeds from OS entropy.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl PlayerConfig {
    /// Load configuration from `podcastr.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(CONFIG_FILE);
        Self::build(path.exists().then_some(path.as_path()))
    }

    /// Load configuration from an explicit file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(Some(path.as_ref()))
    }

    fn build(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables (PODCASTR_SHUFFLE=true, ...)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        tracing::debug!(?config, "Loaded player configuration");

        Ok(config)
    }
}
