pub mod chunksys;
pub mod worldgen;

pub use chunksys::ChunkSysConfig;
pub use worldgen::WorldGenConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::world::error::WorldError;

/// Top-level engine configuration. Every section has sensible defaults, so a
/// partial (or missing) config file still produces a runnable world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub chunks: ChunkSysConfig,
    #[serde(default)]
    pub worldgen: WorldGenConfig,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, WorldError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), WorldError> {
        if self.chunks.chunk_width == 0 || self.chunks.chunk_height == 0 {
            return Err(WorldError::InvalidDimensions {
                width: self.chunks.chunk_width,
                height: self.chunks.chunk_height,
            });
        }
        Ok(())
    }
}
