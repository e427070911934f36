use thiserror::Error;

use crate::world::chunk_coord::ChunkCoord;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("invalid chunk dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("chunk already registered at {0}")]
    ChunkAlreadyRegistered(ChunkCoord),
    #[error("chunk at {0} does not match the world's grid dimensions")]
    DimensionMismatch(ChunkCoord),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}
