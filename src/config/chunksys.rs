use serde::{Deserialize, Serialize};

/// Geometry of the chunk grid: how many blocks a chunk spans horizontally
/// and vertically, and how large one block is in render units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkSysConfig {
    pub chunk_width: u32,
    pub chunk_height: u32,
    pub block_scale: f32,
}

impl Default for ChunkSysConfig {
    fn default() -> Self {
        Self {
            chunk_width: 25,
            chunk_height: 128,
            block_scale: 0.25,
        }
    }
}
