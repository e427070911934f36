pub mod config;
pub mod engine;
pub mod mesh;
pub mod world;

pub use config::EngineConfig;
pub use engine::VoxelWorld;
pub use mesh::{ChunkMesh, ChunkMesher, MeshVertex};
pub use world::{
    BlockLookup, BlockType, Chunk, ChunkCoord, EditCommand, EditKind, EditOutcome, HeightField,
    PerlinHeightField, WorldError, WorldIndex,
};
