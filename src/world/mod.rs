pub mod block;
pub mod block_grid;
pub mod chunk;
pub mod chunk_coord;
pub mod editor;
pub mod error;
pub mod generator;
pub mod index;

pub use block::BlockType;
pub use block_grid::{BlockGrid, GridDims};
pub use chunk::Chunk;
pub use chunk_coord::ChunkCoord;
pub use editor::{EditCommand, EditKind, EditOutcome, WorldEditor};
pub use error::WorldError;
pub use generator::{HeightField, PerlinHeightField, TerrainGenerator};
pub use index::{BlockLookup, WorldIndex};
