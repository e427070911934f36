use std::collections::HashMap;
use std::sync::Arc;

use glam::IVec3;
use parking_lot::RwLock;

use crate::world::block::BlockType;
use crate::world::block_grid::GridDims;
use crate::world::chunk::Chunk;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::error::WorldError;

/// Resolves a block position expressed in some chunk's local space, which may
/// lie up to one chunk width outside that chunk's own bounds. This is the
/// seam the mesher uses to see across chunk boundaries.
pub trait BlockLookup {
    fn block_at(&self, owner: ChunkCoord, local: IVec3) -> BlockType;
}

/// Owns every chunk in the world, keyed by chunk coordinate. Chunks are
/// individually locked so meshing can read several of them concurrently
/// while edits take a single chunk's write lock.
pub struct WorldIndex {
    chunks: HashMap<ChunkCoord, Arc<RwLock<Chunk>>>,
    dims: GridDims,
}

impl WorldIndex {
    pub fn new(dims: GridDims) -> Self {
        Self {
            chunks: HashMap::new(),
            dims,
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn register(&mut self, chunk: Chunk) -> Result<(), WorldError> {
        if chunk.grid.dims() != self.dims {
            return Err(WorldError::DimensionMismatch(chunk.coord));
        }
        if self.chunks.contains_key(&chunk.coord) {
            return Err(WorldError::ChunkAlreadyRegistered(chunk.coord));
        }
        self.chunks
            .insert(chunk.coord, Arc::new(RwLock::new(chunk)));
        Ok(())
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<Arc<RwLock<Chunk>>> {
        self.chunks.get(&coord).cloned()
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn coords(&self) -> Vec<ChunkCoord> {
        self.chunks.keys().copied().collect()
    }
}

impl BlockLookup for WorldIndex {
    /// The vertical bound is absolute: nothing exists above or below the
    /// grid, so out-of-range heights resolve to `Air`. A horizontal overflow
    /// is remapped into the neighbor one step over on each overflowed axis;
    /// callers only ever probe one block beyond a face, so a single step is
    /// always enough. A missing neighbor chunk (the world edge) is `Air`.
    fn block_at(&self, owner: ChunkCoord, local: IVec3) -> BlockType {
        if local.y < 0 || local.y >= self.dims.height as i32 {
            return BlockType::Air;
        }

        let width = self.dims.width as i32;
        let mut coord = owner;
        let mut pos = local;

        if pos.x < 0 {
            coord = coord.offset(-1, 0);
            pos.x += width;
        } else if pos.x >= width {
            coord = coord.offset(1, 0);
            pos.x -= width;
        }

        if pos.z < 0 {
            coord = coord.offset(0, -1);
            pos.z += width;
        } else if pos.z >= width {
            coord = coord.offset(0, 1);
            pos.z -= width;
        }

        match self.chunk(coord) {
            Some(chunk) => chunk.read().grid.get(pos),
            None => BlockType::Air,
        }
    }
}
