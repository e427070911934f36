use std::sync::Arc;

use glam::IVec3;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::mesh::{ChunkMesh, ChunkMesher};
use crate::world::{
    BlockGrid, BlockType, Chunk, ChunkCoord, EditCommand, EditOutcome, GridDims, HeightField,
    TerrainGenerator, WorldEditor, WorldError, WorldIndex,
};

/// The whole engine core: the chunk index plus the terrain generator and
/// mesher configured against the same grid geometry. Construction generates
/// and meshes the full startup grid; afterwards the world changes only
/// through edits.
pub struct VoxelWorld {
    index: WorldIndex,
    mesher: ChunkMesher,
    generator: TerrainGenerator,
}

impl VoxelWorld {
    /// Generates a `grid_size` x `grid_size` square of chunks around the
    /// origin from the given height field, then meshes all of them. Both
    /// passes fan out across the thread pool; generation touches no shared
    /// state and meshing only takes read locks until the final swap.
    pub fn generate(config: &EngineConfig, field: &dyn HeightField) -> Result<Self, WorldError> {
        config.validate()?;
        let dims = GridDims::from(&config.chunks);
        let generator = TerrainGenerator::new(&config.chunks);
        let mesher = ChunkMesher::new(config.chunks.block_scale);

        let size = config.worldgen.grid_size as i32;
        let coords: Vec<ChunkCoord> = (0..size)
            .flat_map(|x| (0..size).map(move |z| ChunkCoord::new(x, z)))
            .collect();

        log::info!(
            "generating {} chunks ({size}x{size}, {}x{} blocks each)",
            coords.len(),
            dims.width,
            dims.height
        );
        let grids: Vec<(ChunkCoord, BlockGrid)> = coords
            .par_iter()
            .map(|&coord| (coord, generator.generate(coord, field)))
            .collect();

        let mut index = WorldIndex::new(dims);
        for (coord, grid) in grids {
            index.register(Chunk::new(coord, grid))?;
        }

        let world = Self {
            index,
            mesher,
            generator,
        };
        world.remesh_all();
        log::info!(
            "world ready: {} chunks, {} faces",
            world.chunk_count(),
            world.total_faces()
        );
        Ok(world)
    }

    /// Rebuilds every chunk mesh. Meshes are computed in parallel under read
    /// locks, then swapped in one chunk at a time.
    pub fn remesh_all(&self) {
        let coords = self.index.coords();
        let meshes: Vec<(ChunkCoord, ChunkMesh)> = coords
            .par_iter()
            .filter_map(|&coord| {
                let chunk = self.index.chunk(coord)?;
                let mesh = self.mesher.mesh(&chunk.read(), &self.index);
                Some((coord, mesh))
            })
            .collect();
        for (coord, mesh) in meshes {
            if let Some(chunk) = self.index.chunk(coord) {
                chunk.write().mesh = mesh;
            }
        }
    }

    pub fn apply(&self, command: EditCommand) -> EditOutcome {
        WorldEditor::new(&self.index, &self.mesher).apply(command)
    }

    pub fn place_block(&self, position: IVec3, block: BlockType) -> EditOutcome {
        self.apply(EditCommand::place(position, block))
    }

    pub fn remove_block(&self, position: IVec3) -> EditOutcome {
        self.apply(EditCommand::remove(position))
    }

    /// Rebuilds a single chunk's mesh against its current neighborhood.
    pub fn remesh_chunk(&self, coord: ChunkCoord) {
        if let Some(chunk) = self.index.chunk(coord) {
            let mesh = self.mesher.mesh(&chunk.read(), &self.index);
            chunk.write().mesh = mesh;
        }
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<Arc<RwLock<Chunk>>> {
        self.index.chunk(coord)
    }

    pub fn index(&self) -> &WorldIndex {
        &self.index
    }

    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    pub fn dims(&self) -> GridDims {
        self.index.dims()
    }

    pub fn chunk_count(&self) -> usize {
        self.index.len()
    }

    /// Total faces across all chunk meshes.
    pub fn total_faces(&self) -> usize {
        self.index
            .coords()
            .into_iter()
            .filter_map(|coord| self.index.chunk(coord))
            .map(|chunk| chunk.read().mesh.face_count())
            .sum()
    }
}
