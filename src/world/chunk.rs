use crate::mesh::ChunkMesh;
use crate::world::block_grid::BlockGrid;
use crate::world::chunk_coord::ChunkCoord;

/// One chunk: its coordinate, its block grid, and the last mesh built from
/// it. The mesh is derived data and is only ever replaced wholesale by a
/// rebuild; neighbor chunks are never referenced directly, all cross-chunk
/// access goes through `WorldIndex`.
#[derive(Debug)]
pub struct Chunk {
    pub coord: ChunkCoord,
    pub grid: BlockGrid,
    pub mesh: ChunkMesh,
}

impl Chunk {
    pub fn new(coord: ChunkCoord, grid: BlockGrid) -> Self {
        Self {
            coord,
            grid,
            mesh: ChunkMesh::new(),
        }
    }
}
