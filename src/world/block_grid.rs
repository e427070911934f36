use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::config::ChunkSysConfig;
use crate::world::block::BlockType;

/// Dimensions of one chunk's block grid. `width` spans both horizontal axes,
/// `height` the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub width: u32,
    pub height: u32,
}

impl GridDims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height * self.width) as usize
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        pos.x >= 0
            && pos.x < self.width as i32
            && pos.y >= 0
            && pos.y < self.height as i32
            && pos.z >= 0
            && pos.z < self.width as i32
    }

    fn index(&self, pos: IVec3) -> usize {
        let w = self.width as usize;
        (pos.y as usize * w + pos.x as usize) * w + pos.z as usize
    }
}

impl From<&ChunkSysConfig> for GridDims {
    fn from(config: &ChunkSysConfig) -> Self {
        Self::new(config.chunk_width, config.chunk_height)
    }
}

/// Dense block storage for one chunk. Created full of `Air`, mutated in
/// place, never resized.
///
/// Accessors assume in-bounds coordinates; callers that might probe outside
/// the grid go through the neighbor-resolving lookup on `WorldIndex` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    dims: GridDims,
    cells: Vec<BlockType>,
}

impl BlockGrid {
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![BlockType::Air; dims.cell_count()],
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        self.dims.contains(pos)
    }

    pub fn get(&self, pos: IVec3) -> BlockType {
        debug_assert!(self.dims.contains(pos), "block read out of bounds: {pos}");
        self.cells[self.dims.index(pos)]
    }

    pub fn set(&mut self, pos: IVec3, block: BlockType) {
        debug_assert!(self.dims.contains(pos), "block write out of bounds: {pos}");
        let index = self.dims.index(pos);
        self.cells[index] = block;
    }

    /// Number of non-air cells.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|b| b.is_solid()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_air() {
        let grid = BlockGrid::new(GridDims::new(4, 8));
        assert_eq!(grid.solid_count(), 0);
        assert_eq!(grid.get(IVec3::new(3, 7, 3)), BlockType::Air);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut grid = BlockGrid::new(GridDims::new(4, 8));
        grid.set(IVec3::new(1, 5, 2), BlockType::Stone);
        assert_eq!(grid.get(IVec3::new(1, 5, 2)), BlockType::Stone);
        assert_eq!(grid.get(IVec3::new(2, 5, 1)), BlockType::Air);
        assert_eq!(grid.solid_count(), 1);
    }

    #[test]
    fn test_contains_matches_dimensions() {
        let dims = GridDims::new(4, 8);
        assert!(dims.contains(IVec3::new(0, 0, 0)));
        assert!(dims.contains(IVec3::new(3, 7, 3)));
        assert!(!dims.contains(IVec3::new(4, 0, 0)));
        assert!(!dims.contains(IVec3::new(0, 8, 0)));
        assert!(!dims.contains(IVec3::new(0, 0, -1)));
    }

    #[test]
    fn test_cells_are_independent() {
        let mut grid = BlockGrid::new(GridDims::new(3, 3));
        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    grid.set(IVec3::new(x, y, z), BlockType::Dirt);
                }
            }
        }
        grid.set(IVec3::new(1, 1, 1), BlockType::Air);
        assert_eq!(grid.solid_count(), 26);
        assert_eq!(grid.get(IVec3::new(1, 1, 1)), BlockType::Air);
        assert_eq!(grid.get(IVec3::new(1, 1, 0)), BlockType::Dirt);
    }
}
