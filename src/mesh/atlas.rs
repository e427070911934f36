use glam::Vec2;

use crate::mesh::face::BlockFace;
use crate::world::block::BlockType;

/// Atlas tiles are 16px cells in a 256px texture.
const TILE_SIZE: f32 = 16.0 / 256.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasTile {
    pub col: u8,
    pub row: u8,
}

impl AtlasTile {
    const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub fn uv(self) -> Vec2 {
        Vec2::new(self.col as f32 * TILE_SIZE, self.row as f32 * TILE_SIZE)
    }
}

/// Per-face tile assignment for one block type.
#[derive(Debug, Clone, Copy)]
struct FaceTiles {
    top: AtlasTile,
    bottom: AtlasTile,
    side: AtlasTile,
}

impl FaceTiles {
    const fn uniform(tile: AtlasTile) -> Self {
        Self {
            top: tile,
            bottom: tile,
            side: tile,
        }
    }
}

const STONE: FaceTiles = FaceTiles::uniform(AtlasTile::new(1, 15));
const DIRT: FaceTiles = FaceTiles::uniform(AtlasTile::new(2, 15));
// The bottom face reuses the side tile rather than plain dirt; kept as-is to
// match the original table, see DESIGN.md.
const GRASS: FaceTiles = FaceTiles {
    top: AtlasTile::new(2, 15),
    bottom: AtlasTile::new(4, 15),
    side: AtlasTile::new(4, 15),
};
const WOOD: FaceTiles = FaceTiles::uniform(AtlasTile::new(4, 15));
const FALLBACK: FaceTiles = FaceTiles::uniform(AtlasTile::new(10, 14));

/// Atlas tile for a block face. Block types without an entry fall back to
/// the "unknown" tile.
pub fn face_tile(block: BlockType, face: BlockFace) -> AtlasTile {
    let tiles = match block {
        BlockType::Stone => STONE,
        BlockType::Dirt => DIRT,
        BlockType::Grass => GRASS,
        BlockType::Wood => WOOD,
        _ => FALLBACK,
    };
    match face {
        BlockFace::Top => tiles.top,
        BlockFace::Bottom => tiles.bottom,
        _ => tiles.side,
    }
}

pub fn face_uv(block: BlockType, face: BlockFace) -> Vec2 {
    face_tile(block, face).uv()
}
