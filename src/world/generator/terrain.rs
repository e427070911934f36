use glam::IVec3;
use noise::{NoiseFn, Perlin};

use crate::config::{ChunkSysConfig, WorldGenConfig};
use crate::world::block::BlockType;
use crate::world::block_grid::{BlockGrid, GridDims};
use crate::world::chunk_coord::ChunkCoord;

/// A 2D height function over world-space coordinates. Terrain generation is
/// written against this trait so the noise source can be swapped out.
pub trait HeightField: Send + Sync {
    fn height_at(&self, wx: f64, wz: f64) -> f64;
}

/// Smooth rolling terrain from a single Perlin layer: the sample is mapped
/// from [-1, 1] to [0, 1], scaled by the amplitude and lifted by the base
/// height. Deterministic for a fixed seed.
pub struct PerlinHeightField {
    noise: Perlin,
    frequency: f64,
    amplitude: f64,
    base_height: f64,
}

impl PerlinHeightField {
    pub fn new(config: &WorldGenConfig) -> Self {
        Self {
            noise: Perlin::new(config.seed),
            frequency: config.frequency,
            amplitude: config.amplitude,
            base_height: config.base_height,
        }
    }
}

impl HeightField for PerlinHeightField {
    fn height_at(&self, wx: f64, wz: f64) -> f64 {
        let sample = self
            .noise
            .get([wx * self.frequency, wz * self.frequency]);
        (sample * 0.5 + 0.5) * self.amplitude + self.base_height
    }
}

/// Fills chunk grids column by column from a height field. Columns are solid
/// Dirt below the (floored) height and Air above it; surface-type variation
/// such as a grass cap is left for later.
pub struct TerrainGenerator {
    dims: GridDims,
    block_scale: f64,
}

impl TerrainGenerator {
    pub fn new(config: &ChunkSysConfig) -> Self {
        Self {
            dims: GridDims::from(config),
            block_scale: config.block_scale as f64,
        }
    }

    pub fn generate(&self, coord: ChunkCoord, field: &dyn HeightField) -> BlockGrid {
        let mut grid = BlockGrid::new(self.dims);
        let (origin_x, origin_z) = self.sample_origin(coord);

        for x in 0..self.dims.width as i32 {
            for z in 0..self.dims.width as i32 {
                let wx = origin_x + x as f64 * self.block_scale;
                let wz = origin_z + z as f64 * self.block_scale;
                let height = field.height_at(wx, wz);
                let top = (height.floor() as i32).clamp(0, self.dims.height as i32);
                for y in 0..top {
                    grid.set(IVec3::new(x, y, z), BlockType::Dirt);
                }
            }
        }

        log::trace!(
            "generated chunk {coord}: {} solid blocks",
            grid.solid_count()
        );
        grid
    }

    fn sample_origin(&self, coord: ChunkCoord) -> (f64, f64) {
        coord.world_offset(self.dims.width as i32, self.block_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlatField(f64);

    impl HeightField for FlatField {
        fn height_at(&self, _wx: f64, _wz: f64) -> f64 {
            self.0
        }
    }

    fn test_generator() -> TerrainGenerator {
        TerrainGenerator::new(&ChunkSysConfig {
            chunk_width: 8,
            chunk_height: 32,
            block_scale: 0.25,
        })
    }

    fn column_height(grid: &BlockGrid, x: i32, z: i32) -> i32 {
        let mut height = 0;
        for y in 0..grid.dims().height as i32 {
            if grid.get(IVec3::new(x, y, z)).is_solid() {
                height = y + 1;
            }
        }
        height
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = WorldGenConfig::default();
        let generator = test_generator();
        let a = generator.generate(ChunkCoord::new(3, -2), &PerlinHeightField::new(&config));
        let b = generator.generate(ChunkCoord::new(3, -2), &PerlinHeightField::new(&config));
        assert_eq!(a, b);
    }

    #[test]
    fn test_columns_are_dirt_below_air_above() {
        let generator = test_generator();
        let grid = generator.generate(
            ChunkCoord::new(0, 0),
            &PerlinHeightField::new(&WorldGenConfig::default()),
        );
        for x in 0..8 {
            for z in 0..8 {
                let h = column_height(&grid, x, z);
                for y in 0..h {
                    assert_eq!(grid.get(IVec3::new(x, y, z)), BlockType::Dirt);
                }
                for y in h..32 {
                    assert_eq!(grid.get(IVec3::new(x, y, z)), BlockType::Air);
                }
            }
        }
    }

    #[test]
    fn test_flat_field_fills_exactly_floor_height() {
        let generator = test_generator();
        let grid = generator.generate(ChunkCoord::new(0, 0), &FlatField(5.7));
        for x in 0..8 {
            for z in 0..8 {
                assert_eq!(column_height(&grid, x, z), 5);
            }
        }
    }

    #[test]
    fn test_height_is_clamped_to_the_grid() {
        let generator = test_generator();
        let tall = generator.generate(ChunkCoord::new(0, 0), &FlatField(1000.0));
        assert_eq!(column_height(&tall, 0, 0), 32);
        let sunken = generator.generate(ChunkCoord::new(0, 0), &FlatField(-3.0));
        assert_eq!(sunken.solid_count(), 0);
    }

    #[test]
    fn test_perlin_heights_stay_in_configured_band() {
        let config = WorldGenConfig::default();
        let field = PerlinHeightField::new(&config);
        for i in 0..100 {
            let h = field.height_at(i as f64 * 0.37, i as f64 * 0.53);
            assert!(h >= config.base_height);
            assert!(h <= config.base_height + config.amplitude);
        }
    }
}
