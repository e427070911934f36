pub mod terrain;

pub use terrain::{HeightField, PerlinHeightField, TerrainGenerator};
