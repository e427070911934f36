use serde::{Deserialize, Serialize};

/// Terrain generation parameters. `grid_size` is the number of chunks per
/// horizontal axis generated at startup; the height field parameters shape
/// the Perlin layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    pub seed: u32,
    pub grid_size: u32,
    pub frequency: f64,
    pub amplitude: f64,
    pub base_height: f64,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            grid_size: 10,
            frequency: 0.2,
            amplitude: 25.0,
            base_height: 10.0,
        }
    }
}
