use serde::{Deserialize, Serialize};

/// The closed set of block kinds the world can store. `Air` is the empty
/// sentinel that every occupancy and visibility test compares against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Air,
    Stone,
    Dirt,
    Grass,
    Wood,
    Sand,
}

impl BlockType {
    pub fn is_air(self) -> bool {
        self == BlockType::Air
    }

    pub fn is_solid(self) -> bool {
        !self.is_air()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_the_only_empty_block() {
        assert!(BlockType::Air.is_air());
        for block in [
            BlockType::Stone,
            BlockType::Dirt,
            BlockType::Grass,
            BlockType::Wood,
            BlockType::Sand,
        ] {
            assert!(block.is_solid());
        }
    }

    #[test]
    fn test_default_is_air() {
        assert_eq!(BlockType::default(), BlockType::Air);
    }
}
