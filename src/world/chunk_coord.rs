use glam::{IVec2, IVec3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Horizontal chunk coordinate. The world is chunked along X and Z only;
/// there is no vertical chunking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord(pub IVec2);

impl Serialize for ChunkCoord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.0.x, self.0.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChunkCoord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, z) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(ChunkCoord(IVec2::new(x, z)))
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl ChunkCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self(IVec2::new(x, z))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn z(&self) -> i32 {
        self.0.y
    }

    /// Coordinate of the chunk containing a world-space block position.
    /// Flooring division keeps the mapping correct for negative positions.
    pub fn from_block_pos(pos: IVec3, chunk_width: i32) -> Self {
        Self::new(pos.x.div_euclid(chunk_width), pos.z.div_euclid(chunk_width))
    }

    /// World-space block position of this chunk's minimum corner.
    pub fn block_origin(&self, chunk_width: i32) -> IVec3 {
        IVec3::new(self.0.x * chunk_width, 0, self.0.y * chunk_width)
    }

    /// World-space offset of the chunk, scaled to render units. Matches the
    /// sampling offsets terrain generation feeds into the height field.
    pub fn world_offset(&self, chunk_width: i32, block_scale: f64) -> (f64, f64) {
        (
            self.0.x as f64 * chunk_width as f64 * block_scale,
            self.0.y as f64 * chunk_width as f64 * block_scale,
        )
    }

    pub fn offset(&self, dx: i32, dz: i32) -> Self {
        Self(self.0 + IVec2::new(dx, dz))
    }
}

impl From<IVec2> for ChunkCoord {
    fn from(vec: IVec2) -> Self {
        Self(vec)
    }
}
