use glam::{IVec3, Vec3};

/// The six faces of a block, in the order the mesher probes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Right,
    Left,
    Front,
    Back,
    Top,
    Bottom,
}

impl BlockFace {
    pub const ALL: [Self; 6] = [
        Self::Right,
        Self::Left,
        Self::Front,
        Self::Back,
        Self::Top,
        Self::Bottom,
    ];

    /// Unit step from a block to the neighbor this face looks at.
    pub fn offset(self) -> IVec3 {
        match self {
            Self::Right => IVec3::new(1, 0, 0),
            Self::Left => IVec3::new(-1, 0, 0),
            Self::Front => IVec3::new(0, 0, 1),
            Self::Back => IVec3::new(0, 0, -1),
            Self::Top => IVec3::new(0, 1, 0),
            Self::Bottom => IVec3::new(0, -1, 0),
        }
    }

    pub fn normal(self) -> Vec3 {
        self.offset().as_vec3()
    }

    /// Quad corners relative to the block's minimum corner. The order pairs
    /// with the mesher's fixed triangle split so every face winds outward.
    pub fn corners(self) -> [IVec3; 4] {
        match self {
            Self::Right => [
                IVec3::new(1, 0, 0),
                IVec3::new(1, 1, 0),
                IVec3::new(1, 0, 1),
                IVec3::new(1, 1, 1),
            ],
            Self::Left => [
                IVec3::new(0, 0, 0),
                IVec3::new(0, 0, 1),
                IVec3::new(0, 1, 0),
                IVec3::new(0, 1, 1),
            ],
            Self::Front => [
                IVec3::new(0, 0, 1),
                IVec3::new(1, 0, 1),
                IVec3::new(0, 1, 1),
                IVec3::new(1, 1, 1),
            ],
            Self::Back => [
                IVec3::new(0, 0, 0),
                IVec3::new(0, 1, 0),
                IVec3::new(1, 0, 0),
                IVec3::new(1, 1, 0),
            ],
            Self::Top => [
                IVec3::new(0, 1, 0),
                IVec3::new(0, 1, 1),
                IVec3::new(1, 1, 0),
                IVec3::new(1, 1, 1),
            ],
            Self::Bottom => [
                IVec3::new(0, 0, 0),
                IVec3::new(1, 0, 0),
                IVec3::new(0, 0, 1),
                IVec3::new(1, 0, 1),
            ],
        }
    }
}
