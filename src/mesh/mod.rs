pub mod atlas;
pub mod chunk_mesh;
pub mod face;
pub mod mesher;
pub mod vertex;

pub use chunk_mesh::{Aabb, ChunkMesh};
pub use face::BlockFace;
pub use mesher::ChunkMesher;
pub use vertex::MeshVertex;
