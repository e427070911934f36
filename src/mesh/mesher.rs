use glam::IVec3;

use crate::mesh::atlas;
use crate::mesh::chunk_mesh::ChunkMesh;
use crate::mesh::face::BlockFace;
use crate::world::chunk::Chunk;
use crate::world::index::BlockLookup;

/// Builds the visible surface of a chunk by face culling: a block face is
/// emitted exactly when the cell it looks at is air. Neighbor probes that
/// stay inside the chunk read the chunk's own grid; probes that cross the
/// boundary go through the lookup, so a meshing thread never touches more
/// than one other chunk's lock at a time.
pub struct ChunkMesher {
    block_scale: f32,
}

impl ChunkMesher {
    pub fn new(block_scale: f32) -> Self {
        Self { block_scale }
    }

    pub fn block_scale(&self) -> f32 {
        self.block_scale
    }

    /// Meshes a chunk from scratch. Deterministic for a given grid and
    /// neighborhood: blocks are visited in y, x, z order and faces in a
    /// fixed order per block.
    pub fn mesh(&self, chunk: &Chunk, lookup: &impl BlockLookup) -> ChunkMesh {
        let dims = chunk.grid.dims();
        let mut mesh = ChunkMesh::new();

        for y in 0..dims.height as i32 {
            for x in 0..dims.width as i32 {
                for z in 0..dims.width as i32 {
                    let pos = IVec3::new(x, y, z);
                    let block = chunk.grid.get(pos);
                    if block.is_air() {
                        continue;
                    }
                    for face in BlockFace::ALL {
                        let probe = pos + face.offset();
                        let neighbor = if chunk.grid.contains(probe) {
                            chunk.grid.get(probe)
                        } else {
                            lookup.block_at(chunk.coord, probe)
                        };
                        if !neighbor.is_air() {
                            continue;
                        }
                        let corners = face
                            .corners()
                            .map(|corner| (pos + corner).as_vec3() * self.block_scale);
                        mesh.add_face(corners, atlas::face_uv(block, face));
                    }
                }
            }
        }

        mesh.recompute_normals();
        mesh.recompute_bounds();
        mesh
    }
}
