use glam::{Vec2, Vec3};

use crate::mesh::vertex::MeshVertex;

/// Axis-aligned bounding box of a mesh, in the same scaled local space as
/// its vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const EMPTY: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };
}

/// Surface geometry for one chunk: positions, per-vertex normals and UVs as
/// parallel arrays, plus triangle indices into them. Every face contributes
/// four fresh vertices and two triangles; vertices are never shared across
/// faces, so normals stay flat per face.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkMesh {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    pub bounds: Aabb,
}

impl ChunkMesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            bounds: Aabb::EMPTY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn face_count(&self) -> usize {
        self.vertices.len() / 4
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends one quad: four corner positions and one UV repeated per
    /// corner, split into two triangles. The split is fixed so that, with
    /// the corner orders the mesher uses, both triangles wind outward.
    pub fn add_face(&mut self, corners: [Vec3; 4], uv: Vec2) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        self.uvs.extend_from_slice(&[uv; 4]);
        self.indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base + 1,
            base + 3,
            base + 2,
        ]);
    }

    /// Derives flat per-vertex normals from the triangle winding. Vertices
    /// are unshared, so each one is touched only by its own face's
    /// triangles and the result is the face normal.
    pub fn recompute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.vertices.len(), Vec3::ZERO);
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let normal = (self.vertices[b] - self.vertices[a])
                .cross(self.vertices[c] - self.vertices[a])
                .normalize_or_zero();
            self.normals[a] = normal;
            self.normals[b] = normal;
            self.normals[c] = normal;
        }
    }

    pub fn recompute_bounds(&mut self) {
        self.bounds = match self.vertices.first() {
            None => Aabb::EMPTY,
            Some(&first) => self.vertices.iter().fold(
                Aabb {
                    min: first,
                    max: first,
                },
                |bounds, &v| Aabb {
                    min: bounds.min.min(v),
                    max: bounds.max.max(v),
                },
            ),
        };
    }

    /// Packs the parallel arrays into one interleaved buffer for upload.
    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.vertices
            .iter()
            .zip(self.normals.iter())
            .zip(self.uvs.iter())
            .map(|((&position, &normal), &uv)| MeshVertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }
}

impl Default for ChunkMesh {
    fn default() -> Self {
        Self::new()
    }
}
