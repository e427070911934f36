use bytemuck::{Pod, Zeroable};

/// Interleaved vertex layout for handing a mesh to a renderer in one buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}
