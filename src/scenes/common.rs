use glam::Vec3;

use crate::types::Vertex;

/// UVs for quads whose first corner sits at the texture's bottom-left
pub const UV_BOTTOM_UP: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// UVs for quads whose first corner sits at the texture's top-left
pub const UV_TOP_DOWN: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// Four coplanar corners in winding order, sharing one normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Vec3; 4],
    pub normal: Vec3,
    pub uvs: [[f32; 2]; 4],
}

impl Quad {
    pub const VERTEX_COUNT: usize = 6;

    /// Two triangles: (0, 1, 2) and (2, 3, 0)
    pub fn vertices(&self) -> [Vertex; 6] {
        let normal = self.normal.to_array();
        let v = |i: usize| Vertex::new(self.corners[i].to_array(), normal, self.uvs[i]);
        [v(0), v(1), v(2), v(2), v(3), v(0)]
    }
}

pub fn quad(corners: [Vec3; 4], normal: Vec3, uvs: [[f32; 2]; 4]) -> Quad {
    Quad {
        corners,
        normal,
        uvs,
    }
}
