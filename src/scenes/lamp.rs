use glam::Vec3;

use crate::types::{LampInstance, Vertex};

pub const LAMP_SCALE: f32 = 0.2;

/// Unit cube centred on the origin, 6 faces of 2 triangles
pub fn lamp_cube() -> Vec<Vertex> {
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        // normal, u axis, v axis
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    ];
    const UV: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut vertices = Vec::with_capacity(36);
    for (normal, u, v) in FACES {
        let centre = normal * 0.5;
        let corners = [
            centre - u * 0.5 - v * 0.5,
            centre + u * 0.5 - v * 0.5,
            centre + u * 0.5 + v * 0.5,
            centre - u * 0.5 + v * 0.5,
        ];
        for i in [0, 1, 2, 2, 3, 0] {
            vertices.push(Vertex::new(corners[i].to_array(), normal.to_array(), UV[i]));
        }
    }
    vertices
}

/// Light positions are world space and skip the scene offset, so each cube
/// sits exactly where its point light shines from.
pub fn lamp_instances(positions: &[Vec3]) -> Vec<LampInstance> {
    positions
        .iter()
        .map(|&p| LampInstance::new(p, LAMP_SCALE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_36_vertices_within_half_unit() {
        let cube = lamp_cube();
        assert_eq!(cube.len(), 36);
        for v in &cube {
            assert!(v.position.iter().all(|c| (c.abs() - 0.5).abs() < 1e-6));
        }
    }

    #[test]
    fn test_cube_faces_wind_outwards() {
        for tri in lamp_cube().chunks(3) {
            let a = Vec3::from_array(tri[0].position);
            let b = Vec3::from_array(tri[1].position);
            let c = Vec3::from_array(tri[2].position);
            let normal = Vec3::from_array(tri[0].normal);

            assert!((b - a).cross(c - a).dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_instances_follow_positions() {
        let instances = lamp_instances(&[Vec3::new(1.0, 0.0, 0.0)]);
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].model[3], [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(instances[0].model[0][0], LAMP_SCALE);
    }
}
