use glam::{Mat4, Vec3};

use super::common::{quad, Quad, UV_BOTTOM_UP, UV_TOP_DOWN};
use crate::types::Vertex;

/// Model transform applied to all stairwell geometry
pub const SCENE_OFFSET: Vec3 = Vec3::new(-2.0, -2.5, 0.0);

pub const CLEAR_COLOR: [f64; 3] = [0.1, 0.1, 0.1];

pub const FLOOR_HALF_EXTENT: f32 = 100.0;
pub const WALL_HEIGHT: f32 = 11.0;

const UV_WALL: [[f32; 2]; 4] = [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];

/// Straight staircase climbing towards -Z between x = 0 and x = width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StairSpec {
    pub steps: u32,
    pub width: f32,
    pub rise: f32,
    pub run: f32,
    pub start_z: f32,
}

impl Default for StairSpec {
    fn default() -> Self {
        Self {
            steps: 30,
            width: 8.0,
            rise: 0.3,
            run: 1.0,
            start_z: -1.0,
        }
    }
}

impl StairSpec {
    pub fn riser_count(&self) -> usize {
        self.steps as usize
    }

    /// The top riser meets the back wall, so there is one tread fewer
    pub fn tread_count(&self) -> usize {
        self.steps.saturating_sub(1) as usize
    }

    pub fn top_height(&self) -> f32 {
        self.steps as f32 * self.rise
    }

    /// z of the last riser
    pub fn end_z(&self) -> f32 {
        self.start_z - self.steps.saturating_sub(1) as f32 * self.run
    }
}

/// Static scene geometry plus where to draw the lamps
#[derive(Debug, Clone)]
pub struct Scene {
    pub vertices: Vec<Vertex>,
    pub model: Mat4,
    pub lamp_positions: Vec<Vec3>,
}

impl Scene {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

pub fn floor(half_extent: f32) -> Quad {
    let h = half_extent;
    quad(
        [
            Vec3::new(-h, 0.0, h),
            Vec3::new(h, 0.0, h),
            Vec3::new(h, 0.0, -h),
            Vec3::new(-h, 0.0, -h),
        ],
        Vec3::Y,
        UV_TOP_DOWN,
    )
}

/// Side walls at x = 0 and x = width, facing each other
pub fn walls(spec: &StairSpec, height: f32) -> [Quad; 2] {
    let near = spec.start_z;
    let far = spec.end_z();
    let side = |x: f32, normal: Vec3| {
        quad(
            [
                Vec3::new(x, 0.0, near),
                Vec3::new(x, 0.0, far),
                Vec3::new(x, height, far),
                Vec3::new(x, height, near),
            ],
            normal,
            UV_WALL,
        )
    };

    [side(0.0, Vec3::X), side(spec.width, Vec3::NEG_X)]
}

/// Risers then treads, interleaved bottom to top
pub fn stairs(spec: &StairSpec) -> Vec<Quad> {
    let mut quads = Vec::with_capacity(spec.riser_count() + spec.tread_count());
    let w = spec.width;

    for i in 0..spec.steps {
        let z = spec.start_z - i as f32 * spec.run;
        let bottom = i as f32 * spec.rise;
        let top = bottom + spec.rise;

        quads.push(quad(
            [
                Vec3::new(0.0, bottom, z),
                Vec3::new(w, bottom, z),
                Vec3::new(w, top, z),
                Vec3::new(0.0, top, z),
            ],
            Vec3::Z,
            UV_BOTTOM_UP,
        ));

        if i + 1 < spec.steps {
            let back = z - spec.run;
            quads.push(quad(
                [
                    Vec3::new(0.0, top, z),
                    Vec3::new(w, top, z),
                    Vec3::new(w, top, back),
                    Vec3::new(0.0, top, back),
                ],
                Vec3::Y,
                UV_TOP_DOWN,
            ));
        }
    }

    quads
}

/// Two columns of lamps hanging over the stairs, descending towards the viewer
pub fn point_light_positions() -> Vec<Vec3> {
    const COLUMNS: [f32; 2] = [-1.9, 5.9];
    const PER_COLUMN: usize = 7;

    COLUMNS
        .iter()
        .flat_map(|&x| {
            (0..PER_COLUMN).map(move |k| {
                let k = k as f32;
                Vec3::new(x, 6.2 - k, -26.25 + 3.75 * k)
            })
        })
        .collect()
}

pub fn create_stairwell_scene() -> Scene {
    let spec = StairSpec::default();

    let mut quads = vec![floor(FLOOR_HALF_EXTENT)];
    quads.extend(walls(&spec, WALL_HEIGHT));
    quads.extend(stairs(&spec));

    let vertices: Vec<Vertex> = quads.iter().flat_map(|q| q.vertices()).collect();

    log::debug!(
        "Stairwell: {} quads, {} vertices, {} steps",
        quads.len(),
        vertices.len(),
        spec.steps
    );

    Scene {
        vertices,
        model: Mat4::from_translation(SCENE_OFFSET),
        lamp_positions: point_light_positions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stair_counts() {
        let spec = StairSpec::default();
        let quads = stairs(&spec);

        assert_eq!(spec.riser_count(), 30);
        assert_eq!(spec.tread_count(), 29);
        assert_eq!(quads.len(), 59);
        assert_eq!(quads.iter().filter(|q| q.normal == Vec3::Z).count(), 30);
        assert_eq!(quads.iter().filter(|q| q.normal == Vec3::Y).count(), 29);
    }

    #[test]
    fn test_top_riser_meets_back_wall() {
        let spec = StairSpec::default();
        let quads = stairs(&spec);
        let last = quads.last().unwrap();

        assert_eq!(last.normal, Vec3::Z);
        assert!((last.corners[2].y - 9.0).abs() < 1e-4);
        assert!((last.corners[2].z - -30.0).abs() < 1e-4);
        assert!((spec.top_height() - 9.0).abs() < 1e-4);
        assert_eq!(spec.end_z(), -30.0);
    }

    #[test]
    fn test_single_step_has_no_tread() {
        let spec = StairSpec {
            steps: 1,
            ..StairSpec::default()
        };
        assert_eq!(stairs(&spec).len(), 1);
        assert_eq!(spec.tread_count(), 0);
    }

    #[test]
    fn test_walls_face_inwards() {
        let [left, right] = walls(&StairSpec::default(), WALL_HEIGHT);

        assert_eq!(left.normal, Vec3::X);
        assert_eq!(right.normal, Vec3::NEG_X);
        assert!(left.corners.iter().all(|c| c.x == 0.0));
        assert!(right.corners.iter().all(|c| c.x == 8.0));
    }

    #[test]
    fn test_point_lights_symmetric() {
        let lights = point_light_positions();
        assert_eq!(lights.len(), 14);

        let (left, right) = lights.split_at(7);
        for (l, r) in left.iter().zip(right) {
            assert_eq!(l.y, r.y);
            assert_eq!(l.z, r.z);
            assert!(((l.x + r.x) * 0.5 - 2.0).abs() < 1e-5);
        }
        assert_eq!(lights[0], Vec3::new(-1.9, 6.2, -26.25));
    }

    #[test]
    fn test_scene_vertex_count() {
        let scene = create_stairwell_scene();
        // floor + 2 walls + 30 risers + 29 treads
        assert_eq!(scene.vertex_count(), (1 + 2 + 59) * 6);
        assert_eq!(scene.model, Mat4::from_translation(SCENE_OFFSET));
    }
}
