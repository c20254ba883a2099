use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::types::FrameUniforms;

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

/// Largest pitch magnitude in degrees. Sits just inside 89° so `front` never
/// lines up with `world_up`.
pub const PITCH_LIMIT: f32 = 89.0 - 1.0e-3;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Squared cross length below which `front` counts as parallel to `world_up`
const PARALLEL_EPSILON: f32 = 1.0e-10;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Movement requests, one per held key per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Free-fly camera driven by yaw/pitch Euler angles (degrees).
///
/// `front`, `right` and `up` are always re-derived from the angles and
/// `world_up`; nothing writes them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    /// Camera at `position` looking down -Z with default tuning
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, YAW, PITCH)
    }

    /// A zero or non-finite `world_up` falls back to +Y
    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let world_up = world_up.try_normalize().unwrap_or_else(|| {
            log::warn!("Invalid world up {:?}, using +Y", world_up);
            Vec3::Y
        });

        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_camera_vectors();

        if camera.front.cross(camera.world_up).length_squared() < PARALLEL_EPSILON {
            log::warn!(
                "Initial view direction {:?} is parallel to world up {:?}",
                camera.front,
                camera.world_up
            );
        }
        camera
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::with_orientation(
            Vec3::from_array(config.position),
            Vec3::from_array(config.world_up),
            config.yaw,
            config.pitch,
        );
        camera.movement_speed = config.movement_speed;
        camera.mouse_sensitivity = config.mouse_sensitivity;
        camera.zoom = config.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        camera
    }

    /// Move along `front` or `right` by `movement_speed * delta_time`.
    /// Calls within a frame add up, so diagonals are not normalized.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;

        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a raw look delta in pixels. Positive `y_offset` looks up, so the
    /// host passes `last_y - current_y`.
    ///
    /// With `constrain_pitch == false` the caller owns keeping pitch away from
    /// ±90°; at exactly ±90° the basis degenerates.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    pub fn process_mouse_movement_constrained(&mut self, x_offset: f32, y_offset: f32) {
        self.process_mouse_movement(x_offset, y_offset, true);
    }

    /// Scrolling up (positive) narrows the field of view
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Right-handed look-at from the eye towards `position + front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Right-handed perspective using `zoom` as the vertical field of view.
    /// Depth maps to [0, 1] as wgpu expects.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, near, far)
    }

    pub fn to_uniform(&self, aspect: f32, model: Mat4) -> FrameUniforms {
        FrameUniforms {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self
                .projection_matrix(aspect, NEAR_PLANE, FAR_PLANE)
                .to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            view_position: self.position.to_array(),
            _pad: 0.0,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update_camera_vectors();
    }

    /// Direct pitch writes are clamped like constrained mouse input
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_camera_vectors();
    }

    fn update_camera_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        // Looking along world_up leaves the cross product undefined; keep the
        // previous right vector, made perpendicular to the new front
        let cross = self.front.cross(self.world_up);
        self.right = if cross.length_squared() < PARALLEL_EPSILON {
            self.right
                .reject_from_normalized(self.front)
                .try_normalize()
                .unwrap_or_else(|| self.front.any_orthonormal_vector())
        } else {
            cross.normalize()
        };
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_default_orientation_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));

        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPSILON));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPSILON));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPSILON));
        assert_eq!(camera.zoom(), ZOOM);
    }

    #[test]
    fn test_strafe_moves_along_right() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(CameraMovement::Right, 2.0);

        assert!(camera.position().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));

        camera.process_keyboard(CameraMovement::Left, 2.0);
        assert!(camera.position().abs_diff_eq(Vec3::ZERO, 1e-4));
    }

    #[test]
    fn test_yaw_turns_towards_positive_x() {
        let mut camera = Camera::new(Vec3::ZERO);
        // 900 px * 0.1 deg/px = 90 deg of yaw
        camera.process_mouse_movement(900.0, 0.0, true);

        assert!((camera.yaw() - 0.0).abs() < 1e-3);
        assert!(camera.front().abs_diff_eq(Vec3::X, 1e-4));
    }

    #[test]
    fn test_unconstrained_pitch_is_not_clamped() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_movement(0.0, 1000.0, false);

        assert!(camera.pitch() > 89.0);
    }

    #[test]
    fn test_set_pitch_clamps_and_rebuilds_basis() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.set_pitch(120.0);

        assert!(camera.pitch() < 89.0);
        assert!(camera.front().y > 0.99);
        assert!(camera.front().dot(camera.up()).abs() < EPSILON);
    }

    #[test]
    fn test_from_config_clamps_zoom() {
        let config = CameraConfig {
            zoom: 90.0,
            ..CameraConfig::default()
        };
        let camera = Camera::from_config(&config);

        assert_eq!(camera.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_construction_clamps_pitch() {
        for pitch in [120.0, -120.0] {
            let camera = Camera::with_orientation(Vec3::ZERO, Vec3::Y, YAW, pitch);
            assert!(camera.pitch().abs() < 89.0, "pitch {}", camera.pitch());

            let config = CameraConfig {
                pitch,
                ..CameraConfig::default()
            };
            let camera = Camera::from_config(&config);
            assert!(camera.pitch().abs() < 89.0, "pitch {}", camera.pitch());
        }
    }

    #[test]
    fn test_from_config_carries_tuning() {
        let config = CameraConfig {
            world_up: [0.0, 2.0, 0.0],
            movement_speed: 7.5,
            mouse_sensitivity: 0.25,
            ..CameraConfig::default()
        };
        let camera = Camera::from_config(&config);

        assert_eq!(camera.world_up(), Vec3::Y);
        assert_eq!(camera.movement_speed(), 7.5);
        assert_eq!(camera.mouse_sensitivity(), 0.25);
    }

    #[test]
    fn test_constrained_shorthand_matches_flagged_call() {
        let mut shorthand = Camera::new(Vec3::ZERO);
        let mut flagged = Camera::new(Vec3::ZERO);

        for (x, y) in [(3.0, 5_000.0), (-700.0, -9_000.0), (12.5, 0.5)] {
            shorthand.process_mouse_movement_constrained(x, y);
            flagged.process_mouse_movement(x, y, true);
            assert_eq!(shorthand, flagged);
            assert!(shorthand.pitch().abs() < 89.0);
        }
    }

    fn assert_finite_orthonormal(camera: &Camera) {
        for v in [camera.front(), camera.right(), camera.up()] {
            assert!(v.is_finite(), "non-finite basis vector {:?}", v);
            assert!((v.length() - 1.0).abs() < EPSILON);
        }
        assert!(camera.front().dot(camera.right()).abs() < EPSILON);
        assert!(camera.front().dot(camera.up()).abs() < EPSILON);
        assert!(camera.right().dot(camera.up()).abs() < EPSILON);
    }

    #[test]
    fn test_zero_world_up_falls_back_to_y() {
        let config = CameraConfig {
            world_up: [0.0, 0.0, 0.0],
            ..CameraConfig::default()
        };
        let camera = Camera::from_config(&config);

        assert_eq!(camera.world_up(), Vec3::Y);
        assert_finite_orthonormal(&camera);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn test_world_up_parallel_to_front_keeps_basis() {
        let config = CameraConfig {
            world_up: [1.0, 0.0, 0.0],
            yaw: 0.0,
            ..CameraConfig::default()
        };
        let mut camera = Camera::from_config(&config);

        assert!(camera.front().abs_diff_eq(Vec3::X, EPSILON));
        assert_finite_orthonormal(&camera);
        assert!(camera.view_matrix().is_finite());

        // Turn away and back through the degenerate direction
        camera.process_mouse_movement(300.0, 0.0, true);
        assert_finite_orthonormal(&camera);
        camera.process_mouse_movement(-300.0, 0.0, true);
        assert_finite_orthonormal(&camera);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn test_projection_uses_zoom_as_fov() {
        let mut camera = Camera::new(Vec3::ZERO);
        let wide = camera.projection_matrix(1.0, NEAR_PLANE, FAR_PLANE);
        camera.process_mouse_scroll(20.0);
        let narrow = camera.projection_matrix(1.0, NEAR_PLANE, FAR_PLANE);

        // Narrower FOV scales x/y up
        assert!(narrow.x_axis.x > wide.x_axis.x);
        let expected = 1.0 / (ZOOM.to_radians() * 0.5).tan();
        assert!((wide.y_axis.y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_to_uniform_carries_eye_position() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        let uniform = camera.to_uniform(4.0 / 3.0, Mat4::IDENTITY);

        assert_eq!(uniform.view_position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.model, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
    }
}
