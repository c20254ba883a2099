use crate::camera::{Camera, CameraMovement};
use crate::core::{Button, Controller, WinitController};

pub const FORWARD_KEYS: [Button; 2] = [Button::KeyW, Button::ArrowUp];
pub const BACKWARD_KEYS: [Button; 2] = [Button::KeyS, Button::ArrowDown];
pub const LEFT_KEYS: [Button; 2] = [Button::KeyA, Button::ArrowLeft];
pub const RIGHT_KEYS: [Button; 2] = [Button::KeyD, Button::ArrowRight];

/// Everything one frame of input asks of the camera
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Look offset in pixels, y already reversed (positive looks up)
    pub look: (f32, f32),
    /// Wheel lines, positive scrolls up
    pub scroll: f32,
}

impl InputSnapshot {
    pub fn capture(controller: &dyn Controller, look: (f32, f32), scroll: f32) -> Self {
        Self {
            forward: controller.any_down(&FORWARD_KEYS),
            backward: controller.any_down(&BACKWARD_KEYS),
            left: controller.any_down(&LEFT_KEYS),
            right: controller.any_down(&RIGHT_KEYS),
            look,
            scroll,
        }
    }

    pub fn from_controller(controller: &WinitController) -> Self {
        Self::capture(controller, controller.look_delta(), controller.scroll_delta())
    }

    pub fn movements(&self) -> impl Iterator<Item = CameraMovement> {
        [
            (self.forward, CameraMovement::Forward),
            (self.backward, CameraMovement::Backward),
            (self.left, CameraMovement::Left),
            (self.right, CameraMovement::Right),
        ]
        .into_iter()
        .filter_map(|(held, movement)| held.then_some(movement))
    }
}

/// Per-frame camera update: movement, then look, then zoom
pub fn apply(camera: &mut Camera, snapshot: &InputSnapshot, delta_time: f32) {
    for movement in snapshot.movements() {
        camera.process_keyboard(movement, delta_time);
    }

    let (dx, dy) = snapshot.look;
    if dx != 0.0 || dy != 0.0 {
        camera.process_mouse_movement(dx, dy, true);
    }

    if snapshot.scroll != 0.0 {
        camera.process_mouse_scroll(snapshot.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_arrow_keys_alias_wasd() {
        let mut controller = WinitController::new();
        controller.press(Button::ArrowUp);
        controller.press(Button::KeyD);

        let snapshot = InputSnapshot::from_controller(&controller);
        assert!(snapshot.forward);
        assert!(snapshot.right);
        assert!(!snapshot.backward);
        assert!(!snapshot.left);
    }

    #[test]
    fn test_snapshot_carries_reversed_look() {
        let mut controller = WinitController::new();
        controller.cursor_moved(0.0, 0.0);
        controller.cursor_moved(4.0, 2.0);
        controller.scrolled(1.5);

        let snapshot = InputSnapshot::from_controller(&controller);
        assert_eq!(snapshot.look, (4.0, -2.0));
        assert_eq!(snapshot.scroll, 1.5);
    }

    #[test]
    fn test_empty_snapshot_leaves_camera_alone() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let before = camera.clone();

        apply(&mut camera, &InputSnapshot::default(), 0.016);
        assert_eq!(camera, before);
    }

    #[test]
    fn test_apply_order_moves_before_turning() {
        let mut camera = Camera::new(Vec3::ZERO);
        let snapshot = InputSnapshot {
            forward: true,
            look: (900.0, 0.0),
            ..InputSnapshot::default()
        };

        apply(&mut camera, &snapshot, 1.0);

        // Moved along the old front (-Z), then turned to face +X
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), 1e-4));
        assert!(camera.front().abs_diff_eq(Vec3::X, 1e-4));
    }
}
