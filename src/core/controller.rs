/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    MouseLeft,
    MouseRight,
}

impl Button {
    pub const ALL: [Button; 11] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::ArrowUp,
        Button::ArrowDown,
        Button::ArrowLeft,
        Button::ArrowRight,
        Button::Escape,
        Button::MouseLeft,
        Button::MouseRight,
    ];
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    fn any_down(&self, buttons: &[Button]) -> bool {
        buttons.iter().any(|&b| self.is_down(b))
    }
}
