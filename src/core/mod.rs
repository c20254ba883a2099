pub mod clock;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod timer;
pub mod window;

pub use clock::Clock;
pub use controller::{Button, Controller};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use timer::{FixedHz, FpsCounter};
pub use window::WindowDimensions;
