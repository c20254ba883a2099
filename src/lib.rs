pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod core;
pub mod lighting;
pub mod loaders;
pub mod renderer;
pub mod scenes;
pub mod types;

pub use camera::{Camera, CameraMovement};
pub use controls::InputSnapshot;
pub use scenes::create_stairwell_scene;
