mod common;
mod lamp;
mod stairwell;

pub use common::{quad, Quad};
pub use lamp::{lamp_cube, lamp_instances, LAMP_SCALE};
pub use stairwell::{
    create_stairwell_scene, floor, point_light_positions, stairs, walls, Scene, StairSpec,
    CLEAR_COLOR, SCENE_OFFSET,
};
