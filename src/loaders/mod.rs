pub mod texture;

pub use texture::{load_texture, load_texture_or_fallback, TextureData};
