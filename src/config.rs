// config.rs - Application configuration loaded from an optional JSON file
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::camera::{PITCH, SENSITIVITY, SPEED, YAW, ZOOM};

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_DIFFUSE_MAP: &str = "res/images/wall.jpg";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub textures: TextureConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            title: "Stairwell".to_string(),
        }
    }
}

/// Initial camera state and tuning; angles in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub world_up: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: YAW,
            pitch: PITCH,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub diffuse: Option<PathBuf>,
    /// No specular map by default; a flat grey one is generated
    pub specular: Option<PathBuf>,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            diffuse: Some(PathBuf::from(DEFAULT_DIFFUSE_MAP)),
            specular: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub show_ui: bool,
    pub vsync: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_ui: true,
            vsync: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_json(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_camera_section() {
        let config = AppConfig::from_json(
            r#"{ "camera": { "movement_speed": 5.0, "position": [1.0, 2.0, 3.0] } }"#,
        )
        .unwrap();

        assert_eq!(config.camera.movement_speed, 5.0);
        assert_eq!(config.camera.position, [1.0, 2.0, 3.0]);
        assert_eq!(config.camera.yaw, YAW);
        assert_eq!(config.camera.zoom, ZOOM);
        assert_eq!(config.window.width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn test_null_texture_disables_file() {
        let config = AppConfig::from_json(r#"{ "textures": { "diffuse": null } }"#).unwrap();
        assert_eq!(config.textures.diffuse, None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ camera: ").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::load("definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("definitely/not/here.json"));
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut config = AppConfig::default();
        config.render.vsync = false;
        config.camera.pitch = -10.0;

        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_json(&text).unwrap(), config);
    }
}
