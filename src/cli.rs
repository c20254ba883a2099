// cli.rs - Command-line interface configuration
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "stairwell")]
#[command(about = "Free-fly camera through a Phong-lit stairwell", long_about = None)]
pub struct Cli {
    /// Disable the FPS overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Present without waiting for vertical sync
    #[arg(long = "no-vsync", default_value = "false")]
    pub no_vsync: bool,

    /// JSON config file; command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Diffuse map image
    #[arg(long)]
    pub diffuse: Option<PathBuf>,

    /// Specular map image
    #[arg(long)]
    pub specular: Option<PathBuf>,

    /// Camera movement speed in world units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Mouse look sensitivity in degrees per pixel
    #[arg(long)]
    pub sensitivity: Option<f32>,
}

impl Cli {
    /// Load the config file (or defaults) and apply flag overrides
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if self.no_ui {
            config.render.show_ui = false;
        }
        if self.no_vsync {
            config.render.vsync = false;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(path) = &self.diffuse {
            config.textures.diffuse = Some(path.clone());
        }
        if let Some(path) = &self.specular {
            config.textures.specular = Some(path.clone());
        }
        if let Some(speed) = self.speed {
            config.camera.movement_speed = speed;
        }
        if let Some(sensitivity) = self.sensitivity {
            config.camera.mouse_sensitivity = sensitivity;
        }
    }
}
