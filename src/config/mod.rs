//! Configuration file support for screenwriter.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/screenwriter/config.toml`. Settings cover the default surface
//! size and the rendering style (background, pen width, icon size).
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{RenderConfig, SurfaceConfig};

use crate::draw::RenderStyle;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const MAX_SURFACE_EDGE: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 1024
/// height = 768
///
/// [render]
/// background = "white"
/// stroke_width = 2.0
/// icon_size = 32
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Default surface dimensions
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Rendering appearance
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `surface.width`, `surface.height`: 1 - 16384
    /// - `render.stroke_width`: 0.5 - 20.0
    /// - `render.icon_size`: 8 - 256
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_SURFACE_EDGE).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 1-{} range",
                self.surface.width,
                MAX_SURFACE_EDGE
            );
            self.surface.width = self.surface.width.clamp(1, MAX_SURFACE_EDGE);
        }

        if !(1..=MAX_SURFACE_EDGE).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 1-{} range",
                self.surface.height,
                MAX_SURFACE_EDGE
            );
            self.surface.height = self.surface.height.clamp(1, MAX_SURFACE_EDGE);
        }

        if !(0.5..=20.0).contains(&self.render.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 0.5-20.0 range",
                self.render.stroke_width
            );
            // NaN survives clamp(), fall back to the default instead
            self.render.stroke_width = if self.render.stroke_width.is_nan() {
                RenderConfig::default().stroke_width
            } else {
                self.render.stroke_width.clamp(0.5, 20.0)
            };
        }

        if !(8..=256).contains(&self.render.icon_size) {
            log::warn!(
                "Invalid icon_size {}, clamping to 8-256 range",
                self.render.icon_size
            );
            self.render.icon_size = self.render.icon_size.clamp(8, 256);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/screenwriter/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("screenwriter");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file. All loaded values are validated
    /// and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Builds the renderer style described by the `[render]` table.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            background: self.render.background.to_color(),
            stroke_width: self.render.stroke_width,
            icon_size: self.render.icon_size,
        }
    }
}
