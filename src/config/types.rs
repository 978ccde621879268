//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::Deserialize;

/// Drawing surface settings used by hosts that create their own surface.
#[derive(Debug, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: i32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Rendering appearance.
///
/// Controls how stored shapes are turned into pixels. Shape geometry and
/// per-shape colors are never affected.
#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Color the surface is cleared to on every full redraw - either a named
    /// color (red, green, blue, yellow, white, black) or an RGB array
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Pen width for lines and polygon outlines in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Edge length icons are scaled to in pixels (valid range: 8 - 256)
    #[serde(default = "default_icon_size")]
    pub icon_size: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            stroke_width: default_stroke_width(),
            icon_size: default_icon_size(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_icon_size() -> i32 {
    32
}
