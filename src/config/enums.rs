//! Configuration enum types.

use crate::draw::{Color, color::WHITE};
use log::warn;
use serde::Deserialize;

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// background = "white"
///
/// # Custom RGB color (0-255 per component)
/// background = [250, 250, 240]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped using `util::name_to_color()`. Unknown color names
    /// fall back to white with a warning. RGB arrays become opaque colors.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using white", name);
                WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => Color::rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLUE;

    #[test]
    fn named_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("Blue".to_string()).to_color(), BLUE);
        assert_eq!(ColorSpec::Rgb([255, 255, 255]).to_color(), WHITE);
        assert_eq!(ColorSpec::Name("mauve".to_string()).to_color(), WHITE);
    }
}
