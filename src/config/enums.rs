//! Configuration enum types.

use crate::draw::{Color, color::name_to_color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// foreground = "white"
///
/// # Hex string
/// background = "#202020"
///
/// # Custom RGB color (0-255 per component)
/// foreground = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, white, black, board) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings starting with `#` are parsed as hex, anything else is looked up
    /// by name. Unrecognized strings resolve to `fallback` with a warning.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => {
                let parsed = if name.starts_with('#') {
                    Color::from_hex(name)
                } else {
                    name_to_color(name)
                };
                parsed.unwrap_or_else(|| {
                    warn!("Unknown color '{}', using fallback", name);
                    fallback
                })
            }
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Whether the spec resolves to a color without falling back.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) if name.starts_with('#') => Color::from_hex(name).is_some(),
            ColorSpec::Name(name) => name_to_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BOARD, RED, WHITE};

    #[test]
    fn named_hex_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("white".into()).to_color(RED), WHITE);
        assert_eq!(ColorSpec::Name("#202020".into()).to_color(RED), BOARD);
        assert_eq!(
            ColorSpec::Rgb([255, 0, 0]).to_color(WHITE),
            Color::from_rgb8(255, 0, 0)
        );
    }

    #[test]
    fn unknown_spec_uses_fallback() {
        let spec = ColorSpec::Name("chartreuse-ish".into());
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color(BOARD), BOARD);
        assert!(!ColorSpec::Name("#12345".into()).is_valid());
    }
}
