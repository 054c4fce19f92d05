//! Configuration enum types.

use crate::draw::Rgb;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, hex notation, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// ink = "black"
///
/// # Hex notation
/// grid_line = "#d4d4d4"
///
/// # Custom RGB color (0-255 per component)
/// background = [255, 250, 240]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, gray, gridline, red, ...) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Parses the specification, returning `None` for unrecognized strings.
    pub fn parse(&self) -> Option<Rgb> {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Rgb::new(*r, *g, *b)),
        }
    }

    /// Converts the specification to an [`Rgb`], using `fallback` for unknown names.
    pub fn to_color_or(&self, fallback: Rgb) -> Rgb {
        self.parse().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using {}", self, fallback);
            fallback
        })
    }
}

impl From<Rgb> for ColorSpec {
    fn from(color: Rgb) -> Self {
        ColorSpec::Name(color.to_string())
    }
}
