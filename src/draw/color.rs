//! RGB color type and predefined color constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents an opaque RGB color with 8-bit components.
///
/// Transparency is not part of the color: cells carry a separate opacity
/// value that tools adjust independently.
///
/// # Examples
///
/// ```
/// use sketchgrid::draw::Rgb;
/// let orange = Rgb::new(255, 128, 0);
/// assert_eq!(orange.to_string(), "#ff8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component (0 = no red, 255 = full red)
    pub r: u8,
    /// Green component (0 = no green, 255 = full green)
    pub g: u8,
    /// Blue component (0 = no blue, 255 = full blue)
    pub b: u8,
}

impl Rgb {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance in `0.0..=1.0` (Rec. 709 weights, no gamma).
    pub fn luminance(&self) -> f64 {
        (0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64) / 255.0
    }

    /// Composites `self` at `opacity` over `background`.
    ///
    /// Opacity outside `0.0..=1.0` is clamped for display purposes only; the
    /// stored cell value is never touched.
    pub fn over(&self, background: Rgb, opacity: f64) -> Rgb {
        let alpha = opacity.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (fg as f64 * alpha + bg as f64 * (1.0 - alpha)).round() as u8
        };
        Rgb {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Ink used by the draw tool
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Canvas background restored by the eraser
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Light gray border of unpainted cells (`#d4d4d4`)
pub const GRID_LINE: Rgb = Rgb::new(0xd4, 0xd4, 0xd4);

pub const RED: Rgb = Rgb::new(255, 0, 0);

pub const GREEN: Rgb = Rgb::new(0, 255, 0);

pub const BLUE: Rgb = Rgb::new(0, 0, 255);

pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

pub const ORANGE: Rgb = Rgb::new(255, 128, 0);

pub const PINK: Rgb = Rgb::new(255, 0, 255);

pub const GRAY: Rgb = Rgb::new(128, 128, 128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_lowercase_hex() {
        assert_eq!(GRID_LINE.to_string(), "#d4d4d4");
        assert_eq!(BLACK.to_string(), "#000000");
    }

    #[test]
    fn over_with_full_opacity_keeps_foreground() {
        assert_eq!(BLACK.over(WHITE, 1.0), BLACK);
        assert_eq!(BLACK.over(WHITE, 0.0), WHITE);
    }

    #[test]
    fn over_clamps_drifted_opacity() {
        assert_eq!(BLACK.over(WHITE, 1.3), BLACK);
        assert_eq!(BLACK.over(WHITE, -0.1), WHITE);
    }

    #[test]
    fn luminance_spans_unit_range() {
        assert_eq!(BLACK.luminance(), 0.0);
        assert!((WHITE.luminance() - 1.0).abs() < 1e-9);
    }
}
