//! Text and JSON renderings of a grid.

use super::Grid;
use super::color::Rgb;

/// Darkness ramp from background to full ink.
const SHADE_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Glyph for a displayed color: lighter colors map to sparser characters.
pub fn shade_glyph(color: Rgb) -> char {
    let darkness = 1.0 - color.luminance();
    let steps = (SHADE_RAMP.len() - 1) as f64;
    let index = (darkness * steps).round().clamp(0.0, steps) as usize;
    SHADE_RAMP[index]
}

/// Renders the grid as one line of glyphs per row.
///
/// Unpainted cells show as `·` so the grid bounds stay visible.
pub fn render_text(grid: &Grid, background: Rgb) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for row in grid.rows() {
        for cell in row {
            if cell.is_painted() {
                out.push(shade_glyph(cell.displayed_color(background)));
            } else {
                out.push('·');
            }
        }
        out.push('\n');
    }
    out
}

/// Serializes the grid, including per-cell visual state, as pretty JSON.
pub fn render_json(grid: &Grid) -> serde_json::Result<String> {
    serde_json::to_string_pretty(grid)
}
