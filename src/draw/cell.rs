//! A single addressable square of the drawing grid.

use super::color::Rgb;
use serde::Serialize;

/// One paintable grid square.
///
/// Cells are created by [`GridModel::build`](super::GridModel::build) and are only
/// ever mutated through the tool controller during a paint interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Column, 0-indexed from the left edge
    pub x: u32,
    /// Row, 0-indexed from the top edge
    pub y: u32,
    /// Fill color, `None` while the cell has never been painted
    pub color: Option<Rgb>,
    /// Border color
    pub border_color: Rgb,
    /// Paint opacity; nominally `0.0..=1.0`, but lighten/darken may drift past it
    pub opacity: f64,
}

impl Cell {
    /// Creates an unpainted cell at `(x, y)` with the given border color.
    pub fn unpainted(x: u32, y: u32, border_color: Rgb) -> Self {
        Self {
            x,
            y,
            color: None,
            border_color,
            opacity: 1.0,
        }
    }

    /// Returns true once any tool has assigned a fill color.
    pub fn is_painted(&self) -> bool {
        self.color.is_some()
    }

    /// Color a renderer should show for this cell over `background`.
    pub fn displayed_color(&self, background: Rgb) -> Rgb {
        match self.color {
            Some(color) => color.over(background, self.opacity),
            None => background,
        }
    }
}
