//! Grid data model and renderings.
//!
//! This module defines the core drawing types:
//! - [`Rgb`]: cell color representation with predefined color constants
//! - [`Cell`]: one paintable square
//! - [`Grid`]: the square collection of cells for one size
//! - [`GridModel`]: builds, tears down and resizes grids

pub mod cell;
pub mod color;
pub mod grid;
pub mod render;

// Re-export commonly used types at module level
pub use cell::Cell;
pub use color::Rgb;
pub use grid::{ConfigurationError, Grid, GridLayout, GridModel};
pub use render::{render_json, render_text};

pub use color::{BLACK, GRID_LINE, WHITE};
