//! Library exports for the sketchgrid drawing core.
//!
//! Exposes the grid model, tool controller and configuration types so that
//! front-ends (the bundled script runner, or any other UI) can drive the same
//! interaction logic.

pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
pub use draw::{Cell, ConfigurationError, Grid, GridModel};
pub use input::{InvalidToolError, SketchError, SketchState, Tool, ToolController};
