//! Input handling and tool state machine.
//!
//! This module translates UI events (pointer, size slider, buttons) into grid
//! mutations. It holds the active tool, dispatches paint operations to cells,
//! and owns the grid lifecycle across resizes.

pub mod controller;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use controller::{OPACITY_STEP, OpacityMode, ToolController, ToolPaints};
pub use events::UiEvent;
pub use state::{SketchError, SketchState};
pub use tool::{InvalidToolError, Tool, ToolSet};
