use crate::input::tool::Tool;
use log::info;

use super::{SketchError, SketchState};

impl SketchState {
    /// Rebuilds the grid at `new_size` cells per side.
    ///
    /// The slider may report any integer; sizes outside the configured bounds
    /// are rejected and the current drawing is kept.
    pub fn on_resize_requested(&mut self, new_size: i64) -> Result<(), SketchError> {
        let (model, grid) = self.model_and_grid_mut();
        model.resize(grid, new_size)?;
        info!("Resized grid to {new_size}x{new_size}");
        Ok(())
    }

    /// Wipes the drawing by rebuilding the grid at its current size.
    pub fn on_clear(&mut self) -> Result<(), SketchError> {
        let size = i64::from(self.grid().size());
        let (model, grid) = self.model_and_grid_mut();
        model.resize(grid, size)?;
        info!("Cleared {size}x{size} grid");
        Ok(())
    }

    /// Selects the tool behind a palette button identifier.
    pub fn on_tool_button_clicked(&mut self, name: &str) -> Result<Tool, SketchError> {
        let tool = self.controller_mut().select_tool_named(name)?;
        Ok(tool)
    }

    /// Selects `tool` directly.
    pub fn select_tool(&mut self, tool: Tool) -> Result<(), SketchError> {
        self.controller_mut().select_tool(tool)?;
        Ok(())
    }
}
