use log::{debug, warn};

use super::{SketchError, SketchState};

impl SketchState {
    /// Processes a primary button press over the cell at `(x, y)`.
    ///
    /// Marks the pointer pressed and applies the active tool once. Returns
    /// whether a cell was painted.
    pub fn on_pointer_down(&mut self, x: u32, y: u32) -> Result<bool, SketchError> {
        self.set_pointer_pressed(true);
        self.paint_at(x, y)
    }

    /// Processes the pointer entering the cell at `(x, y)`.
    ///
    /// Paints only while the primary button is held, so dragging draws a
    /// stroke and plain hovering does nothing.
    pub fn on_pointer_enter(&mut self, x: u32, y: u32) -> Result<bool, SketchError> {
        if !self.pointer_pressed() {
            return Ok(false);
        }
        self.paint_at(x, y)
    }

    /// Processes a primary button release.
    pub fn on_pointer_up(&mut self) {
        debug!("Pointer released");
        self.set_pointer_pressed(false);
    }

    fn paint_at(&mut self, x: u32, y: u32) -> Result<bool, SketchError> {
        let size = self.grid().size();
        let (controller, grid) = self.controller_and_grid_mut();
        let Some(cell) = grid.cell_mut(x, y) else {
            warn!("Ignoring paint at ({x}, {y}) outside the {size}x{size} grid");
            return Ok(false);
        };

        controller.apply_tool(cell)?;
        Ok(true)
    }
}
