//! Sketch session state: the single owner of the grid and tool selection.

use crate::config::Config;
use crate::draw::{ConfigurationError, Grid, GridModel};
use crate::input::controller::ToolController;
use crate::input::events::UiEvent;
use crate::input::tool::{InvalidToolError, Tool};
use log::{debug, info};
use thiserror::Error;

/// Errors reported back to the UI layer.
///
/// Every failing operation leaves the grid and the tool selection exactly as
/// they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    InvalidTool(#[from] InvalidToolError),
}

/// Main sketch state containing the active grid and tool controller.
///
/// Processes UI events (pointer, resize, clear, tool buttons) and routes them
/// to the grid model or the tool controller. Events are handled synchronously
/// in arrival order.
pub struct SketchState {
    /// Builds and replaces grids
    model: GridModel,
    /// Currently displayed grid
    grid: Grid,
    /// Active tool and paint dispatch
    controller: ToolController,
    /// Primary button held since the last pointer-down
    pointer_pressed: bool,
}

impl SketchState {
    /// Creates a session with a grid at the model's default size.
    pub fn new(mut model: GridModel, controller: ToolController) -> Result<Self, ConfigurationError> {
        let grid = model.build_default()?;
        Ok(Self {
            model,
            grid,
            controller,
            pointer_pressed: false,
        })
    }

    /// Creates a session from loaded configuration.
    ///
    /// `seed` makes the rainbow tool reproducible; it overrides any seed in the
    /// configuration.
    pub fn from_config(config: &Config, seed: Option<u64>) -> Result<Self, SketchError> {
        let mut controller = ToolController::new(
            config.tools.tool_set,
            config.tools.opacity_mode,
            config.tool_paints(),
        );
        if let Some(seed) = seed.or(config.tools.rainbow_seed) {
            debug!("Seeding rainbow tool with {seed}");
            controller = controller.with_seed(seed);
        }
        controller.select_tool(config.tools.default_tool)?;

        let state = Self::new(GridModel::new(config.grid_layout()), controller)?;
        info!(
            "Started {}x{} sketch with tool '{}'",
            state.grid.size(),
            state.grid.size(),
            state.current_highlight()
        );
        Ok(state)
    }

    /// The grid currently on display.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn controller(&self) -> &ToolController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ToolController {
        &mut self.controller
    }

    /// Whether the primary button is currently held.
    pub fn pointer_pressed(&self) -> bool {
        self.pointer_pressed
    }

    pub(super) fn set_pointer_pressed(&mut self, pressed: bool) {
        self.pointer_pressed = pressed;
    }

    /// Active tool, for highlighting the matching palette button.
    pub fn current_highlight(&self) -> Tool {
        self.controller.current_highlight()
    }

    /// Routes one UI event.
    ///
    /// Returns `true` when the event changed the grid or the selection.
    /// [`UiEvent::Print`] is a front-end concern and changes nothing here.
    pub fn handle_event(&mut self, event: &UiEvent) -> Result<bool, SketchError> {
        match event {
            UiEvent::PointerDown { x, y } => self.on_pointer_down(*x, *y),
            UiEvent::PointerEnter { x, y } => self.on_pointer_enter(*x, *y),
            UiEvent::PointerUp => {
                self.on_pointer_up();
                Ok(false)
            }
            UiEvent::ResizeRequested(size) => self.on_resize_requested(*size).map(|_| true),
            UiEvent::ClearRequested => self.on_clear().map(|_| true),
            UiEvent::ToolButtonClicked(name) => self.on_tool_button_clicked(name).map(|_| true),
            UiEvent::Print => Ok(false),
        }
    }

    pub(super) fn model_and_grid_mut(&mut self) -> (&mut GridModel, &mut Grid) {
        (&mut self.model, &mut self.grid)
    }

    pub(super) fn controller_and_grid_mut(&mut self) -> (&mut ToolController, &mut Grid) {
        (&mut self.controller, &mut self.grid)
    }
}
