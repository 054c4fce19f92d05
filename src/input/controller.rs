//! Tool selection and per-cell paint dispatch.

use super::tool::{InvalidToolError, Tool, ToolSet};
use crate::draw::Cell;
use crate::draw::color::{BLACK, GRID_LINE, Rgb, WHITE};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opacity change applied by one lighten/darken stroke.
pub const OPACITY_STEP: f64 = 0.1;

/// How lighten/darken treat the opacity range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OpacityMode {
    /// Clamp the current value, then step; the written value may leave `0.0..=1.0`
    #[default]
    Drift,
    /// Also clamp the written value to `0.0..=1.0`
    Strict,
}

/// Colors the draw and erase tools write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPaints {
    /// Draw tool fill and border
    pub ink: Rgb,
    /// Eraser fill
    pub background: Rgb,
    /// Eraser border
    pub grid_line: Rgb,
}

impl Default for ToolPaints {
    fn default() -> Self {
        Self {
            ink: BLACK,
            background: WHITE,
            grid_line: GRID_LINE,
        }
    }
}

/// Holds the active tool and applies it to cells.
///
/// Owns the random source used by the rainbow tool so tests can inject a
/// deterministic one via [`ToolController::with_rng`].
pub struct ToolController {
    selection: Tool,
    tool_set: ToolSet,
    opacity_mode: OpacityMode,
    paints: ToolPaints,
    rng: Box<dyn RngCore>,
}

impl ToolController {
    /// Creates a controller with `Draw` selected and an entropy-seeded RNG.
    pub fn new(tool_set: ToolSet, opacity_mode: OpacityMode, paints: ToolPaints) -> Self {
        Self {
            selection: Tool::Draw,
            tool_set,
            opacity_mode,
            paints,
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    /// Replaces the random source used by the rainbow tool.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Seeds the rainbow tool for reproducible output.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn tool_set(&self) -> ToolSet {
        self.tool_set
    }

    pub fn opacity_mode(&self) -> OpacityMode {
        self.opacity_mode
    }

    pub fn paints(&self) -> &ToolPaints {
        &self.paints
    }

    /// Changes which tools the palette offers.
    ///
    /// The current selection is kept even if the new set excludes it; applying
    /// it then reports [`InvalidToolError`] until another tool is selected.
    pub fn set_tool_set(&mut self, tool_set: ToolSet) {
        if !tool_set.contains(self.selection) {
            warn!(
                "Active tool '{}' is not part of the {:?} tool set",
                self.selection, tool_set
            );
        }
        self.tool_set = tool_set;
    }

    /// Makes `tool` the active tool.
    pub fn select_tool(&mut self, tool: Tool) -> Result<(), InvalidToolError> {
        if !self.tool_set.contains(tool) {
            return Err(InvalidToolError::NotEnabled {
                tool,
                set: self.tool_set,
            });
        }
        debug!("Selected tool: {tool}");
        self.selection = tool;
        Ok(())
    }

    /// Selects a tool by its button identifier (e.g. `"eraser"`).
    pub fn select_tool_named(&mut self, name: &str) -> Result<Tool, InvalidToolError> {
        let tool = name.parse::<Tool>()?;
        self.select_tool(tool)?;
        Ok(tool)
    }

    /// The active tool, for styling the palette.
    pub fn current_highlight(&self) -> Tool {
        self.selection
    }

    /// Enabled tools in palette order, flagged when highlighted.
    pub fn palette(&self) -> Vec<(Tool, bool)> {
        self.tool_set
            .tools()
            .iter()
            .map(|&tool| (tool, tool == self.selection))
            .collect()
    }

    /// Applies the active tool to one cell.
    ///
    /// The cell is left untouched when the active tool is not enabled.
    pub fn apply_tool(&mut self, cell: &mut Cell) -> Result<(), InvalidToolError> {
        let tool = self.selection;
        if !self.tool_set.contains(tool) {
            return Err(InvalidToolError::NotEnabled {
                tool,
                set: self.tool_set,
            });
        }

        match tool {
            Tool::Draw => {
                cell.color = Some(self.paints.ink);
                cell.border_color = self.paints.ink;
                cell.opacity = 1.0;
            }
            Tool::Erase => {
                cell.color = Some(self.paints.background);
                cell.border_color = self.paints.grid_line;
                cell.opacity = 1.0;
            }
            Tool::Rainbow => {
                let color = Rgb::new(
                    self.rng.gen_range(0..=255),
                    self.rng.gen_range(0..=255),
                    self.rng.gen_range(0..=255),
                );
                cell.color = Some(color);
                cell.border_color = color;
                cell.opacity = 1.0;
            }
            Tool::Lighten => cell.opacity = self.step_opacity(cell.opacity, -OPACITY_STEP),
            Tool::Darken => cell.opacity = self.step_opacity(cell.opacity, OPACITY_STEP),
        }

        debug!(
            "Applied {tool} to cell ({}, {}) -> color {:?}, opacity {:.2}",
            cell.x, cell.y, cell.color, cell.opacity
        );
        Ok(())
    }

    fn step_opacity(&self, current: f64, delta: f64) -> f64 {
        let stepped = current.clamp(0.0, 1.0) + delta;
        match self.opacity_mode {
            OpacityMode::Drift => stepped,
            OpacityMode::Strict => stepped.clamp(0.0, 1.0),
        }
    }
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new(
            ToolSet::default(),
            OpacityMode::default(),
            ToolPaints::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;
    use rand::rngs::mock::StepRng;

    const EPSILON: f64 = 1e-9;

    fn cell() -> Cell {
        Cell::unpainted(0, 0, GRID_LINE)
    }

    fn controller_with(tool: Tool) -> ToolController {
        let mut controller = ToolController::default().with_seed(7);
        controller.select_tool(tool).unwrap();
        controller
    }

    #[test]
    fn starts_with_draw_selected() {
        let controller = ToolController::default();
        assert_eq!(controller.current_highlight(), Tool::Draw);
    }

    #[test]
    fn draw_paints_opaque_black() {
        let mut controller = controller_with(Tool::Draw);
        let mut target = cell();
        target.opacity = 0.3;
        controller.apply_tool(&mut target).unwrap();
        assert_eq!(target.color, Some(BLACK));
        assert_eq!(target.border_color, BLACK);
        assert_eq!(target.opacity, 1.0);
    }

    #[test]
    fn erase_restores_background_regardless_of_prior_state() {
        let mut controller = controller_with(Tool::Erase);
        let mut target = cell();
        target.color = Some(RED);
        target.border_color = RED;
        target.opacity = -0.1;
        controller.apply_tool(&mut target).unwrap();
        assert_eq!(target.color, Some(WHITE));
        assert_eq!(target.border_color, GRID_LINE);
        assert_eq!(target.opacity, 1.0);
    }

    #[test]
    fn rainbow_uses_injected_random_source() {
        let mut controller = ToolController::default().with_rng(StepRng::new(10, 1));
        controller.select_tool(Tool::Rainbow).unwrap();
        let mut target = cell();
        controller.apply_tool(&mut target).unwrap();
        assert_eq!(target.color, Some(Rgb::new(10, 11, 12)));
        assert_eq!(target.border_color, Rgb::new(10, 11, 12));
        assert_eq!(target.opacity, 1.0);
    }

    #[test]
    fn rainbow_is_reproducible_per_seed() {
        let mut first = controller_with(Tool::Rainbow);
        let mut second = controller_with(Tool::Rainbow);
        let (mut a, mut b) = (cell(), cell());
        first.apply_tool(&mut a).unwrap();
        second.apply_tool(&mut b).unwrap();
        assert_eq!(a.color, b.color);
    }

    #[test]
    fn rainbow_twice_gives_different_colors() {
        let mut controller = controller_with(Tool::Rainbow);
        let mut target = cell();
        controller.apply_tool(&mut target).unwrap();
        let first = target.color;
        controller.apply_tool(&mut target).unwrap();
        assert!(target.color.is_some());
        assert_ne!(first, target.color);
    }

    #[test]
    fn lighten_twice_from_opaque() {
        let mut controller = controller_with(Tool::Lighten);
        let mut target = cell();
        controller.apply_tool(&mut target).unwrap();
        controller.apply_tool(&mut target).unwrap();
        assert!((target.opacity - 0.8).abs() < EPSILON);
    }

    #[test]
    fn lighten_drifts_below_zero() {
        let mut controller = controller_with(Tool::Lighten);
        let mut target = cell();
        for _ in 0..10 {
            controller.apply_tool(&mut target).unwrap();
        }
        // ten steps from 1.0 leave only floating-point residue around zero
        assert!(target.opacity.abs() < EPSILON);

        controller.apply_tool(&mut target).unwrap();
        assert!((target.opacity + 0.1).abs() < EPSILON);

        controller.apply_tool(&mut target).unwrap();
        assert!(target.opacity < 0.0);
        assert!((target.opacity + 0.1).abs() < EPSILON);
    }

    #[test]
    fn darken_drifts_above_one() {
        let mut controller = controller_with(Tool::Darken);
        let mut target = cell();
        controller.apply_tool(&mut target).unwrap();
        assert!((target.opacity - 1.1).abs() < EPSILON);
        controller.apply_tool(&mut target).unwrap();
        assert!((target.opacity - 1.1).abs() < EPSILON);
    }

    #[test]
    fn darken_clamps_drifted_value_before_stepping() {
        let mut controller = controller_with(Tool::Darken);
        let mut target = cell();
        target.opacity = -0.1;
        controller.apply_tool(&mut target).unwrap();
        assert!((target.opacity - 0.1).abs() < EPSILON);
    }

    #[test]
    fn strict_mode_keeps_opacity_in_range() {
        let mut controller =
            ToolController::new(ToolSet::Extended, OpacityMode::Strict, ToolPaints::default());
        controller.select_tool(Tool::Lighten).unwrap();
        let mut target = cell();
        for _ in 0..15 {
            controller.apply_tool(&mut target).unwrap();
        }
        assert_eq!(target.opacity, 0.0);

        controller.select_tool(Tool::Darken).unwrap();
        for _ in 0..15 {
            controller.apply_tool(&mut target).unwrap();
        }
        assert_eq!(target.opacity, 1.0);
    }

    #[test]
    fn select_tool_outside_set_keeps_highlight() {
        let mut controller =
            ToolController::new(ToolSet::Classic, OpacityMode::Drift, ToolPaints::default());
        controller.select_tool(Tool::Rainbow).unwrap();

        let err = controller.select_tool(Tool::Lighten).unwrap_err();
        assert_eq!(
            err,
            InvalidToolError::NotEnabled {
                tool: Tool::Lighten,
                set: ToolSet::Classic
            }
        );
        assert_eq!(controller.current_highlight(), Tool::Rainbow);
    }

    #[test]
    fn select_unknown_name_keeps_highlight() {
        let mut controller = controller_with(Tool::Erase);
        assert!(controller.select_tool_named("airbrush").is_err());
        assert_eq!(controller.current_highlight(), Tool::Erase);
        assert_eq!(controller.select_tool_named("Darken"), Ok(Tool::Darken));
    }

    #[test]
    fn apply_with_disabled_tool_leaves_cell_untouched() {
        let mut controller = controller_with(Tool::Darken);
        controller.set_tool_set(ToolSet::Classic);
        let mut target = cell();
        target.opacity = 0.4;
        let before = target.clone();

        assert!(controller.apply_tool(&mut target).is_err());
        assert_eq!(target, before);
        assert_eq!(controller.current_highlight(), Tool::Darken);
    }

    #[test]
    fn palette_flags_only_the_selection() {
        let controller = controller_with(Tool::Rainbow);
        let palette = controller.palette();
        assert_eq!(palette.len(), 5);
        let highlighted: Vec<Tool> = palette
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(tool, _)| *tool)
            .collect();
        assert_eq!(highlighted, vec![Tool::Rainbow]);
    }

    #[test]
    fn custom_paints_are_used() {
        let paints = ToolPaints {
            ink: RED,
            ..ToolPaints::default()
        };
        let mut controller = ToolController::new(ToolSet::Extended, OpacityMode::Drift, paints);
        let mut target = cell();
        controller.apply_tool(&mut target).unwrap();
        assert_eq!(target.color, Some(RED));
    }
}
