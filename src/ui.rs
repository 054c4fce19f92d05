//! UI rendering: tool palette and status line.

use crate::input::SketchState;
use crate::util;

/// Renders the tool palette with the highlighted tool in brackets.
///
/// ```text
/// [draw]  erase  rainbow  lighten  darken
/// ```
pub fn render_palette(state: &SketchState) -> String {
    state
        .controller()
        .palette()
        .iter()
        .map(|(tool, selected)| {
            if *selected {
                format!("[{}]", tool.name())
            } else {
                format!(" {} ", tool.name())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a one-line summary of the grid and active tool.
pub fn render_status_line(state: &SketchState) -> String {
    let grid = state.grid();
    let paints = state.controller().paints();
    format!(
        "{size}x{size} (gen {generation})  cell {extent:.2}u  touched {touched}/{total}  tool {tool}  ink {ink}",
        size = grid.size(),
        generation = grid.generation(),
        extent = grid.cell_extent(),
        touched = grid.touched_count(),
        total = grid.len(),
        tool = state.current_highlight(),
        ink = util::color_to_name(&paints.ink),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::GridModel;
    use crate::input::{Tool, ToolController};

    fn state() -> SketchState {
        SketchState::new(GridModel::default(), ToolController::default().with_seed(1)).unwrap()
    }

    #[test]
    fn palette_brackets_selected_tool() {
        let mut state = state();
        assert!(render_palette(&state).starts_with("[draw]"));

        state.select_tool(Tool::Lighten).unwrap();
        let palette = render_palette(&state);
        assert!(palette.contains("[lighten]"));
        assert!(!palette.contains("[draw]"));
    }

    #[test]
    fn status_line_reports_size_and_tool() {
        let mut state = state();
        state.on_pointer_down(0, 0).unwrap();
        let line = render_status_line(&state);
        assert!(line.starts_with("16x16"));
        assert!(line.contains("touched 1/256"));
        assert!(line.contains("tool draw"));
        assert!(line.contains("ink black"));
    }
}
