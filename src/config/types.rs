//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::color::GRID_LINE;
use crate::input::{OpacityMode, Tool, ToolSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Grid geometry and size bounds.
///
/// Controls how large the grid starts and how far the size slider may go.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Cells per side when the sketch starts (valid range: min_size - max_size)
    #[serde(default = "default_grid_size")]
    pub default_size: u32,

    /// Smallest size the slider may request (at least 1)
    #[serde(default = "default_min_size")]
    pub min_size: u32,

    /// Largest size the slider may request
    #[serde(default = "default_max_size")]
    pub max_size: u32,

    /// On-screen extent the whole grid fills, in render units
    #[serde(default = "default_total_render_space")]
    pub total_render_space: f64,

    /// Border thickness of every cell, in render units
    #[serde(default = "default_border_thickness")]
    pub border_thickness: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_size: default_grid_size(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            total_render_space: default_total_render_space(),
            border_thickness: default_border_thickness(),
        }
    }
}

/// Tool palette settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    /// Tool selected at startup (draw, erase, rainbow, lighten, darken)
    #[serde(default)]
    pub default_tool: Tool,

    /// Which tools the palette offers: "classic" (draw, erase, rainbow) or "extended"
    #[serde(default)]
    pub tool_set: ToolSet,

    /// "drift" lets lighten/darken step past 0.0 and 1.0; "strict" clamps them
    #[serde(default)]
    pub opacity_mode: OpacityMode,

    /// Fixed seed for the rainbow tool; random when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainbow_seed: Option<u64>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            tool_set: ToolSet::default(),
            opacity_mode: OpacityMode::default(),
            rainbow_seed: None,
        }
    }
}

/// Colors written by the draw and erase tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ColorsConfig {
    /// Canvas background, restored by the eraser
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Ink used by the draw tool
    #[serde(default = "default_ink")]
    pub ink: ColorSpec,

    /// Border color of unpainted and erased cells
    #[serde(default = "default_grid_line")]
    pub grid_line: ColorSpec,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            ink: default_ink(),
            grid_line: default_grid_line(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_grid_size() -> u32 {
    16
}

fn default_min_size() -> u32 {
    1
}

fn default_max_size() -> u32 {
    100
}

fn default_total_render_space() -> f64 {
    360.0
}

fn default_border_thickness() -> f64 {
    0.5
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_ink() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_grid_line() -> ColorSpec {
    ColorSpec::from(GRID_LINE)
}
