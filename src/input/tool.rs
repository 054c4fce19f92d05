//! Paint tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Paint tool.
///
/// The active tool determines how a cell changes when the pointer paints it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Opaque black ink (default)
    #[default]
    Draw,
    /// Restores the background color and grid line
    #[serde(alias = "eraser")]
    Erase,
    /// Random color per application
    Rainbow,
    /// Lowers opacity by one step
    Lighten,
    /// Raises opacity by one step
    Darken,
}

impl Tool {
    /// Button identifier, as used in scripts and config files.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Draw => "draw",
            Tool::Erase => "erase",
            Tool::Rainbow => "rainbow",
            Tool::Lighten => "lighten",
            Tool::Darken => "darken",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = InvalidToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draw" => Ok(Tool::Draw),
            "erase" | "eraser" => Ok(Tool::Erase),
            "rainbow" => Ok(Tool::Rainbow),
            "lighten" => Ok(Tool::Lighten),
            "darken" => Ok(Tool::Darken),
            _ => Err(InvalidToolError::Unknown(s.trim().to_string())),
        }
    }
}

/// Which tools the palette offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ToolSet {
    /// Draw, erase and rainbow only
    Classic,
    /// All five tools
    #[default]
    Extended,
}

impl ToolSet {
    /// Enabled tools in palette order.
    pub fn tools(&self) -> &'static [Tool] {
        match self {
            ToolSet::Classic => &[Tool::Draw, Tool::Erase, Tool::Rainbow],
            ToolSet::Extended => &[
                Tool::Draw,
                Tool::Erase,
                Tool::Rainbow,
                Tool::Lighten,
                Tool::Darken,
            ],
        }
    }

    pub fn contains(&self, tool: Tool) -> bool {
        self.tools().contains(&tool)
    }
}

/// A tool outside the enabled set was selected or applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidToolError {
    #[error("unknown tool '{0}'")]
    Unknown(String),

    #[error("tool '{tool}' is not enabled in the {set:?} tool set")]
    NotEnabled { tool: Tool, set: ToolSet },
}
