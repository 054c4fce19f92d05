//! Configuration file support for sketchgrid.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchgrid/config.toml`. Settings include grid geometry and
//! size bounds, the tool palette, and the colors the draw and erase tools write.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ColorsConfig, GridConfig, ToolsConfig};

use crate::draw::GridLayout;
use crate::draw::color::{BLACK, GRID_LINE, WHITE};
use crate::input::{Tool, ToolPaints};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest on-screen extent a cell may shrink to at `max_size`.
const MIN_CELL_EXTENT: f64 = 0.5;

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [grid]
/// default_size = 16
/// max_size = 100
/// total_render_space = 360.0
/// border_thickness = 0.5
///
/// [tools]
/// default_tool = "draw"
/// tool_set = "extended"
/// opacity_mode = "drift"
///
/// [colors]
/// background = "white"
/// ink = "black"
/// grid_line = "#d4d4d4"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Grid geometry and size bounds
    #[serde(default)]
    pub grid: GridConfig,

    /// Tool palette settings
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Draw and erase colors
    #[serde(default)]
    pub colors: ColorsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `total_render_space`: 10.0 - 10000.0
    /// - `border_thickness`: 0.0 - 10.0
    /// - `min_size`: at least 1
    /// - `max_size`: at least `min_size`, small enough that cells stay visible
    /// - `default_size`: `min_size` - `max_size`
    /// - `default_tool`: must belong to `tool_set`
    fn validate_and_clamp(&mut self) {
        let grid = &mut self.grid;

        // Render space: 10.0 - 10000.0
        if !(10.0..=10_000.0).contains(&grid.total_render_space) {
            warn!(
                "Invalid total_render_space {:.1}, clamping to 10.0-10000.0 range",
                grid.total_render_space
            );
            grid.total_render_space = if grid.total_render_space.is_nan() {
                360.0
            } else {
                grid.total_render_space.clamp(10.0, 10_000.0)
            };
        }

        // Border thickness: 0.0 - 10.0
        if !(0.0..=10.0).contains(&grid.border_thickness) {
            warn!(
                "Invalid border_thickness {:.2}, clamping to 0.0-10.0 range",
                grid.border_thickness
            );
            grid.border_thickness = if grid.border_thickness.is_nan() {
                0.5
            } else {
                grid.border_thickness.clamp(0.0, 10.0)
            };
        }

        if grid.min_size == 0 {
            warn!("Invalid min_size 0, using 1");
            grid.min_size = 1;
        }

        // Cells must keep a visible extent at the largest size
        let usable = grid.total_render_space / (MIN_CELL_EXTENT + 2.0 * grid.border_thickness);
        let size_limit = (usable.floor() as u32).max(1);
        if grid.max_size > size_limit {
            warn!(
                "max_size {} leaves cells smaller than {MIN_CELL_EXTENT} units, clamping to {size_limit}",
                grid.max_size
            );
            grid.max_size = size_limit;
        }

        if grid.min_size > grid.max_size {
            warn!(
                "min_size {} exceeds max_size {}, lowering it",
                grid.min_size, grid.max_size
            );
            grid.min_size = grid.max_size;
        }

        if !(grid.min_size..=grid.max_size).contains(&grid.default_size) {
            warn!(
                "Invalid default_size {}, clamping to {}-{} range",
                grid.default_size, grid.min_size, grid.max_size
            );
            grid.default_size = grid.default_size.clamp(grid.min_size, grid.max_size);
        }

        if !self.tools.tool_set.contains(self.tools.default_tool) {
            warn!(
                "default_tool '{}' is not part of the {:?} tool set, falling back to 'draw'",
                self.tools.default_tool, self.tools.tool_set
            );
            self.tools.default_tool = Tool::Draw;
        }

        let colors = &mut self.colors;
        for (name, spec, fallback) in [
            ("background", &mut colors.background, WHITE),
            ("ink", &mut colors.ink, BLACK),
            ("grid_line", &mut colors.grid_line, GRID_LINE),
        ] {
            if spec.parse().is_none() {
                warn!("Invalid {name} color {:?}, falling back to {fallback}", spec);
                *spec = ColorSpec::from(fallback);
            }
        }
    }

    /// Grid geometry derived from the `[grid]` and `[colors]` tables.
    pub fn grid_layout(&self) -> GridLayout {
        GridLayout {
            total_render_space: self.grid.total_render_space,
            border_thickness: self.grid.border_thickness,
            min_size: self.grid.min_size,
            max_size: self.grid.max_size,
            default_size: self.grid.default_size,
            grid_line: self.colors.grid_line.to_color_or(GRID_LINE),
        }
    }

    /// Colors the draw and erase tools write.
    pub fn tool_paints(&self) -> ToolPaints {
        ToolPaints {
            ink: self.colors.ink.to_color_or(BLACK),
            background: self.colors.background.to_color_or(WHITE),
            grid_line: self.colors.grid_line.to_color_or(GRID_LINE),
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchgrid/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text).context("Invalid TOML")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Serializes the configuration as TOML into `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `path`, or to the
    /// default location when `path` is `None`. Returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
