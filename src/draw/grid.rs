//! Grid container and the model that builds, tears down and resizes it.

use super::cell::Cell;
use super::color::{GRID_LINE, Rgb};
use log::debug;
use serde::Serialize;
use thiserror::Error;

/// Invalid grid dimensions were requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("grid size must be positive, got {0}")]
    NonPositiveSize(i64),

    #[error("grid size {size} is outside the allowed range {min}..={max}")]
    OutOfBounds { size: i64, min: u32, max: u32 },
}

/// Geometry constants every grid is built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// On-screen extent the whole grid fills, in render units
    pub total_render_space: f64,
    /// Border thickness applied to every cell, in render units
    pub border_thickness: f64,
    /// Smallest accepted size
    pub min_size: u32,
    /// Largest accepted size
    pub max_size: u32,
    /// Size used at startup
    pub default_size: u32,
    /// Border color of unpainted cells
    pub grid_line: Rgb,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            total_render_space: 360.0,
            border_thickness: 0.5,
            min_size: 1,
            max_size: 100,
            default_size: 16,
            grid_line: GRID_LINE,
        }
    }
}

impl GridLayout {
    /// Per-cell on-screen extent for a grid of `size` cells per side.
    ///
    /// Fractional results are passed through as-is.
    pub fn cell_extent(&self, size: u32) -> f64 {
        (self.total_render_space / size as f64) - 2.0 * self.border_thickness
    }
}

/// Square collection of cells for one size.
///
/// Always holds exactly `size * size` cells, stored row-major so that the cell
/// at `(x, y)` lives at index `y * size + x`.
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    size: u32,
    generation: u64,
    cell_extent: f64,
    border_thickness: f64,
    cells: Vec<Cell>,
}

impl Grid {
    /// Cells per side.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size
    }

    pub fn height(&self) -> u32 {
        self.size
    }

    /// Build counter; every grid produced by a [`GridModel`] gets a new one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// On-screen extent of one cell, excluding its borders.
    pub fn cell_extent(&self) -> f64 {
        self.cell_extent
    }

    pub fn border_thickness(&self) -> f64 {
        self.border_thickness
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.size && y < self.size).then(|| (y * self.size + x) as usize)
    }

    /// Looks up the cell at `(x, y)`, if it lies inside the grid.
    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        let index = self.index(x, y)?;
        Some(&self.cells[index])
    }

    /// Mutable lookup of the cell at `(x, y)`.
    pub fn cell_mut(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        let index = self.index(x, y)?;
        Some(&mut self.cells[index])
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size as usize)
    }

    /// Number of cells any tool has touched since the grid was built.
    ///
    /// Erased cells count too: the eraser writes the background color rather
    /// than unsetting it.
    pub fn touched_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_painted()).count()
    }
}

/// Builds and replaces grids.
///
/// The model knows nothing about tools; whoever owns the returned [`Grid`] is
/// responsible for routing paint events to its cells.
#[derive(Debug)]
pub struct GridModel {
    layout: GridLayout,
    next_generation: u64,
}

impl GridModel {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            next_generation: 0,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Checks a requested size (as delivered by a slider) against the bounds.
    pub fn validate_size(&self, requested: i64) -> Result<u32, ConfigurationError> {
        if requested <= 0 {
            return Err(ConfigurationError::NonPositiveSize(requested));
        }

        let min = self.layout.min_size;
        let max = self.layout.max_size;
        match u32::try_from(requested) {
            Ok(size) if (min..=max).contains(&size) => Ok(size),
            _ => Err(ConfigurationError::OutOfBounds {
                size: requested,
                min,
                max,
            }),
        }
    }

    /// Constructs a new `size x size` grid of unpainted cells.
    pub fn build(&mut self, size: u32) -> Result<Grid, ConfigurationError> {
        let size = self.validate_size(i64::from(size))?;

        let cell_extent = self.layout.cell_extent(size);
        let grid_line = self.layout.grid_line;
        let cells = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .map(|(x, y)| Cell::unpainted(x, y, grid_line))
            .collect();

        let generation = self.next_generation;
        self.next_generation += 1;

        debug!(
            "Built {size}x{size} grid (generation {generation}, cell extent {cell_extent})"
        );

        Ok(Grid {
            size,
            generation,
            cell_extent,
            border_thickness: self.layout.border_thickness,
            cells,
        })
    }

    /// Builds a grid at the configured default size.
    pub fn build_default(&mut self) -> Result<Grid, ConfigurationError> {
        self.build(self.layout.default_size)
    }

    /// Releases every cell of `grid`.
    ///
    /// Returns the number of cells released.
    pub fn teardown(&self, grid: Grid) -> usize {
        let released = grid.cells.len();
        debug!(
            "Tore down {}x{} grid (generation {}), released {released} cells",
            grid.size, grid.size, grid.generation
        );
        released
    }

    /// Replaces `current` with a freshly built grid of `new_size`.
    ///
    /// `current` is left untouched when `new_size` is rejected.
    pub fn resize(&mut self, current: &mut Grid, new_size: i64) -> Result<(), ConfigurationError> {
        let size = self.validate_size(new_size)?;
        let replacement = self.build(size)?;
        let old = std::mem::replace(current, replacement);
        self.teardown(old);
        Ok(())
    }
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new(GridLayout::default())
    }
}
