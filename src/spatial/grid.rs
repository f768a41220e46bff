//! Bounded integer grid with a registry of named patterns
//!
//! Patterns are pure geometry and may extend beyond the grid. Drawing a
//! pattern writes its in-bounds points into the owned cell array; points
//! outside `[0, width) x [0, height)` are skipped without error.

use std::collections::HashMap;

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter, pattern_not_found};
use crate::spatial::pattern::{Pattern, PatternBounds};
use crate::spatial::point::GridPoint;

/// Size summary of a registered pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternStatistics {
    /// Number of distinct points
    pub point_count: usize,
    /// Bounds, `None` for an empty pattern
    pub bounds: Option<PatternBounds>,
    /// Columns spanned, zero for an empty pattern
    pub width: i64,
    /// Rows spanned, zero for an empty pattern
    pub height: i64,
}

/// Occupancy summary of the grid cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStatistics {
    /// Number of cells in the grid
    pub total_cells: usize,
    /// Cells holding a non-zero value
    pub filled_cells: usize,
    /// Cells holding zero
    pub empty_cells: usize,
    /// Filled share in percent, rounded to two decimals
    pub fill_percentage: f64,
}

/// Grid engine owning the cell array and the pattern registry
///
/// Cells are stored as `(rows, cols)` = `(height, width)` and indexed
/// `[y, x]`.
#[derive(Debug, Clone)]
pub struct KolamGrid {
    width: i32,
    height: i32,
    cells: Array2<i32>,
    patterns: HashMap<String, Pattern>,
}

impl KolamGrid {
    /// Create an empty grid
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(width: usize, height: usize) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        tracing::debug!(width, height, "created grid");

        Ok(Self {
            width: width as i32,
            height: height as i32,
            cells: Array2::zeros((height, width)),
            patterns: HashMap::new(),
        })
    }

    /// Number of columns
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Integer centre `(width / 2, height / 2)`
    pub const fn center(&self) -> GridPoint {
        GridPoint::new(self.width / 2, self.height / 2)
    }

    /// Cell array, indexed `[y, x]`
    pub const fn cells(&self) -> &Array2<i32> {
        &self.cells
    }

    /// Whether a point lies inside the grid
    pub const fn contains(&self, point: GridPoint) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// Point for wide coordinates if it lands inside the grid
    pub(crate) fn clip(&self, x: i64, y: i64) -> Option<GridPoint> {
        let point = GridPoint::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?);
        self.contains(point).then_some(point)
    }

    /// Value of the cell at `point`, or `None` outside the grid
    pub fn cell(&self, point: GridPoint) -> Option<i32> {
        if !self.contains(point) {
            return None;
        }
        self.cells
            .get([point.y as usize, point.x as usize])
            .copied()
    }

    /// Register `points` under `name`, replacing any previous pattern
    pub fn add_pattern<I, P>(&mut self, name: &str, points: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<GridPoint>,
    {
        let pattern: Pattern = points.into_iter().collect();
        tracing::debug!(name, points = pattern.len(), "registered pattern");
        self.patterns.insert(name.to_string(), pattern);
    }

    /// Registered pattern, if any
    pub fn pattern(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    /// Registered pattern
    ///
    /// # Errors
    ///
    /// Returns [`crate::KolamError::PatternNotFound`] for unknown names
    pub fn require_pattern(&self, name: &str) -> Result<&Pattern> {
        self.patterns.get(name).ok_or_else(|| pattern_not_found(name))
    }

    /// Names of all registered patterns, sorted
    pub fn pattern_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Write `value` into every in-bounds cell of a pattern
    ///
    /// Returns the number of cells written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::KolamError::PatternNotFound`] for unknown names
    pub fn draw_pattern(&mut self, name: &str, value: i32) -> Result<usize> {
        let pattern = self.patterns.get(name).ok_or_else(|| pattern_not_found(name))?;

        let mut written = 0;
        for point in pattern {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            if let Some(cell) = self.cells.get_mut([point.y as usize, point.x as usize]) {
                *cell = value;
                written += 1;
            }
        }

        tracing::debug!(name, value, written, "drew pattern");
        Ok(written)
    }

    /// Reset every cell to zero
    pub fn clear_grid(&mut self) {
        self.cells.fill(0);
    }

    /// Cells as nested rows, for export collaborators
    pub fn grid_rows(&self) -> Vec<Vec<i32>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Bounds of a registered pattern; `None` when absent or empty
    pub fn bounding_box(&self, name: &str) -> Option<PatternBounds> {
        self.patterns.get(name).and_then(Pattern::bounds)
    }

    /// Point count and extent of a registered pattern
    pub fn pattern_statistics(&self, name: &str) -> Option<PatternStatistics> {
        let pattern = self.patterns.get(name)?;
        let bounds = pattern.bounds();

        Some(PatternStatistics {
            point_count: pattern.len(),
            bounds,
            width: bounds.map_or(0, |b| b.width()),
            height: bounds.map_or(0, |b| b.height()),
        })
    }

    /// Binary mask of a pattern's in-bounds points, shaped like the grid
    ///
    /// # Errors
    ///
    /// Returns [`crate::KolamError::PatternNotFound`] for unknown names
    pub fn pattern_matrix(&self, name: &str) -> Result<Array2<u8>> {
        let pattern = self.require_pattern(name)?;
        let mut matrix = Array2::zeros(self.cells.dim());

        for point in pattern.iter().filter(|p| self.contains(**p)) {
            if let Some(cell) = matrix.get_mut([point.y as usize, point.x as usize]) {
                *cell = 1;
            }
        }

        Ok(matrix)
    }

    /// Filled and empty cell counts
    pub fn fill_statistics(&self) -> FillStatistics {
        let total_cells = self.cells.len();
        let filled_cells = self.cells.iter().filter(|&&v| v != 0).count();
        let percentage = filled_cells as f64 / total_cells as f64 * 100.0;

        FillStatistics {
            total_cells,
            filled_cells,
            empty_cells: total_cells - filled_cells,
            fill_percentage: (percentage * 100.0).round() / 100.0,
        }
    }
}
