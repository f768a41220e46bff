//! Symmetry and affine transforms over registered patterns
//!
//! Every transform reads a stored pattern and returns a new [`Pattern`];
//! the stored pattern is never modified. Symmetry transforms return the
//! union of the original points with their images. Images that land outside
//! the grid are dropped, except for the two mirrors which keep every image.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::KolamGrid;
use crate::spatial::pattern::Pattern;
use crate::spatial::point::GridPoint;

/// Symmetry operation selectable by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SymmetryOperation {
    /// Copy the pattern unchanged
    None,
    /// Mirror across the vertical centre line
    Horizontal,
    /// Mirror across the horizontal centre line
    Vertical,
    /// Accumulate one quarter turn
    Rotate90,
    /// Accumulate two quarter turns
    Rotate180,
    /// Accumulate three quarter turns
    Rotate270,
    /// Reflect across the main diagonal
    DiagonalMain,
    /// Reflect across the anti-diagonal
    DiagonalAnti,
}

impl KolamGrid {
    /// Apply a [`SymmetryOperation`] to a registered pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not registered
    pub fn apply_symmetry(&self, name: &str, operation: SymmetryOperation) -> Result<Pattern> {
        match operation {
            SymmetryOperation::None => self.require_pattern(name).cloned(),
            SymmetryOperation::Horizontal => self.mirror_horizontal(name),
            SymmetryOperation::Vertical => self.mirror_vertical(name),
            SymmetryOperation::Rotate90 => self.rotate(name, 90),
            SymmetryOperation::Rotate180 => self.rotate(name, 180),
            SymmetryOperation::Rotate270 => self.rotate(name, 270),
            SymmetryOperation::DiagonalMain => self.reflect_diagonal(name, true),
            SymmetryOperation::DiagonalAnti => self.reflect_diagonal(name, false),
        }
    }

    /// Union of a pattern with its mirror image across the vertical centre line
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not registered
    pub fn mirror_horizontal(&self, name: &str) -> Result<Pattern> {
        let source = self.require_pattern(name)?;
        let width = self.width();

        let mut result = source.clone();
        result.extend(source.iter().filter_map(|p| {
            let mirrored_x = width.checked_sub(1)?.checked_sub(p.x)?;
            Some(GridPoint::new(mirrored_x, p.y))
        }));
        tracing::debug!(name, points = result.len(), "mirrored horizontally");
        Ok(result)
    }

    /// Union of a pattern with its mirror image across the horizontal centre line
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not registered
    pub fn mirror_vertical(&self, name: &str) -> Result<Pattern> {
        let source = self.require_pattern(name)?;
        let height = self.height();

        let mut result = source.clone();
        result.extend(source.iter().filter_map(|p| {
            let mirrored_y = height.checked_sub(1)?.checked_sub(p.y)?;
            Some(GridPoint::new(p.x, mirrored_y))
        }));
        tracing::debug!(name, points = result.len(), "mirrored vertically");
        Ok(result)
    }

    /// Accumulate quarter turns about the grid centre
    ///
    /// Each step rotates the whole accumulated set, so a half turn also
    /// contains the quarter-turn images. Coordinates are truncated towards
    /// zero after rotating about the fractional centre.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not registered or `degrees` is not
    /// a multiple of 90
    pub fn rotate(&self, name: &str, degrees: u32) -> Result<Pattern> {
        let source = self.require_pattern(name)?;
        if degrees % 90 != 0 {
            return Err(invalid_parameter(
                "degrees",
                &degrees,
                &"rotation must be a multiple of 90",
            ));
        }

        let cx = f64::from(self.width()) / 2.0;
        let cy = f64::from(self.height()) / 2.0;
        let mut result = source.clone();

        for _ in 0..degrees / 90 {
            let rotated: Vec<GridPoint> = result
                .iter()
                .filter_map(|p| {
                    let dx = f64::from(p.x) - cx;
                    let dy = f64::from(p.y) - cy;
                    self.clip((cx - dy) as i64, (cy + dx) as i64)
                })
                .collect();

            let before = result.len();
            result.extend(rotated);
            // A step that adds nothing has reached the closed orbit
            if result.len() == before {
                break;
            }
        }

        tracing::debug!(name, degrees, points = result.len(), "rotated");
        Ok(result)
    }

    /// Union of a pattern with its reflection across a diagonal
    ///
    /// The main diagonal maps `(x, y)` to `(y, x)`; the anti-diagonal maps it
    /// to `(width - 1 - y, height - 1 - x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not registered
    pub fn reflect_diagonal(&self, name: &str, main_diagonal: bool) -> Result<Pattern> {
        let source = self.require_pattern(name)?;
        let width = i64::from(self.width());
        let height = i64::from(self.height());

        let mut result = source.clone();
        result.extend(source.iter().filter_map(|p| {
            let (x, y) = (i64::from(p.x), i64::from(p.y));
            if main_diagonal {
                self.clip(y, x)
            } else {
                self.clip(width - 1 - y, height - 1 - x)
            }
        }));

        tracing::debug!(
            name,
            main_diagonal,
            points = result.len(),
            "reflected diagonally"
        );
        Ok(result)
    }

    /// Union of several patterns, each shifted by its own offset
    ///
    /// Missing offsets default to `(0, 0)`. Shifted points outside the grid
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not registered or more offsets than
    /// names are supplied
    pub fn compose_patterns(&self, names: &[&str], offsets: &[(i32, i32)]) -> Result<Pattern> {
        if offsets.len() > names.len() {
            return Err(invalid_parameter(
                "offsets",
                &offsets.len(),
                &format!("at most one offset per pattern ({} patterns)", names.len()),
            ));
        }

        let sources = names
            .iter()
            .map(|name| self.require_pattern(name))
            .collect::<Result<Vec<_>>>()?;

        let mut result = Pattern::new();
        for (index, source) in sources.into_iter().enumerate() {
            let (dx, dy) = offsets.get(index).copied().unwrap_or((0, 0));
            result.extend(self.shifted(source, dx, dy));
        }

        tracing::debug!(
            patterns = names.len(),
            points = result.len(),
            "composed patterns"
        );
        Ok(result)
    }

    /// Shift a pattern, dropping points that leave the grid
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not registered
    pub fn translate_pattern(&self, name: &str, dx: i32, dy: i32) -> Result<Pattern> {
        let source = self.require_pattern(name)?;
        Ok(self.shifted(source, dx, dy).collect())
    }

    /// Block-expand every point into a `factor x factor` square
    ///
    /// Point `(x, y)` becomes `(x * factor + i, y * factor + j)` for
    /// `i, j in 0..factor`, clipped to the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not registered or `factor` is zero
    pub fn scale_pattern(&self, name: &str, factor: u32) -> Result<Pattern> {
        let source = self.require_pattern(name)?;
        if factor == 0 {
            return Err(invalid_parameter("factor", &factor, &"must be at least 1"));
        }

        let step = i64::from(factor);
        let (width, height) = (i64::from(self.width()), i64::from(self.height()));
        let mut result = Pattern::new();
        for point in source {
            let (base_x, base_y) = (i64::from(point.x) * step, i64::from(point.y) * step);
            // Only the part of the block inside the grid survives clipping
            for x in base_x.max(0)..(base_x + step).min(width) {
                for y in base_y.max(0)..(base_y + step).min(height) {
                    if let Some(scaled) = self.clip(x, y) {
                        result.insert(scaled);
                    }
                }
            }
        }

        Ok(result)
    }

    fn shifted<'a>(
        &'a self,
        source: &'a Pattern,
        dx: i32,
        dy: i32,
    ) -> impl Iterator<Item = GridPoint> + 'a {
        source.iter().filter_map(move |p| {
            self.clip(
                i64::from(p.x) + i64::from(dx),
                i64::from(p.y) + i64::from(dy),
            )
        })
    }
}
