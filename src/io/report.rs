//! Plain-text rendering of validation results and grids

use std::fmt;

use ndarray::Array2;

use crate::analysis::PatternFeatures;
use crate::spatial::grid::FillStatistics;
use crate::validation::{SymmetryReport, ValidationResult};

/// Everything printed about one design
pub struct DesignReport<'a> {
    /// Heading line
    pub title: &'a str,
    /// Validation outcome
    pub validation: &'a ValidationResult,
    /// Symmetry classification
    pub symmetry: &'a SymmetryReport,
    /// Extracted features, absent for an empty design
    pub features: Option<&'a PatternFeatures>,
    /// Grid occupancy, absent for designs without a grid
    pub fill: Option<&'a FillStatistics>,
}

impl fmt::Display for DesignReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;

        let status = if self.validation.is_valid {
            "valid"
        } else {
            "invalid"
        };
        writeln!(
            f,
            "status: {status} ({} errors, {} warnings)",
            self.validation.errors.len(),
            self.validation.warnings.len()
        )?;
        for error in &self.validation.errors {
            writeln!(f, "  error: {error}")?;
        }
        for warning in &self.validation.warnings {
            writeln!(f, "  warning: {warning}")?;
        }

        write!(f, "symmetry: {}", self.symmetry.symmetry)?;
        if let Some(degrees) = self.symmetry.rotation_degrees {
            write!(f, " ({degrees} degrees)")?;
        }
        writeln!(f, " [bilateral {:.2}]", self.symmetry.bilateral_ratio)?;

        if let Some(features) = self.features {
            writeln!(
                f,
                "points: {}, connections: {}, complexity: {:.4}",
                features.point_count, features.connection_count, features.complexity
            )?;
            for (axis, stats) in [("x", &features.x_statistics), ("y", &features.y_statistics)] {
                writeln!(
                    f,
                    "  {axis}: mean {:.3}, range [{:.3}, {:.3}], std {:.3}",
                    stats.mean, stats.min, stats.max, stats.std_dev
                )?;
            }
        }

        if let Some(fill) = self.fill {
            writeln!(
                f,
                "grid: {}/{} cells filled ({:.2}%)",
                fill.filled_cells, fill.total_cells, fill.fill_percentage
            )?;
        }

        Ok(())
    }
}

/// Character view of a cell array, top row first
///
/// Rows are printed from the largest `y` down so that north points up.
pub struct GridView<'a>(pub &'a Array2<i32>);

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.outer_iter().rev() {
            let line: String = row
                .iter()
                .map(|&value| if value == 0 { '.' } else { '#' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
