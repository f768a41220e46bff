//! Classic square-board kolam motifs
//!
//! Each motif is a dot layout on a `size x size` board derived from the
//! distance of a cell to the board centre `c = size / 2`. Cell `(row, col)`
//! becomes grid point `(col, row)`.

use crate::io::configuration::{MAX_MOTIF_SIZE, MIN_MOTIF_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::pattern::Pattern;
use crate::spatial::point::GridPoint;

/// Dot layout family
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Motif {
    /// Even Manhattan rings forming a rhombus
    Diamond,
    /// Even Euclidean bands forming a disc with 4-fold symmetry
    Symmetrical,
    /// A border ring around alternating inner bands
    Circular,
    /// Dots on the axes and diagonals inside a rhombus
    Star,
}

impl Motif {
    /// Lay the motif out on a `size x size` board
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is outside `MIN_MOTIF_SIZE..=MAX_MOTIF_SIZE`
    pub fn generate(self, size: usize) -> Result<Pattern> {
        if !(MIN_MOTIF_SIZE..=MAX_MOTIF_SIZE).contains(&size) {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("must be between {MIN_MOTIF_SIZE} and {MAX_MOTIF_SIZE}"),
            ));
        }

        let side = size as i32;
        let center = side / 2;
        let mut pattern = Pattern::new();

        for row in 0..side {
            for col in 0..side {
                if self.includes(row - center, col - center, center) {
                    pattern.insert(GridPoint::new(col, row));
                }
            }
        }

        tracing::debug!(motif = ?self, size, points = pattern.len(), "generated motif");
        Ok(pattern)
    }

    fn includes(self, di: i32, dj: i32, center: i32) -> bool {
        let (dx, dy) = (di.abs(), dj.abs());
        let radius = f64::from(center - 1);
        let distance = f64::from(di).hypot(f64::from(dj));
        let even_band = (distance.floor() as i64) % 2 == 0;

        match self {
            Self::Diamond => {
                let manhattan = dx + dy;
                manhattan <= center - 1 && manhattan % 2 == 0
            }
            Self::Symmetrical => distance <= radius && even_band,
            Self::Circular => {
                let on_border = radius - 1.0 <= distance && distance <= radius + 0.5;
                on_border || (distance <= radius - 2.0 && even_band)
            }
            Self::Star => {
                let manhattan = dx + dy;
                manhattan <= center - 1
                    && (dx == 0 || dy == 0 || dx == dy)
                    && manhattan % 2 == 0
            }
        }
    }
}
