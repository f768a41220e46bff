//! Dot alignment and line continuity reports

use crate::generation::geometric::Connection;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::point::Point;

/// A point that does not sit on the expected dot grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Misalignment {
    /// Position in the point list
    pub point_index: usize,
    /// The point itself
    pub point: Point,
    /// Nearest multiple of the grid spacing
    pub nearest_grid: Point,
    /// Distance from the point to `nearest_grid`
    pub distance: f64,
}

/// Summary of a dot alignment check
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentReport {
    /// Points within tolerance of their grid position
    pub aligned: usize,
    /// Points farther than tolerance from their grid position
    pub misaligned: usize,
    /// Points checked
    pub total: usize,
    /// Aligned share in percent, zero when there are no points
    pub alignment_percentage: f64,
    /// Details of every misaligned point
    pub misaligned_points: Vec<Misalignment>,
}

/// A connection longer than the allowed gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discontinuity {
    /// Position in the connection list
    pub connection_index: usize,
    /// Endpoint indices
    pub points: Connection,
    /// Distance between the endpoints
    pub distance: f64,
}

/// Summary of a line continuity check
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuityReport {
    /// Connections not reported as discontinuous
    pub continuous: usize,
    /// Connections longer than the allowed gap
    pub discontinuous: usize,
    /// Connections checked
    pub total_connections: usize,
    /// Continuous share in percent, zero when there are no connections
    pub continuity_percentage: f64,
    /// Details of every discontinuity
    pub discontinuities: Vec<Discontinuity>,
}

/// Snap every point to the nearest multiple of `grid_spacing` and report stragglers
///
/// Halfway coordinates snap to the even multiple.
///
/// # Errors
///
/// Returns an error if `grid_spacing` is not a positive finite number
pub fn validate_dot_alignment(
    points: &[Point],
    grid_spacing: f64,
    tolerance: f64,
) -> Result<AlignmentReport> {
    if !grid_spacing.is_finite() || grid_spacing <= 0.0 {
        return Err(invalid_parameter(
            "grid_spacing",
            &grid_spacing,
            &"must be a positive finite number",
        ));
    }

    let misaligned_points: Vec<Misalignment> = points
        .iter()
        .enumerate()
        .filter_map(|(point_index, point)| {
            let nearest_grid = Point::new(
                (point.x / grid_spacing).round_ties_even() * grid_spacing,
                (point.y / grid_spacing).round_ties_even() * grid_spacing,
            );
            let distance = point.distance_to(&nearest_grid);

            (distance > tolerance).then_some(Misalignment {
                point_index,
                point: *point,
                nearest_grid,
                distance,
            })
        })
        .collect();

    let total = points.len();
    let aligned = total - misaligned_points.len();

    Ok(AlignmentReport {
        aligned,
        misaligned: misaligned_points.len(),
        total,
        alignment_percentage: percentage(aligned, total),
        misaligned_points,
    })
}

/// Report connections whose endpoints are farther apart than `max_gap`
///
/// Connections with an out-of-range endpoint are skipped and count as
/// continuous.
pub fn validate_line_continuity(
    points: &[Point],
    connections: &[Connection],
    max_gap: f64,
) -> ContinuityReport {
    let discontinuities: Vec<Discontinuity> = connections
        .iter()
        .enumerate()
        .filter_map(|(connection_index, &(a, b))| {
            let distance = points.get(a)?.distance_to(points.get(b)?);
            (distance > max_gap).then_some(Discontinuity {
                connection_index,
                points: (a, b),
                distance,
            })
        })
        .collect();

    let total_connections = connections.len();
    let continuous = total_connections - discontinuities.len();

    ContinuityReport {
        continuous,
        discontinuous: discontinuities.len(),
        total_connections,
        continuity_percentage: percentage(continuous, total_connections),
        discontinuities,
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
