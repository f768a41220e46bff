//! Summary features of a point graph

use crate::analysis::complexity::calculate_pattern_complexity;
use crate::generation::geometric::Connection;
use crate::math::statistics::AxisStatistics;
use crate::spatial::point::Point;

/// Counts, per-axis coordinate statistics and complexity of a pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternFeatures {
    /// Number of points
    pub point_count: usize,
    /// Number of connections
    pub connection_count: usize,
    /// Statistics of the x coordinates
    pub x_statistics: AxisStatistics,
    /// Statistics of the y coordinates
    pub y_statistics: AxisStatistics,
    /// Score from [`calculate_pattern_complexity`]
    pub complexity: f64,
}

/// Extract features, or `None` when there are no points
pub fn extract_pattern_features(
    points: &[Point],
    connections: &[Connection],
) -> Option<PatternFeatures> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();

    Some(PatternFeatures {
        point_count: points.len(),
        connection_count: connections.len(),
        x_statistics: AxisStatistics::from_values(&xs)?,
        y_statistics: AxisStatistics::from_values(&ys)?,
        complexity: calculate_pattern_complexity(points, connections),
    })
}
