//! Composite complexity score for point graphs

use std::collections::HashSet;

use crate::generation::geometric::Connection;
use crate::spatial::point::Point;

/// Score in `[0, 1]` combining point count, edge density and edge distinctness
///
/// Edge density is the connection count relative to a complete graph on the
/// points; distinctness is the share of connections that are distinct as
/// ordered pairs. The product is scaled by `n / 100` and saturates at 1.
/// Zero when there are no connections or fewer than two points.
pub fn calculate_pattern_complexity(points: &[Point], connections: &[Connection]) -> f64 {
    let n = points.len();
    if n < 2 || connections.is_empty() {
        return 0.0;
    }

    let possible = (n * (n - 1) / 2) as f64;
    let density = connections.len() as f64 / possible;

    let distinct: HashSet<&Connection> = connections.iter().collect();
    let uniqueness = distinct.len() as f64 / connections.len() as f64;

    (n as f64 / 100.0 * density * uniqueness).clamp(0.0, 1.0)
}
