//! Concentric square and circle outlines around the grid centre

use std::collections::BTreeSet;

use crate::spatial::grid::KolamGrid;
use crate::spatial::pattern::Pattern;
use crate::spatial::point::GridPoint;

/// Outline of the square at Chebyshev distance `distance` from `center`
///
/// Top and bottom edges span `2d + 1` cells; the side edges skip the corners
/// already emitted, giving exactly `8d` points for `d >= 1`.
pub fn square_ring(center: GridPoint, distance: i32) -> Vec<GridPoint> {
    let (cx, cy) = (center.x, center.y);
    let mut points = Vec::new();

    for x in cx - distance..=cx + distance {
        points.push(GridPoint::new(x, cy - distance));
    }
    for x in cx - distance..=cx + distance {
        points.push(GridPoint::new(x, cy + distance));
    }
    for y in cy - distance + 1..cy + distance {
        points.push(GridPoint::new(cx - distance, y));
    }
    for y in cy - distance + 1..cy + distance {
        points.push(GridPoint::new(cx + distance, y));
    }

    points
}

/// Midpoint circle of `radius` around `center`, deduplicated
///
/// Each step emits the eight octant reflections of `(x, y)`.
pub fn circle_ring(center: GridPoint, radius: i32) -> BTreeSet<GridPoint> {
    let mut points = BTreeSet::new();
    let (mut x, mut y) = (0, radius);
    let mut decision = 3 - 2 * radius;

    while x <= y {
        for (px, py) in [
            (x, y),
            (y, x),
            (-x, y),
            (-y, x),
            (-x, -y),
            (-y, -x),
            (x, -y),
            (y, -x),
        ] {
            points.insert(GridPoint::new(center.x + px, center.y + py));
        }

        if decision < 0 {
            decision += 4 * x + 6;
        } else {
            decision += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    points
}

impl KolamGrid {
    /// Nested square outlines around the centre
    ///
    /// Radii run from 1 up to `count`, stopping before the larger of the two
    /// half-dimensions. Points are not clipped.
    pub fn concentric_squares(&self, count: usize) -> Pattern {
        let center = self.center();
        let max_distance = i64::from(center.x.max(center.y));
        let limit = i64::try_from(count)
            .unwrap_or(i64::MAX)
            .saturating_add(1)
            .min(max_distance);

        let mut pattern = Pattern::new();
        for distance in 1..limit {
            pattern.extend(square_ring(center, distance as i32));
        }
        pattern
    }

    /// Midpoint circles of radius `1..=count` around the centre, clipped to the grid
    pub fn concentric_circles(&self, count: usize) -> Pattern {
        let center = self.center();
        // Larger circles never intersect the grid
        let reach = self.width().saturating_add(self.height());
        let largest = i32::try_from(count).unwrap_or(i32::MAX).min(reach);

        let mut pattern = Pattern::new();
        for radius in 1..=largest {
            pattern.extend(
                circle_ring(center, radius)
                    .into_iter()
                    .filter(|p| self.contains(*p)),
            );
        }
        pattern
    }

    /// Generate concentric squares and register them under `name`
    pub fn create_concentric_squares(&mut self, count: usize, name: &str) {
        let pattern = self.concentric_squares(count);
        self.add_pattern(name, pattern);
    }

    /// Generate concentric circles and register them under `name`
    pub fn create_concentric_circles(&mut self, count: usize, name: &str) {
        let pattern = self.concentric_circles(count);
        self.add_pattern(name, pattern);
    }
}
