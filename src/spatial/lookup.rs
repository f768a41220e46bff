//! Tolerance-aware point lookup backed by a uniform bucket grid
//!
//! Points are bucketed by `floor(coordinate / cell_size)` with the cell size
//! equal to the tolerance. Any point strictly within the tolerance of a query
//! lies in one of the 3x3 buckets around the query's own bucket, so a lookup
//! inspects only those buckets and then compares exact distances. The answer
//! is identical to an all-pairs scan.

use std::collections::HashMap;

use crate::spatial::point::Point;

type BucketKey = (i64, i64);

/// Spatial index answering "is any stored point within tolerance of this one"
#[derive(Debug, Clone)]
pub struct PointIndex {
    tolerance: f64,
    cell_size: f64,
    points: Vec<Point>,
    buckets: HashMap<BucketKey, Vec<usize>>,
}

impl PointIndex {
    /// Create an empty index matching at `tolerance`
    pub fn new(tolerance: f64) -> Self {
        let cell_size = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            f64::MIN_POSITIVE
        };

        Self {
            tolerance,
            cell_size,
            points: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Build an index whose slots equal the positions in `points`
    pub fn from_points(points: &[Point], tolerance: f64) -> Self {
        let mut index = Self::new(tolerance);
        for point in points {
            index.insert(*point);
        }
        index
    }

    /// Matching tolerance
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of stored points
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points are stored
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Store a point and return its slot
    pub fn insert(&mut self, point: Point) -> usize {
        let slot = self.points.len();
        self.points.push(point);
        self.buckets
            .entry(self.bucket_of(&point))
            .or_default()
            .push(slot);
        slot
    }

    /// Slot of some stored point strictly within tolerance of `target`
    pub fn find_within(&self, target: &Point) -> Option<usize> {
        self.find_matching(target, |_| true)
    }

    /// Like [`Self::find_within`] but never answers with slot `excluded`
    pub fn find_within_excluding(&self, target: &Point, excluded: usize) -> Option<usize> {
        self.find_matching(target, |slot| slot != excluded)
    }

    /// Whether any stored point is strictly within tolerance of `target`
    pub fn contains_near(&self, target: &Point) -> bool {
        self.find_within(target).is_some()
    }

    fn find_matching(&self, target: &Point, accept: impl Fn(usize) -> bool) -> Option<usize> {
        let (bx, by) = self.bucket_of(target);

        for dx in -1..=1_i64 {
            for dy in -1..=1_i64 {
                let key = (bx.saturating_add(dx), by.saturating_add(dy));
                let Some(slots) = self.buckets.get(&key) else {
                    continue;
                };

                let found = slots.iter().copied().find(|&slot| {
                    accept(slot)
                        && self
                            .points
                            .get(slot)
                            .is_some_and(|p| p.approx_eq(target, self.tolerance))
                });
                if found.is_some() {
                    return found;
                }
            }
        }

        None
    }

    // Saturating float-to-int casts keep huge coordinates in the edge buckets
    fn bucket_of(&self, point: &Point) -> BucketKey {
        (
            (point.x / self.cell_size).floor() as i64,
            (point.y / self.cell_size).floor() as i64,
        )
    }
}
