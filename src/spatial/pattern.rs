//! Deduplicated integer point sets and their bounds

use std::collections::BTreeSet;
use std::collections::btree_set;

use crate::spatial::point::GridPoint;

/// Inclusive axis-aligned bounds of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternBounds {
    /// Smallest x coordinate
    pub min_x: i32,
    /// Smallest y coordinate
    pub min_y: i32,
    /// Largest x coordinate
    pub max_x: i32,
    /// Largest y coordinate
    pub max_y: i32,
}

impl PatternBounds {
    /// Number of columns spanned, counting both edges
    pub const fn width(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64 + 1
    }

    /// Number of rows spanned, counting both edges
    pub const fn height(&self) -> i64 {
        self.max_y as i64 - self.min_y as i64 + 1
    }
}

/// An unordered, duplicate-free set of grid points
///
/// Backed by a `BTreeSet` so iteration order is stable (by `x`, then `y`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    points: BTreeSet<GridPoint>,
}

impl Pattern {
    /// Create an empty pattern
    pub const fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Number of distinct points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the pattern has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `point` belongs to the pattern
    pub fn contains(&self, point: &GridPoint) -> bool {
        self.points.contains(point)
    }

    /// Add a point, returning whether it was new
    pub fn insert(&mut self, point: GridPoint) -> bool {
        self.points.insert(point)
    }

    /// Add every point of `other`
    pub fn extend_from(&mut self, other: &Self) {
        self.points.extend(other.points.iter().copied());
    }

    /// Iterate points in ascending order
    pub fn iter(&self) -> btree_set::Iter<'_, GridPoint> {
        self.points.iter()
    }

    /// Points as a vector in ascending order
    pub fn to_vec(&self) -> Vec<GridPoint> {
        self.points.iter().copied().collect()
    }

    /// Bounds over all points, or `None` for an empty pattern
    pub fn bounds(&self) -> Option<PatternBounds> {
        let first = self.points.first()?;
        let initial = PatternBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        Some(self.points.iter().fold(initial, |b, p| PatternBounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }
}

impl<P: Into<GridPoint>> FromIterator<P> for Pattern {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<P: Into<GridPoint>> Extend<P> for Pattern {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.points.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Pattern {
    type Item = GridPoint;
    type IntoIter = btree_set::IntoIter<GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a GridPoint;
    type IntoIter = btree_set::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
