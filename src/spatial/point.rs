//! Point value types for geometric validation and integer grid work
//!
//! [`Point`] carries floating coordinates and compares exactly under
//! `PartialEq`. Approximate identity is always requested explicitly through
//! [`Point::approx_eq`] or a [`crate::spatial::lookup::PointIndex`], never
//! through hashing rounded coordinates.

/// A point in the plane with floating coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Angle of the vector towards `other`, in radians
    pub fn angle_to(&self, other: &Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Point halfway between this point and `other`
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new(f64::midpoint(self.x, other.x), f64::midpoint(self.y, other.y))
    }

    /// Whether `other` lies strictly within `tolerance` of this point
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.distance_to(other) < tolerance
    }

    /// Rotate counter-clockwise about `center` by `radians`
    pub fn rotate_about(&self, center: &Self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;

        Self::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    }

    /// Mirror image across the vertical line `x = axis_x`
    pub fn reflect_across_vertical(&self, axis_x: f64) -> Self {
        Self::new(2.0 * axis_x - self.x, self.y)
    }

    /// Mean position of a point set, or `None` when it is empty
    pub fn centroid(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let count = points.len() as f64;
        let (sum_x, sum_y) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Self::new(sum_x / count, sum_y / count))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridPoint> for Point {
    fn from(point: GridPoint) -> Self {
        Self::new(f64::from(point.x), f64::from(point.y))
    }
}

/// A cell coordinate on an integer grid
///
/// Ordered by `x` then `y`, so pattern sets iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridPoint {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl GridPoint {
    /// Create a grid point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by an integer offset, or `None` on overflow
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
