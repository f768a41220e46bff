//! Floating-point kolam layouts with explicit connections
//!
//! A [`PointPattern`] is the minimal contract handed to renderers and to the
//! validator: a point list plus index pairs into it.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::pattern::Pattern;
use crate::spatial::point::{GridPoint, Point};

/// An edge between two indices of a parallel point list
pub type Connection = (usize, usize);

/// Points with the connections drawn between them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointPattern {
    /// Dot positions
    pub points: Vec<Point>,
    /// Index pairs into `points`
    pub connections: Vec<Connection>,
}

impl PointPattern {
    /// Wrap existing points and connections
    pub const fn new(points: Vec<Point>, connections: Vec<Connection>) -> Self {
        Self {
            points,
            connections,
        }
    }

    /// Rectangular dot grid joined to its horizontal and vertical neighbours
    ///
    /// Points are emitted row by row; horizontal edges come before vertical ones.
    pub fn dot_grid(rows: usize, cols: usize, spacing: f64) -> Self {
        let points = (0..rows)
            .flat_map(|i| {
                (0..cols).map(move |j| Point::new(j as f64 * spacing, i as f64 * spacing))
            })
            .collect();

        let mut connections = Vec::new();
        for i in 0..rows {
            for j in 0..cols.saturating_sub(1) {
                connections.push((i * cols + j, i * cols + j + 1));
            }
        }
        for i in 0..rows.saturating_sub(1) {
            for j in 0..cols {
                connections.push((i * cols + j, (i + 1) * cols + j));
            }
        }

        Self::new(points, connections)
    }

    /// Centre point with `count` evenly spaced tips, spokes and a rim
    pub fn star(count: usize, radius: f64) -> Self {
        let mut points = vec![Point::new(0.0, 0.0)];
        points.extend((0..count).map(|i| {
            let angle = TAU * i as f64 / count as f64;
            Point::new(radius * angle.cos(), radius * angle.sin())
        }));

        let mut connections: Vec<Connection> = (1..=count).map(|tip| (0, tip)).collect();
        connections.extend((0..count).map(|i| (i + 1, (i + 1) % count + 1)));

        Self::new(points, connections)
    }

    /// Rings of evenly spaced points, each closed into a loop and tied to the ring inside it
    pub fn concentric_rings(ring_count: usize, radius_step: f64, points_per_ring: usize) -> Self {
        let mut points = Vec::with_capacity(ring_count * points_per_ring);
        let mut connections = Vec::new();

        for ring in 0..ring_count {
            let radius = (ring + 1) as f64 * radius_step;
            let start = ring * points_per_ring;

            for i in 0..points_per_ring {
                let angle = TAU * i as f64 / points_per_ring as f64;
                points.push(Point::new(radius * angle.cos(), radius * angle.sin()));

                let next = if i + 1 < points_per_ring { start + i + 1 } else { start };
                connections.push((start + i, next));
            }

            if ring > 0 {
                let previous = start - points_per_ring;
                connections.extend((0..points_per_ring).map(|i| (start + i, previous + i)));
            }
        }

        Self::new(points, connections)
    }

    /// Points of a grid pattern joined wherever two points are 4-adjacent
    ///
    /// Points keep the pattern's ascending order. Each adjacent pair appears
    /// once, from the lower index to the higher one.
    pub fn from_grid_pattern(pattern: &Pattern) -> Self {
        let ordered = pattern.to_vec();
        let slots: HashMap<GridPoint, usize> = ordered
            .iter()
            .enumerate()
            .map(|(index, point)| (*point, index))
            .collect();

        let mut connections = Vec::new();
        for (index, point) in ordered.iter().enumerate() {
            // East and north neighbours cover every adjacent pair exactly once
            for (dx, dy) in [(1, 0), (0, 1)] {
                let Some(neighbor) = point.offset(dx, dy) else {
                    continue;
                };
                if let Some(&other) = slots.get(&neighbor) {
                    connections.push((index.min(other), index.max(other)));
                }
            }
        }
        connections.sort_unstable();

        Self::new(ordered.into_iter().map(Point::from).collect(), connections)
    }

    /// Add `order - 1` rotated copies about the centroid
    ///
    /// Copy `k` is rotated by `k * 360 / order` degrees and carries the
    /// original connections shifted to its own index range.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` is zero
    pub fn with_rotational_copies(&self, order: usize) -> Result<Self> {
        if order == 0 {
            return Err(invalid_parameter("order", &order, &"must be at least 1"));
        }
        let Some(center) = Point::centroid(&self.points) else {
            return Ok(self.clone());
        };

        let base = self.points.len();
        let mut result = self.clone();
        for copy in 1..order {
            let angle = TAU * copy as f64 / order as f64;
            let shift = copy * base;

            result
                .points
                .extend(self.points.iter().map(|p| p.rotate_about(&center, angle)));
            result
                .connections
                .extend(self.connections.iter().map(|&(a, b)| (a + shift, b + shift)));
        }

        Ok(result)
    }
}
