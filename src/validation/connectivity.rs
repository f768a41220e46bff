//! Undirected adjacency built from connection lists

use std::collections::VecDeque;

use bitvec::prelude::{BitVec, bitvec};

use crate::generation::geometric::Connection;
use crate::validation::result::DegreeStats;

/// Undirected adjacency list over point indices
///
/// Connections with an endpoint outside `0..point_count` are ignored. A
/// self-loop contributes two entries to its point, like any other edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Build adjacency for `point_count` points
    pub fn from_connections(point_count: usize, connections: &[Connection]) -> Self {
        let mut neighbors = vec![Vec::new(); point_count];

        for &(a, b) in connections {
            if a >= point_count || b >= point_count {
                continue;
            }
            if let Some(list) = neighbors.get_mut(a) {
                list.push(b);
            }
            if let Some(list) = neighbors.get_mut(b) {
                list.push(a);
            }
        }

        Self { neighbors }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether there are no points
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbours of `point`, empty for unknown points
    pub fn neighbors(&self, point: usize) -> &[usize] {
        self.neighbors.get(point).map(Vec::as_slice).unwrap_or_default()
    }

    /// Degree of every point
    pub fn degrees(&self) -> Vec<usize> {
        self.neighbors.iter().map(Vec::len).collect()
    }

    /// Points with no neighbours
    pub fn isolated_points(&self) -> Vec<usize> {
        self.neighbors
            .iter()
            .enumerate()
            .filter(|(_, list)| list.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Mask of points reachable from `start` by breadth-first search
    pub fn reachable_from(&self, start: usize) -> BitVec {
        let mut visited = bitvec![0; self.neighbors.len()];
        if start >= self.neighbors.len() {
            return visited;
        }

        visited.set(start, true);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for &next in self.neighbors(node) {
                if visited.get(next).is_some_and(|bit| !*bit) {
                    visited.set(next, true);
                    queue.push_back(next);
                }
            }
        }

        visited
    }

    /// Whether every point is reachable from point 0; true for no points
    pub fn is_connected(&self) -> bool {
        self.neighbors.is_empty() || self.reachable_from(0).all()
    }

    /// Smallest, largest and mean degree; all zero for no points
    pub fn degree_stats(&self) -> DegreeStats {
        let degrees = self.degrees();
        if degrees.is_empty() {
            return DegreeStats {
                min: 0,
                max: 0,
                mean: 0.0,
            };
        }

        DegreeStats {
            min: degrees.iter().copied().min().unwrap_or(0),
            max: degrees.iter().copied().max().unwrap_or(0),
            mean: degrees.iter().sum::<usize>() as f64 / degrees.len() as f64,
        }
    }
}
