//! Depth-first and breadth-first walks over drawn grid cells
//!
//! Both walks follow 4-connectivity through non-zero cells, expanding
//! neighbours north, east, south, west. They reach the same set of cells
//! and differ only in visiting order.

use std::collections::VecDeque;

use bitvec::prelude::{BitVec, bitvec};

use crate::io::configuration::NEIGHBOR_OFFSETS;
use crate::spatial::grid::KolamGrid;
use crate::spatial::point::GridPoint;

impl KolamGrid {
    /// Depth-first walk from `start`
    ///
    /// Visits a neighbour completely before moving to the next one, exactly
    /// like the recursive formulation. Returns an empty walk when `start` is
    /// outside the grid or on a zero cell.
    pub fn traverse_dfs(&self, start: GridPoint) -> Vec<GridPoint> {
        let mut visited = self.visited_mask();
        let mut order = Vec::new();

        if !self.try_visit(start, &mut visited) {
            return order;
        }
        order.push(start);

        // Each frame keeps the index of the next neighbour to expand
        let mut stack = vec![(start, 0_usize)];
        while let Some(frame) = stack.last_mut() {
            let (point, next) = *frame;
            let Some(&(dx, dy)) = NEIGHBOR_OFFSETS.get(next) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if let Some(neighbor) = point.offset(dx, dy) {
                if self.try_visit(neighbor, &mut visited) {
                    order.push(neighbor);
                    stack.push((neighbor, 0));
                }
            }
        }

        order
    }

    /// Breadth-first walk from `start` in FIFO level order
    pub fn traverse_bfs(&self, start: GridPoint) -> Vec<GridPoint> {
        let mut visited = self.visited_mask();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        if self.try_visit(start, &mut visited) {
            queue.push_back(start);
        }

        while let Some(point) = queue.pop_front() {
            order.push(point);

            for (dx, dy) in NEIGHBOR_OFFSETS {
                if let Some(neighbor) = point.offset(dx, dy) {
                    if self.try_visit(neighbor, &mut visited) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        order
    }

    fn visited_mask(&self) -> BitVec {
        bitvec![0; self.cells().len()]
    }

    // Marks the cell and reports true only for unvisited non-zero cells
    fn try_visit(&self, point: GridPoint, visited: &mut BitVec) -> bool {
        if self.cell(point).unwrap_or(0) == 0 {
            return false;
        }

        let slot = point.y as usize * self.width() as usize + point.x as usize;
        if visited.get(slot).is_none_or(|bit| *bit) {
            return false;
        }
        visited.set(slot, true);
        true
    }
}
