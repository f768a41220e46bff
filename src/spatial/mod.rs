//! Spatial data structures and the grid engine
//!
//! This module contains spatial-related functionality including:
//! - Floating and integer point types
//! - Tolerance-aware point lookup
//! - Named pattern storage on a bounded grid
//! - Grid traversal and symmetry transforms

/// Bounded grid and pattern registry
pub mod grid;
/// Tolerance-aware spatial lookup
pub mod lookup;
/// Deduplicated point sets
pub mod pattern;
/// Point value types
pub mod point;
/// Symmetry and affine pattern transforms
pub mod transforms;
/// Depth-first and breadth-first cell walks
pub mod traversal;

pub use grid::KolamGrid;
pub use pattern::{Pattern, PatternBounds};
pub use point::{GridPoint, Point};
pub use transforms::SymmetryOperation;
