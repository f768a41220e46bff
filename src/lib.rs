//! Symmetric dot-grid kolam generation, validation and symmetry detection
//!
//! A bounded grid engine holds named point sets and applies accumulating
//! symmetry transforms to them. The validator checks point and connection
//! graphs for structural and geometric problems, classifies their dominant
//! symmetry under a tolerance, and the analyzer derives summary features.

#![forbid(unsafe_code)]

/// Complexity scoring and feature extraction
pub mod analysis;
/// Concentric, motif and floating-point pattern generators
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Descriptive statistics used by the validator and analyzer
pub mod math;
/// Point types, tolerance-aware lookup and the grid engine
pub mod spatial;
/// Pattern validation and symmetry classification
pub mod validation;

pub use io::error::{KolamError, Result};
