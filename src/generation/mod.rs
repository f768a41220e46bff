//! Pattern generators feeding the grid engine and the validator

/// Concentric square and circle outlines
pub mod concentric;
/// Floating-point layouts with explicit connections
pub mod geometric;
/// Square-board dot motifs
pub mod motifs;

pub use geometric::{Connection, PointPattern};
pub use motifs::Motif;
