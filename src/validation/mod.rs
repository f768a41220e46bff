//! Pattern validation, symmetry classification and alignment checks
//!
//! The validator accumulates findings rather than failing fast: a single
//! run reports every error and warning it can find together with whatever
//! metadata the completed checks produced.

/// Dot alignment and line continuity reports
pub mod alignment;
/// Adjacency and reachability over connection lists
pub mod connectivity;
/// Findings, metadata and classification types
pub mod result;
/// Bilateral and rotational symmetry classification
pub mod symmetry;
/// The validation pipeline
pub mod validator;

pub use alignment::{AlignmentReport, ContinuityReport};
pub use result::{PatternKind, SymmetryType, ValidationIssue, ValidationResult};
pub use symmetry::SymmetryReport;
pub use validator::PatternValidator;
