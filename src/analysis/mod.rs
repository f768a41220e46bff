//! Feature extraction and complexity scoring layered on the validator's data

/// Composite complexity score
pub mod complexity;
/// Per-axis statistics and counts
pub mod features;

pub use complexity::calculate_pattern_complexity;
pub use features::{PatternFeatures, extract_pattern_features};
