//! Mathematical utilities shared by the validator and analyzer

/// Means, variances and per-axis summaries
pub mod statistics;
