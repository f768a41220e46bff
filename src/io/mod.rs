//! Input/output operations, configuration and error handling

/// Command-line interface and design runner
pub mod cli;
/// Constants and validator configuration
pub mod configuration;
/// Error types for grid engine and runner operations
pub mod error;
/// Bounded log of generated designs
pub mod history;
/// Tracing subscriber setup
pub mod logging;
/// Sweep progress display
pub mod progress;
/// Text rendering of reports and grids
pub mod report;
