//! Error types for grid engine and runner operations

use std::fmt;

/// Main error type for all kolam operations
///
/// Validation findings are not errors: they are accumulated as
/// [`crate::validation::ValidationIssue`] values inside a validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KolamError {
    /// A grid engine call referenced a pattern that was never registered
    PatternNotFound {
        /// Name that failed to resolve
        name: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The tracing subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternNotFound { name } => {
                write!(f, "Pattern '{name}' not found")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Logging { reason } => {
                write!(f, "Failed to initialise logging: {reason}")
            }
        }
    }
}

impl std::error::Error for KolamError {}

/// Convenience type alias for kolam results
pub type Result<T> = std::result::Result<T, KolamError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KolamError {
    KolamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a pattern not found error
pub fn pattern_not_found(name: &str) -> KolamError {
    KolamError::PatternNotFound {
        name: name.to_string(),
    }
}
