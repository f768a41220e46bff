//! Tests for error construction and messages

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::io::error::{invalid_parameter, pattern_not_found};
    use std::error::Error;

    // Tests invalid parameter errors keep their fields and message
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_parameter() {
        let error = invalid_parameter("size", &0, &"must be positive");

        assert_eq!(
            error,
            KolamError::InvalidParameter {
                parameter: "size",
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'size' = '0': must be positive"
        );
        assert!(error.source().is_none());
    }

    // Tests missing pattern errors name the pattern
    // Verified by formatting without quotes
    #[test]
    fn test_pattern_not_found() {
        let error = pattern_not_found("border");

        assert_eq!(error.to_string(), "Pattern 'border' not found");
    }

    // Tests logging errors carry their reason
    // Verified by discarding the reason
    #[test]
    fn test_logging_error() {
        let error = KolamError::Logging {
            reason: "already set".to_string(),
        };

        assert!(error.to_string().ends_with("already set"));
    }
}
