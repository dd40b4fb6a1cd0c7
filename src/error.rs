//! Error types for optiwrap.

/// Result type alias for optiwrap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected wrapping configuration.
///
/// Only the validating entry points return these. The plain wrapping
/// functions degrade to a deterministic fallback instead.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// Target width is zero, negative, NaN or infinite.
    #[error("invalid max width: {0} (must be finite and greater than zero)")]
    InvalidMaxWidth(f64),
    /// Tolerance is negative or NaN.
    #[error("invalid tolerance: {0} (must be non-negative)")]
    InvalidTolerance(f64),
    /// A penalty is NaN or infinite.
    #[error("invalid {name}: {value} (must be finite)")]
    InvalidPenalty { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidMaxWidth(0.0);
        assert!(err.to_string().contains("invalid max width: 0"));

        let err = Error::InvalidTolerance(-0.5);
        assert!(err.to_string().contains("-0.5"));

        let err = Error::InvalidPenalty {
            name: "line_penalty",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "invalid line_penalty: NaN (must be finite)");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&Error::InvalidTolerance(-1.0));
    }
}
