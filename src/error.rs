//! Error types for the marks-trends library.

use thiserror::Error;

/// Result type alias for marks-trends operations.
pub type Result<T> = std::result::Result<T, TrendError>;

/// Errors that can occur while ingesting or transforming a marks series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendError {
    /// A required column is missing or a cell could not be parsed.
    #[error("schema error: {0}")]
    Schema(String),

    /// The smoothing window is too small for the polynomial order.
    #[error("invalid smoothing window {window} for polynomial order {poly_order}: series too short")]
    InvalidWindow { window: usize, poly_order: usize },

    /// No input rows, or no rows for the selected student.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Parallel columns disagree in length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Numerical failure during a transform.
    #[error("computation error: {0}")]
    Computation(String),

    /// Failure in the underlying CSV layer.
    #[error("csv error: {0}")]
    Csv(String),
}

impl From<csv::Error> for TrendError {
    fn from(err: csv::Error) -> Self {
        TrendError::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = TrendError::Schema("missing required column 'Marks'".to_string());
        assert_eq!(
            err.to_string(),
            "schema error: missing required column 'Marks'"
        );

        let err = TrendError::InvalidWindow {
            window: 3,
            poly_order: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid smoothing window 3 for polynomial order 3: series too short"
        );

        let err = TrendError::EmptyInput("no rows for student 'S042'".to_string());
        assert_eq!(err.to_string(), "empty input: no rows for student 'S042'");

        let err = TrendError::InsufficientData { needed: 5, got: 2 };
        assert_eq!(err.to_string(), "insufficient data: need at least 5, got 2");
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = TrendError::EmptyInput("no rows".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
