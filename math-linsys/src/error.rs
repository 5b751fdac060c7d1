//! Error types for building linear systems.
//!
//! Numerical outcomes (singular matrix, collapsed pivot, failed inversion) are
//! never errors: they come back as a [`SolutionResult`](crate::SolutionResult)
//! without a solution. The errors here only cover constructing a well-shaped
//! system from user input, files or the command line.

use thiserror::Error;

/// Errors that can occur while constructing a linear system.
#[derive(Debug, Error)]
pub enum LinsysError {
    /// The system has no equations.
    #[error("system is empty: at least one equation is required")]
    EmptySystem,

    /// The coefficient matrix is not square.
    #[error("coefficient matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The constants vector does not match the matrix dimension.
    #[error("constants dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length (matrix dimension)
        expected: usize,
        /// Actual length provided
        got: usize,
    },

    /// A row of the coefficient matrix has the wrong length.
    #[error("row {row} has {got} coefficients, expected {expected}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Expected number of coefficients
        expected: usize,
        /// Actual number of coefficients
        got: usize,
    },

    /// A coefficient is NaN or infinite.
    #[error("coefficient at ({row}, {col}) is not a finite number")]
    NonFinite {
        /// Row index
        row: usize,
        /// Column index (the constants column is `n`)
        col: usize,
    },

    /// Inline textual input could not be parsed.
    #[error("cannot parse '{input}': {reason}")]
    Parse {
        /// The offending input fragment
        input: String,
        /// What went wrong
        reason: String,
    },

    /// Reading or writing a system file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A system file is not valid JSON for a system description.
    #[error("invalid system file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for system construction.
pub type Result<T> = std::result::Result<T, LinsysError>;

impl LinsysError {
    /// Returns `true` if the input had an inconsistent shape.
    ///
    /// This includes `EmptySystem`, `NotSquare`, `DimensionMismatch` and `RaggedRow`.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            LinsysError::EmptySystem
                | LinsysError::NotSquare { .. }
                | LinsysError::DimensionMismatch { .. }
                | LinsysError::RaggedRow { .. }
        )
    }

    /// Returns `true` if the input values themselves were unusable.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LinsysError::NonFinite { .. } | LinsysError::Parse { .. } | LinsysError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinsysError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(
            err.to_string(),
            "coefficient matrix is not square: 2 rows, 3 columns"
        );

        let err = LinsysError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "constants dimension mismatch: expected 3, got 2"
        );
    }

    #[test]
    fn test_is_shape_error() {
        let shape_err = LinsysError::RaggedRow {
            row: 1,
            expected: 3,
            got: 2,
        };
        let input_err = LinsysError::NonFinite { row: 0, col: 0 };

        assert!(shape_err.is_shape_error());
        assert!(LinsysError::EmptySystem.is_shape_error());
        assert!(!input_err.is_shape_error());
    }

    #[test]
    fn test_is_input_error() {
        let parse_err = LinsysError::Parse {
            input: "1,x".to_string(),
            reason: "invalid float literal".to_string(),
        };
        let shape_err = LinsysError::NotSquare { rows: 1, cols: 2 };

        assert!(parse_err.is_input_error());
        assert!(!shape_err.is_input_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LinsysError = io.into();
        assert!(matches!(err, LinsysError::Io(_)));
        assert!(!err.is_shape_error());
        assert!(!err.is_input_error());
    }
}
