//! Error types for eigr

use thiserror::Error;

/// Result type alias using eigr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in eigr operations
///
/// Numerical degeneracies (a zero Danilevskii pivot, an out-of-range cosine in
/// the power method) are not errors; they are reported through the result
/// types. Only malformed input surfaces here.
#[derive(Error, Debug)]
pub enum Error {
    /// Operand dimensions disagree
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Row data does not describe a square matrix
    #[error("Matrix is not square: row {row} has {len} entries, expected {rows}")]
    NotSquare {
        /// Number of rows (and therefore the required row length)
        rows: usize,
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        len: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Malformed matrix text
    #[error("Parse error: {reason}")]
    Parse {
        /// What went wrong
        reason: String,
    },

    /// Underlying reader/writer failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}
