//! Error types for tensor4all-cachedsolve

use thiserror::Error;

/// Errors reported by the bundled LU solve primitive
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// Coefficient matrix is not square
    #[error("Coefficient matrix must be square, got ({nrows}, {ncols})")]
    NotSquare { nrows: usize, ncols: usize },

    /// Right-hand side row count does not match the coefficient matrix
    #[error("Dimension mismatch: right-hand side has {actual} rows, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// No usable pivot was found at elimination step `step`
    #[error("Singular matrix encountered at elimination step {step}")]
    SingularMatrix { step: usize },

    /// NaN values encountered
    #[error("NaN values encountered in {matrix}")]
    NaNEncountered { matrix: String },

    /// Tolerance must be finite and non-negative
    #[error("Invalid pivot tolerance: {0}. Tolerance must be finite and non-negative.")]
    InvalidTolerance(f64),
}

/// Result type for solve operations
pub type Result<T> = std::result::Result<T, SolveError>;
