//! Linear-solve primitive
//!
//! [`LinearSolve`] is the seam between the caching layer and the numerics.
//! [`LuSolver`] is the bundled implementation: Gaussian elimination with
//! partial pivoting, solving every column of the right-hand side at once.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, SolveError};
use crate::operand::Operand;
use crate::scalar::Scalar;
use crate::util::{max_abs, ncols, nrows, zeros, Matrix};

/// A linear-solve primitive: computes `x` with `a * x = rhs`.
///
/// `Options` tune the numerics (tolerance, method, ...). They are handed to
/// the primitive untouched by the caching layer and carry no right-hand side.
pub trait LinearSolve<T: Scalar> {
    /// Tuning knobs understood by this primitive
    type Options;
    /// Failure reported when `a` is singular or dimensions are incompatible
    type Error;

    /// Solve `a * x = rhs`. The solution has the shape of `rhs`.
    fn solve(
        &self,
        a: &Matrix<T>,
        rhs: &Operand<T>,
        options: &Self::Options,
    ) -> std::result::Result<Operand<T>, Self::Error>;
}

/// Options for the bundled LU primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LuOptions {
    /// Relative pivot tolerance. A pivot with |p| <= pivot_tol * max|a_ij|
    /// marks the matrix as singular.
    /// If `None`, uses the global default.
    pub pivot_tol: Option<f64>,
}

impl LuOptions {
    /// Create options with the specified pivot tolerance.
    pub fn with_pivot_tol(pivot_tol: f64) -> Self {
        Self {
            pivot_tol: Some(pivot_tol),
        }
    }

    /// Pivot tolerance in effect, falling back to the global default.
    pub fn effective_pivot_tol(&self) -> f64 {
        self.pivot_tol.unwrap_or_else(default_pivot_tol)
    }
}

// Global default pivot tolerance stored as AtomicU64 (f64::to_bits())
static DEFAULT_PIVOT_TOL: AtomicU64 = AtomicU64::new(1e-12_f64.to_bits());

/// Get the global default relative pivot tolerance.
///
/// The default value is 1e-12.
pub fn default_pivot_tol() -> f64 {
    f64::from_bits(DEFAULT_PIVOT_TOL.load(Ordering::Relaxed))
}

/// Set the global default relative pivot tolerance.
///
/// # Errors
/// Returns `SolveError::InvalidTolerance` if `tol` is not finite or is negative.
pub fn set_default_pivot_tol(tol: f64) -> Result<()> {
    if !tol.is_finite() || tol < 0.0 {
        return Err(SolveError::InvalidTolerance(tol));
    }
    DEFAULT_PIVOT_TOL.store(tol.to_bits(), Ordering::Relaxed);
    Ok(())
}

/// Gaussian elimination with partial pivoting
#[derive(Debug, Clone, Copy, Default)]
pub struct LuSolver;

impl<T: Scalar> LinearSolve<T> for LuSolver {
    type Options = LuOptions;
    type Error = SolveError;

    fn solve(&self, a: &Matrix<T>, rhs: &Operand<T>, options: &LuOptions) -> Result<Operand<T>> {
        let tol = options.effective_pivot_tol();
        if !tol.is_finite() || tol < 0.0 {
            return Err(SolveError::InvalidTolerance(tol));
        }
        if !a.is_square() {
            return Err(SolveError::NotSquare {
                nrows: nrows(a),
                ncols: ncols(a),
            });
        }
        if rhs.nrows() != nrows(a) {
            return Err(SolveError::DimensionMismatch {
                expected: nrows(a),
                actual: rhs.nrows(),
            });
        }
        if a.has_nan() {
            return Err(SolveError::NaNEncountered {
                matrix: "coefficients".to_string(),
            });
        }
        if rhs.has_nan() {
            return Err(SolveError::NaNEncountered {
                matrix: "right-hand side".to_string(),
            });
        }

        match rhs {
            Operand::Vector(v) => {
                let mut b = zeros(v.len(), 1);
                for (i, &x) in v.iter().enumerate() {
                    b[[i, 0]] = x;
                }
                let x = solve_linear_system(a, &b, tol)?;
                Ok(Operand::Vector((0..nrows(&x)).map(|i| x[[i, 0]]).collect()))
            }
            Operand::Matrix(b) => Ok(Operand::Matrix(solve_linear_system(a, b, tol)?)),
        }
    }
}

/// Solve AX = B using Gaussian elimination with partial pivoting
///
/// `a` is square with `nrows(b) == nrows(a)` and free of NaN.
fn solve_linear_system<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, tol: f64) -> Result<Matrix<T>> {
    let n = nrows(a);
    let m = ncols(b);
    if n == 0 {
        return Ok(zeros(0, m));
    }

    let scale = max_abs(a);
    if scale == 0.0 {
        return Err(SolveError::SingularMatrix { step: 0 });
    }
    let threshold = tol * scale;

    // Augmented matrix [A | B]
    let mut aug: Vec<Vec<T>> = (0..n)
        .map(|i| {
            let mut row = Vec::with_capacity(n + m);
            row.extend((0..n).map(|j| a[[i, j]]));
            row.extend((0..m).map(|j| b[[i, j]]));
            row
        })
        .collect();

    // Forward elimination
    for k in 0..n {
        let mut max_idx = k;
        // Magnitudes, not squares: |x|^2 under/overflows far inside f64 range
        let mut max_val: f64 = aug[k][k].abs_val();
        for (i, row) in aug.iter().enumerate().skip(k + 1) {
            let val = row[k].abs_val();
            if val > max_val {
                max_val = val;
                max_idx = i;
            }
        }

        if max_val <= threshold {
            return Err(SolveError::SingularMatrix { step: k });
        }

        if max_idx != k {
            aug.swap(k, max_idx);
        }

        let (upper, lower) = aug.split_at_mut(k + 1);
        let pivot_row = &upper[k];
        let pivot = pivot_row[k];
        for row in lower.iter_mut() {
            let factor = row[k] / pivot;
            for j in k..(n + m) {
                row[j] = row[j] - factor * pivot_row[j];
            }
        }
    }

    // Back substitution
    let mut x: Matrix<T> = zeros(n, m);
    for i in (0..n).rev() {
        for j in 0..m {
            let mut sum = aug[i][n + j];
            for k in (i + 1)..n {
                sum = sum - aug[i][k] * x[[k, j]];
            }
            x[[i, j]] = sum / aug[i][i];
        }
    }

    Ok(x)
}
