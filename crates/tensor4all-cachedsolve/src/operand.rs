//! Right-hand sides and solutions
//!
//! A linear system `a * x = b` may have a single right-hand side (a vector)
//! or several stacked as columns (a matrix). The solution has the same shape
//! as the right-hand side it was computed for.

use crate::scalar::Scalar;
use crate::util::{eye, mat_mul, mat_vec, Matrix};

/// A vector or matrix operand of a linear system
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<T> {
    /// Single column
    Vector(Vec<T>),
    /// One column per right-hand side
    Matrix(Matrix<T>),
}

impl<T: Scalar> Operand<T> {
    /// Identity matrix of dimension `n` in the scalar domain `T`
    pub fn identity(n: usize) -> Self {
        Operand::Matrix(eye(n))
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        match self {
            Operand::Vector(v) => v.len(),
            Operand::Matrix(m) => m.nrows(),
        }
    }

    /// Number of columns (1 for a vector)
    pub fn ncols(&self) -> usize {
        match self {
            Operand::Vector(_) => 1,
            Operand::Matrix(m) => m.ncols(),
        }
    }

    /// Borrow as a vector, if this is one
    pub fn as_vector(&self) -> Option<&[T]> {
        match self {
            Operand::Vector(v) => Some(v),
            Operand::Matrix(_) => None,
        }
    }

    /// Borrow as a matrix, if this is one
    pub fn as_matrix(&self) -> Option<&Matrix<T>> {
        match self {
            Operand::Vector(_) => None,
            Operand::Matrix(m) => Some(m),
        }
    }

    /// Convert into a matrix; a vector becomes a single column
    pub fn into_matrix(self) -> Matrix<T> {
        match self {
            Operand::Vector(v) => {
                let mut m = Matrix::zeros(v.len(), 1);
                for (i, x) in v.into_iter().enumerate() {
                    m[[i, 0]] = x;
                }
                m
            }
            Operand::Matrix(m) => m,
        }
    }

    /// Entry at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> T {
        match self {
            Operand::Vector(v) => v[i],
            Operand::Matrix(m) => m[[i, j]],
        }
    }

    /// Whether any entry is NaN
    pub fn has_nan(&self) -> bool {
        match self {
            Operand::Vector(v) => v.iter().any(|x| x.is_nan()),
            Operand::Matrix(m) => m.has_nan(),
        }
    }

    /// Largest absolute entrywise difference, or `None` if the shapes differ
    pub fn max_abs_diff(&self, other: &Operand<T>) -> Option<f64> {
        let same_shape = match (self, other) {
            (Operand::Vector(a), Operand::Vector(b)) => a.len() == b.len(),
            (Operand::Matrix(a), Operand::Matrix(b)) => {
                a.nrows() == b.nrows() && a.ncols() == b.ncols()
            }
            _ => false,
        };
        if !same_shape {
            return None;
        }

        let mut max = 0.0_f64;
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                max = max.max((self.get(i, j) - other.get(i, j)).abs_val());
            }
        }
        Some(max)
    }
}

impl<T> From<Vec<T>> for Operand<T> {
    fn from(v: Vec<T>) -> Self {
        Operand::Vector(v)
    }
}

impl<T> From<Matrix<T>> for Operand<T> {
    fn from(m: Matrix<T>) -> Self {
        Operand::Matrix(m)
    }
}

/// Product `a * x`, keeping the shape of `x`
pub fn apply<T: Scalar>(a: &Matrix<T>, x: &Operand<T>) -> Operand<T> {
    match x {
        Operand::Vector(v) => Operand::Vector(mat_vec(a, v)),
        Operand::Matrix(m) => Operand::Matrix(mat_mul(a, m)),
    }
}

/// Max-abs residual `|a * x - b|`, or `None` if `a * x` and `b` differ in shape
pub fn residual_norm<T: Scalar>(a: &Matrix<T>, x: &Operand<T>, b: &Operand<T>) -> Option<f64> {
    if a.ncols() != x.nrows() {
        return None;
    }
    apply(a, x).max_abs_diff(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::from_vec2d;
    use num_complex::Complex64;

    #[test]
    fn test_identity_shape() {
        let id: Operand<Complex64> = Operand::identity(2);
        assert_eq!(id.nrows(), 2);
        assert_eq!(id.ncols(), 2);
        assert_eq!(id.get(1, 1), Complex64::new(1.0, 0.0));
        assert_eq!(id.get(0, 1), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_vector_accessors() {
        let v: Operand<f64> = vec![1.0, 2.0, 3.0].into();
        assert_eq!(v.nrows(), 3);
        assert_eq!(v.ncols(), 1);
        assert_eq!(v.as_vector(), Some(&[1.0, 2.0, 3.0][..]));
        assert!(v.as_matrix().is_none());
    }

    #[test]
    fn test_into_matrix() {
        let v: Operand<f64> = vec![1.0, 2.0].into();
        assert_eq!(v.into_matrix(), from_vec2d(vec![vec![1.0], vec![2.0]]));
    }

    #[test]
    fn test_max_abs_diff_shape_mismatch() {
        let v: Operand<f64> = vec![1.0, 2.0].into();
        let m: Operand<f64> = from_vec2d(vec![vec![1.0], vec![2.0]]).into();
        assert_eq!(v.max_abs_diff(&m), None);
        assert_eq!(v.max_abs_diff(&vec![1.0, 2.5].into()), Some(0.5));
    }

    #[test]
    fn test_residual_norm() {
        let a = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let x: Operand<f64> = vec![-1.0, 1.0].into();
        let b: Operand<f64> = vec![1.0, 1.0].into();
        assert_eq!(residual_norm(&a, &x, &b), Some(0.0));

        let wrong: Operand<f64> = vec![1.0, 2.0, 3.0].into();
        assert_eq!(residual_norm(&a, &wrong, &b), None);
    }

    #[test]
    fn test_has_nan() {
        let v: Operand<f64> = vec![1.0, f64::NAN].into();
        assert!(v.has_nan());
        assert!(!Operand::<f64>::identity(3).has_nan());
    }
}
