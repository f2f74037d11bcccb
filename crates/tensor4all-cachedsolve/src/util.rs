//! Dense matrix storage and helpers

use num_traits::{One, Zero};
use std::ops::{Index, IndexMut};

use crate::scalar::Scalar;

/// Simple row-major 2D matrix backed by Vec
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Clone> Matrix<T> {
    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Row-major view of the entries
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Create a zeros matrix
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }
}

impl<T> Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: [usize; 2]) -> &Self::Output {
        &self.data[idx[0] * self.ncols + idx[1]]
    }
}

impl<T> IndexMut<[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, idx: [usize; 2]) -> &mut Self::Output {
        &mut self.data[idx[0] * self.ncols + idx[1]]
    }
}

/// Create a zeros matrix with given dimensions
pub fn zeros<T: Clone + Zero>(nrows: usize, ncols: usize) -> Matrix<T> {
    Matrix::zeros(nrows, ncols)
}

/// Create an `n x n` identity matrix in the scalar domain `T`
///
/// For complex `T` the diagonal holds `1 + 0i`.
pub fn eye<T: Clone + Zero + One>(n: usize) -> Matrix<T> {
    let mut m = zeros(n, n);
    for i in 0..n {
        m[[i, i]] = T::one();
    }
    m
}

/// Create a matrix from a 2D vector (row-major)
pub fn from_vec2d<T: Clone + Zero>(data: Vec<Vec<T>>) -> Matrix<T> {
    let nrows = data.len();
    let ncols = if nrows > 0 { data[0].len() } else { 0 };
    let mut m = zeros(nrows, ncols);
    for (i, row) in data.into_iter().enumerate() {
        for (j, v) in row.into_iter().enumerate().take(ncols) {
            m[[i, j]] = v;
        }
    }
    m
}

/// Get number of rows
pub fn nrows<T>(m: &Matrix<T>) -> usize {
    m.nrows
}

/// Get number of columns
pub fn ncols<T>(m: &Matrix<T>) -> usize {
    m.ncols
}

/// Matrix multiplication: A * B
pub fn mat_mul<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let m = nrows(a);
    let k = ncols(a);
    let n = ncols(b);
    assert_eq!(nrows(b), k);

    let mut result = zeros(m, n);
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum = sum + a[[i, l]] * b[[l, j]];
            }
            result[[i, j]] = sum;
        }
    }
    result
}

/// Matrix-vector product: A * x
pub fn mat_vec<T: Scalar>(a: &Matrix<T>, x: &[T]) -> Vec<T> {
    assert_eq!(ncols(a), x.len());
    (0..nrows(a))
        .map(|i| {
            x.iter()
                .enumerate()
                .fold(T::zero(), |acc, (j, &xj)| acc + a[[i, j]] * xj)
        })
        .collect()
}

impl<T: Scalar> Matrix<T> {
    /// Whether any entry is NaN
    pub fn has_nan(&self) -> bool {
        self.data.iter().any(|x| x.is_nan())
    }
}

/// Largest absolute entry of the matrix (0 for an empty matrix)
pub fn max_abs<T: Scalar>(m: &Matrix<T>) -> f64 {
    m.data.iter().map(|v| v.abs_val()).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_matrix_basic() {
        let mut m = zeros::<f64>(3, 3);
        m[[0, 0]] = 1.0;
        m[[1, 1]] = 2.0;
        m[[2, 2]] = 3.0;

        assert_eq!(m[[0, 0]], 1.0);
        assert_eq!(m[[1, 1]], 2.0);
        assert_eq!(m[[2, 2]], 3.0);
        assert!(m.is_square());
    }

    #[test]
    fn test_eye_complex() {
        let id = eye::<Complex64>(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                };
                assert_eq!(id[[i, j]], expected);
            }
        }
    }

    #[test]
    fn test_from_vec2d_rectangular() {
        let m = from_vec2d(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);

        assert_eq!(nrows(&m), 2);
        assert_eq!(ncols(&m), 3);
        assert_eq!(m[[1, 0]], 4.0);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(!m.is_square());
    }

    #[test]
    fn test_mat_mul_and_mat_vec() {
        let a = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = from_vec2d(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = mat_mul(&a, &b);

        assert_eq!(c[[0, 0]], 19.0);
        assert_eq!(c[[0, 1]], 22.0);
        assert_eq!(c[[1, 0]], 43.0);
        assert_eq!(c[[1, 1]], 50.0);

        assert_eq!(mat_vec(&a, &[1.0, 1.0]), vec![3.0, 7.0]);
    }

    #[test]
    fn test_max_abs() {
        let a = from_vec2d(vec![vec![1.0, -7.5], vec![3.0, 4.0]]);
        assert_eq!(max_abs(&a), 7.5);
        assert_eq!(max_abs(&zeros::<f64>(0, 0)), 0.0);
    }
}
