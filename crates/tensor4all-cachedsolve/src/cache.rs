//! Cached linear system
//!
//! This module provides `LinearSystemCache`, a holder for the inputs of a
//! linear system `a * x = b` together with its last computed solution.
//! Replacing either input drops the stored solution in the same call.

use std::borrow::Cow;

use crate::operand::Operand;
use crate::scalar::Scalar;
use crate::util::{nrows, Matrix};

/// Inputs of a linear system plus its memoized solution
///
/// When no right-hand side is set, the system is `a * x = I` and the
/// solution is the inverse of `a`.
#[derive(Debug, Clone)]
pub struct LinearSystemCache<T: Scalar> {
    /// Coefficient matrix (assumed square)
    a: Matrix<T>,
    /// Right-hand side; `None` means identity
    b: Option<Operand<T>>,
    /// Solution for the current `a` and `b`
    solution: Option<Operand<T>>,
    /// Number of mutations of `a` or `b` since construction
    epoch: u64,
}

impl<T: Scalar> LinearSystemCache<T> {
    /// Create a new cache for `a * x = b`, or `a * x = I` if `b` is `None`
    pub fn new(a: Matrix<T>, b: Option<Operand<T>>) -> Self {
        Self {
            a,
            b,
            solution: None,
            epoch: 0,
        }
    }

    /// Create a cache whose solution is the inverse of `a`
    pub fn inverse(a: Matrix<T>) -> Self {
        Self::new(a, None)
    }

    /// Replace the coefficient matrix and drop the cached solution
    pub fn set_coefficients(&mut self, a: Matrix<T>) {
        self.a = a;
        self.invalidate();
    }

    /// Current coefficient matrix
    pub fn coefficients(&self) -> &Matrix<T> {
        &self.a
    }

    /// Replace the right-hand side and drop the cached solution
    ///
    /// `None` switches the system back to matrix inversion.
    pub fn set_rhs(&mut self, b: Option<Operand<T>>) {
        self.b = b;
        self.invalidate();
    }

    /// Right-hand side of the system
    ///
    /// Without an explicit right-hand side this builds a fresh identity
    /// matrix matching the current dimension and scalar type of `a`.
    pub fn rhs(&self) -> Cow<'_, Operand<T>> {
        match &self.b {
            Some(b) => Cow::Borrowed(b),
            None => Cow::Owned(Operand::identity(nrows(&self.a))),
        }
    }

    /// Right-hand side as set by the caller, without identity substitution
    pub fn explicit_rhs(&self) -> Option<&Operand<T>> {
        self.b.as_ref()
    }

    /// Whether the cached solution is the inverse of `a`
    pub fn is_inverse(&self) -> bool {
        self.b.is_none()
    }

    /// Store a solution for the current inputs
    pub fn set_solution(&mut self, solution: Operand<T>) {
        self.solution = Some(solution);
    }

    /// Cached solution, if any
    pub fn solution(&self) -> Option<&Operand<T>> {
        self.solution.as_ref()
    }

    /// Check if a solution is cached
    pub fn is_cached(&self) -> bool {
        self.solution.is_some()
    }

    /// Drop the cached solution and start a new epoch
    pub fn invalidate(&mut self) {
        if self.solution.take().is_some() {
            tracing::trace!(epoch = self.epoch, "dropping cached solution");
        }
        self.epoch += 1;
    }

    /// Number of input changes so far
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Row count of the coefficient matrix
    pub fn dim(&self) -> usize {
        nrows(&self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{eye, from_vec2d};
    use num_complex::Complex64;

    fn sample() -> Matrix<f64> {
        from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
    }

    #[test]
    fn test_new_has_no_solution() {
        let cache = LinearSystemCache::new(sample(), Some(vec![1.0, 1.0].into()));
        assert!(cache.solution().is_none());
        assert!(!cache.is_cached());
        assert!(!cache.is_inverse());
        assert_eq!(cache.epoch(), 0);
        assert_eq!(cache.dim(), 2);
    }

    #[test]
    fn test_rhs_defaults_to_identity() {
        let cache = LinearSystemCache::inverse(sample());
        assert!(cache.is_inverse());
        assert!(cache.explicit_rhs().is_none());
        assert_eq!(*cache.rhs(), Operand::Matrix(eye::<f64>(2)));
        assert!(matches!(cache.rhs(), Cow::Owned(_)));
    }

    #[test]
    fn test_rhs_identity_is_complex_for_complex_coefficients() {
        let a = from_vec2d(vec![
            vec![Complex64::new(1.0, 1.0), Complex64::new(0.0, 0.0)],
            vec![Complex64::new(0.0, 0.0), Complex64::new(2.0, 0.0)],
        ]);
        let cache = LinearSystemCache::inverse(a);
        let rhs = cache.rhs();
        assert_eq!(rhs.get(0, 0), Complex64::new(1.0, 0.0));
        assert_eq!(rhs.get(1, 0), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_rhs_tracks_current_coefficients() {
        let mut cache = LinearSystemCache::inverse(sample());
        cache.set_coefficients(eye::<f64>(3));
        assert_eq!(cache.rhs().nrows(), 3);
    }

    #[test]
    fn test_explicit_rhs_is_borrowed() {
        let cache = LinearSystemCache::new(sample(), Some(vec![1.0, 1.0].into()));
        assert!(matches!(cache.rhs(), Cow::Borrowed(_)));
        assert_eq!(*cache.rhs(), Operand::Vector(vec![1.0, 1.0]));
    }

    #[test]
    fn test_set_coefficients_invalidates() {
        let mut cache = LinearSystemCache::inverse(sample());
        cache.set_solution(Operand::identity(2));
        assert!(cache.is_cached());

        cache.set_coefficients(eye(2));
        assert!(cache.solution().is_none());
        assert_eq!(cache.epoch(), 1);
    }

    #[test]
    fn test_set_rhs_invalidates() {
        let mut cache = LinearSystemCache::inverse(sample());
        cache.set_solution(Operand::identity(2));

        cache.set_rhs(Some(vec![1.0, 0.0].into()));
        assert!(cache.solution().is_none());
        assert!(!cache.is_inverse());

        cache.set_solution(Operand::Vector(vec![0.0, 0.0]));
        cache.set_rhs(None);
        assert!(cache.solution().is_none());
        assert!(cache.is_inverse());
        assert_eq!(cache.epoch(), 2);
    }

    #[test]
    fn test_set_solution_does_not_change_epoch() {
        let mut cache = LinearSystemCache::inverse(sample());
        cache.set_solution(Operand::identity(2));
        cache.set_solution(Operand::identity(2));
        assert_eq!(cache.epoch(), 0);
        assert_eq!(cache.solution(), Some(&Operand::identity(2)));
    }
}
