//! Memoized solve on top of a [`LinearSolve`] primitive

use crate::cache::LinearSystemCache;
use crate::error::Result;
use crate::lu::{LinearSolve, LuOptions, LuSolver};
use crate::operand::Operand;
use crate::scalar::Scalar;
use crate::util::Matrix;

/// Serves solutions out of a [`LinearSystemCache`], computing them on demand.
///
/// The solver keeps no per-system state: everything it reads or writes goes
/// through the cache it is handed. The right-hand side always comes from the
/// cache, so the `options` of a call can never redirect the solve to a
/// different system than the one the cached solution is stored under.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachedSolver<S = LuSolver> {
    primitive: S,
}

impl<S> CachedSolver<S> {
    /// Create a cached solver delegating to `primitive`
    pub fn new(primitive: S) -> Self {
        Self { primitive }
    }

    /// The underlying solve primitive
    pub fn primitive(&self) -> &S {
        &self.primitive
    }

    /// Return the solution of the system held by `cache`.
    ///
    /// On a cache hit the stored solution is returned and a `cache hit`
    /// event is emitted at INFO level. Otherwise the primitive is called
    /// with the cached coefficients, the cached right-hand side (identity
    /// when unset) and `options` as given; the result is stored before
    /// being returned.
    ///
    /// # Errors
    /// Any error from the primitive is returned unchanged and the cache is
    /// left without a solution.
    pub fn solve<T>(
        &self,
        cache: &mut LinearSystemCache<T>,
        options: &<S as LinearSolve<T>>::Options,
    ) -> std::result::Result<Operand<T>, <S as LinearSolve<T>>::Error>
    where
        T: Scalar,
        S: LinearSolve<T>,
    {
        if let Some(solution) = cache.solution() {
            tracing::info!(
                dim = cache.dim(),
                inverse = cache.is_inverse(),
                epoch = cache.epoch(),
                "cache hit: returning stored solution"
            );
            return Ok(solution.clone());
        }

        let solution = {
            let data = cache.coefficients();
            let rhs = cache.rhs();
            tracing::debug!(
                dim = data.nrows(),
                nrhs = rhs.ncols(),
                complex = T::is_complex(),
                inverse = cache.is_inverse(),
                "solving linear system"
            );
            self.primitive.solve(data, &rhs, options)?
        };

        cache.set_solution(solution.clone());
        Ok(solution)
    }
}

/// Solve the system held by `cache` with the bundled LU primitive
pub fn solve<T: Scalar>(cache: &mut LinearSystemCache<T>, options: &LuOptions) -> Result<Operand<T>> {
    CachedSolver::<LuSolver>::default().solve(cache, options)
}

/// Inverse of `a` through a fresh cache, with default LU options
///
/// Returns the cache so later calls can reuse the inverse.
pub fn invert<T: Scalar>(a: Matrix<T>) -> Result<(Matrix<T>, LinearSystemCache<T>)> {
    let mut cache = LinearSystemCache::inverse(a);
    let inverse = solve(&mut cache, &LuOptions::default())?.into_matrix();
    Ok((inverse, cache))
}
