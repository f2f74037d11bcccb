//! Memoized linear solves
//!
//! This crate keeps the inputs of a dense linear system `a * x = b` next to
//! its solution so repeated requests are answered without solving again:
//! - `LinearSystemCache`: coefficients, optional right-hand side, cached solution
//! - `CachedSolver`: computes on a miss, returns the stored solution on a hit
//! - `LinearSolve`: the primitive the solver delegates to (`LuSolver` bundled)
//!
//! Leaving the right-hand side unset solves `a * x = I`, i.e. inverts `a`.
//!
//! # Example
//!
//! ```
//! use tensor4all_cachedsolve::{from_vec2d, solve, LinearSystemCache, LuOptions, Operand};
//!
//! let a = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
//! let mut cache = LinearSystemCache::inverse(a);
//!
//! // First call computes, second is served from the cache
//! let inv = solve(&mut cache, &LuOptions::default()).unwrap();
//! let again = solve(&mut cache, &LuOptions::default()).unwrap();
//! assert_eq!(inv, again);
//!
//! // Changing an input drops the cached inverse
//! cache.set_rhs(Some(Operand::Vector(vec![1.0, 1.0])));
//! assert!(cache.solution().is_none());
//! ```

pub mod cache;
pub mod error;
pub mod lu;
pub mod operand;
pub mod scalar;
pub mod solver;
pub mod util;

// Re-export main types
pub use cache::LinearSystemCache;
pub use error::{Result, SolveError};
pub use lu::{default_pivot_tol, set_default_pivot_tol, LinearSolve, LuOptions, LuSolver};
pub use num_complex::{Complex32, Complex64};
pub use operand::{apply, residual_norm, Operand};
pub use scalar::Scalar;
pub use solver::{invert, solve, CachedSolver};
pub use util::{eye, from_vec2d, zeros, Matrix};

#[doc(hidden)]
pub use paste::paste as __paste;
