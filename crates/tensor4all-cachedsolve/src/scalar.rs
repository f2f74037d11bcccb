//! Scalar domain for cached linear solves.
//!
//! The numeric domain of a system (real or complex, single or double
//! precision) is a compile-time type parameter. Identity construction and
//! pivot selection only need the operations listed here.
//!
//! Pivots are compared by [`Scalar::abs_val`], never by [`Scalar::abs_sq`]:
//! the square leaves the f64 range for magnitudes below about 1e-154 or
//! above about 1e154. [`Scalar::is_complex`] lets generic code tell the two
//! domains apart at runtime; [`crate::CachedSolver`] records it on the
//! `solving linear system` event so a trace shows which identity (`1` or
//! `1 + 0i`) an inversion was run against.

use num_complex::{Complex32, Complex64};
use num_traits::{Float, One, Zero};

/// Scalar types accepted by [`crate::LinearSystemCache`] and the LU primitive.
pub trait Scalar:
    Clone
    + Copy
    + Zero
    + One
    + PartialEq
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Square of the absolute value (for complex numbers, |z|^2).
    fn abs_sq(self) -> f64;

    /// Absolute value as f64. Implementations must not go through
    /// `abs_sq`, which under/overflows long before the value does.
    fn abs_val(self) -> f64 {
        self.abs_sq().sqrt()
    }

    /// Create from f64 value.
    fn from_f64(val: f64) -> Self;

    /// Check if value is NaN.
    fn is_nan(self) -> bool;

    /// Whether the domain carries an imaginary part.
    ///
    /// `false` for `f32`/`f64`, `true` for `Complex32`/`Complex64`.
    fn is_complex() -> bool {
        false
    }
}

impl Scalar for f64 {
    #[inline]
    fn abs_sq(self) -> f64 {
        self * self
    }

    #[inline]
    fn abs_val(self) -> f64 {
        Float::abs(self)
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        val
    }

    #[inline]
    fn is_nan(self) -> bool {
        Float::is_nan(self)
    }
}

impl Scalar for f32 {
    #[inline]
    fn abs_sq(self) -> f64 {
        (self * self) as f64
    }

    #[inline]
    fn abs_val(self) -> f64 {
        Float::abs(self) as f64
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        val as f32
    }

    #[inline]
    fn is_nan(self) -> bool {
        Float::is_nan(self)
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn abs_sq(self) -> f64 {
        self.norm_sqr()
    }

    #[inline]
    fn abs_val(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        Complex64::new(val, 0.0)
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    fn is_complex() -> bool {
        true
    }
}

impl Scalar for Complex32 {
    #[inline]
    fn abs_sq(self) -> f64 {
        self.norm_sqr() as f64
    }

    #[inline]
    fn abs_val(self) -> f64 {
        self.norm() as f64
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        Complex32::new(val as f32, 0.0)
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    fn is_complex() -> bool {
        true
    }
}

/// Macro to generate f64 and Complex64 test variants from a generic test function.
///
/// # Example
///
/// ```ignore
/// fn test_operation_generic<T: Scalar>() {
///     // test implementation
/// }
///
/// tensor4all_cachedsolve::scalar_tests!(test_operation, test_operation_generic);
/// // Generates:
/// // #[test] fn test_operation_f64() { test_operation_generic::<f64>(); }
/// // #[test] fn test_operation_c64() { test_operation_generic::<Complex64>(); }
/// ```
#[macro_export]
macro_rules! scalar_tests {
    ($name:ident, $test_fn:ident) => {
        $crate::__paste! {
            #[test]
            fn [<$name _f64>]() {
                $test_fn::<f64>();
            }

            #[test]
            fn [<$name _c64>]() {
                $test_fn::<$crate::Complex64>();
            }
        }
    };
}
