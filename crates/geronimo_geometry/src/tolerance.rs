//! Floating-point comparison policy for the parallelism and perpendicularity
//! checks.

use approx::abs_diff_eq;

use crate::{EPSILON, Float};

/// How two floating-point values are compared.
///
/// [`Tolerance::Exact`] is the default and is what [`Vector::is_parallel()`]
/// and [`Vector::is_perpendicular()`] use. Exact comparison is fragile for
/// values produced by arithmetic (`0.1 + 0.2 != 0.3`), so callers working
/// with computed vectors may prefer [`Tolerance::APPROX`].
///
/// [`Vector::is_parallel()`]: crate::Vector::is_parallel
/// [`Vector::is_perpendicular()`]: crate::Vector::is_perpendicular
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum Tolerance {
    /// Values are equal only if they compare equal with `==`.
    #[default]
    Exact,
    /// Values are equal if they differ by at most the given amount.
    Approx(Float),
}

impl Tolerance {
    /// Approximate comparison using [`EPSILON`].
    pub const APPROX: Self = Self::Approx(EPSILON);

    /// Returns whether `a` and `b` are equal under this tolerance.
    pub fn eq(self, a: Float, b: Float) -> bool {
        match self {
            Tolerance::Exact => a == b,
            // use native float equality to handle infinities
            Tolerance::Approx(epsilon) => a == b || abs_diff_eq!(a, b, epsilon = epsilon),
        }
    }

    /// Returns whether `x` is zero under this tolerance.
    pub fn eq_zero(self, x: Float) -> bool {
        self.eq(x, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_tolerance() {
        assert!(Tolerance::Exact.eq(0.5, 0.5));
        assert!(Tolerance::Exact.eq_zero(-0.0));
        assert!(!Tolerance::Exact.eq(0.1 + 0.2, 0.3));
        assert!(!Tolerance::Exact.eq(Float::NAN, Float::NAN));
    }

    #[test]
    fn test_approx_tolerance() {
        assert!(Tolerance::APPROX.eq(0.1 + 0.2, 0.3));
        assert!(Tolerance::APPROX.eq_zero(1e-9));
        assert!(!Tolerance::APPROX.eq_zero(1e-3));
        assert!(Tolerance::Approx(0.5).eq(1.0, 1.4));
        assert!(Tolerance::APPROX.eq(Float::INFINITY, Float::INFINITY));
        assert!(!Tolerance::APPROX.eq(Float::INFINITY, Float::NEG_INFINITY));
    }

    #[test]
    fn test_default_is_exact() {
        assert_eq!(Tolerance::default(), Tolerance::Exact);
    }
}
