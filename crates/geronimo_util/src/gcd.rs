//! Greatest common divisor.

use std::collections::HashMap;

use lazy_static::lazy_static;
use parking_lot::Mutex;

lazy_static! {
    /// Memoized results keyed by the exact arguments.
    static ref GCD_CACHE: Mutex<HashMap<(i64, i64), u64>> = Mutex::new(HashMap::new());
}

/// Returns the greatest common divisor of `a` and `b` using the iterative
/// Euclidean algorithm.
///
/// The result is never negative: the signs of `a` and `b` are ignored, so
/// `greatest_common_divisor(-4, 6) == 2`. `greatest_common_divisor(a, 0)` is
/// `|a|`, and in particular `greatest_common_divisor(0, 0) == 0`. The result
/// is a `u64` because `|i64::MIN|` does not fit in an `i64`.
///
/// Results are memoized by `(a, b)`.
pub fn greatest_common_divisor(a: i64, b: i64) -> u64 {
    if let Some(&ret) = GCD_CACHE.lock().get(&(a, b)) {
        return ret;
    }

    let ret = euclid(a.unsigned_abs(), b.unsigned_abs());
    log::trace!("memoizing gcd({a}, {b}) = {ret}");
    GCD_CACHE.lock().insert((a, b), ret);
    ret
}

/// Shorthand for [`greatest_common_divisor()`].
pub use self::greatest_common_divisor as gcd;

fn euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns whether the result for `(a, b)` has been memoized.
#[cfg(test)]
pub(crate) fn is_memoized(a: i64, b: i64) -> bool {
    GCD_CACHE.lock().contains_key(&(a, b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_euclid() {
        assert_eq!(euclid(16, 20), 4);
        assert_eq!(euclid(20, 16), 4);
        assert_eq!(euclid(7, 0), 7);
        assert_eq!(euclid(0, 7), 7);
        assert_eq!(euclid(0, 0), 0);
        assert_eq!(euclid(17, 5), 1);
    }

    #[test]
    fn test_gcd_signs() {
        assert_eq!(greatest_common_divisor(-4, 6), 2);
        assert_eq!(greatest_common_divisor(4, -6), 2);
        assert_eq!(greatest_common_divisor(-4, -6), 2);
        assert_eq!(greatest_common_divisor(-9, 0), 9);
        assert_eq!(greatest_common_divisor(i64::MIN, 0), 1 << 63);
        assert_eq!(greatest_common_divisor(i64::MIN, i64::MIN), 1 << 63);
    }

    #[test]
    fn test_gcd_memoized() {
        // Outside the range the property tests draw from.
        assert!(!is_memoized(2_000_000_010, 3_000_000_015));
        assert_eq!(greatest_common_divisor(2_000_000_010, 3_000_000_015), 1_000_000_005);
        assert!(is_memoized(2_000_000_010, 3_000_000_015));
        // Arguments are not normalized before lookup.
        assert!(!is_memoized(3_000_000_015, 2_000_000_010));
        assert_eq!(gcd(2_000_000_010, 3_000_000_015), 1_000_000_005);
    }
}
