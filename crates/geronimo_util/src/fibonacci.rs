//! Fibonacci series starting at `1, 1`.

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::{Result, UtilError};

lazy_static! {
    /// Memo table where index `n` holds `fibonacci(n)`.
    ///
    /// Only ever grows. Seeded with both base cases.
    static ref FIBONACCI_CACHE: Mutex<Vec<u64>> = Mutex::new(vec![1, 1]);
}

/// Returns the `n`th number of the Fibonacci series, counting from zero.
///
/// The series starts `1, 1, 2, 3, 5, 8, ...`, so `fibonacci(0) == 1` and
/// `fibonacci(1) == 1`. Results are memoized, so each number is computed only
/// once per process.
///
/// Returns [`UtilError::InvalidArgument`] if `n` is negative and
/// [`UtilError::Overflow`] if the result does not fit in a `u64` (`n > 92`).
pub fn fibonacci(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(UtilError::InvalidArgument { n });
    }
    // Anything past `usize::MAX` is far past the largest `u64` result.
    let index = usize::try_from(n).map_err(|_| UtilError::Overflow { n })?;

    let mut cache = FIBONACCI_CACHE.lock();
    if let Some(&ret) = cache.get(index) {
        return Ok(ret);
    }

    log::trace!("extending fibonacci memo table from {} to {n}", cache.len() - 1);
    while cache.len() <= index {
        let len = cache.len();
        let next = cache[len - 1]
            .checked_add(cache[len - 2])
            .ok_or(UtilError::Overflow { n })?;
        cache.push(next);
    }
    Ok(cache[index])
}

/// Shorthand for [`fibonacci()`].
pub use self::fibonacci as fib;

/// Returns the number of memoized results.
#[cfg(test)]
pub(crate) fn memoized_len() -> usize {
    FIBONACCI_CACHE.lock().len()
}
