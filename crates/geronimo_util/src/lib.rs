//! Small memoized integer utilities.
//!
//! Both functions remember every result they compute for the lifetime of the
//! process. The caches are never evicted, so memory grows with the number of
//! distinct arguments seen.

mod error;
mod fibonacci;
mod gcd;


pub use error::{Result, UtilError};
pub use fibonacci::{fib, fibonacci};
pub use gcd::{gcd, greatest_common_divisor};
