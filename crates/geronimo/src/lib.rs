//! N-dimensional points and vectors, plus a couple of memoized integer
//! utilities.
//!
//! This crate re-exports [`geronimo_geometry`] as [`geometry`] and
//! [`geronimo_util`] as [`util`].
//!
//! # Example
//!
//! ```rust
//! use geronimo::prelude::*;
//!
//! let a = vector![2.0, 4.0, 6.0];
//! let b = vector![4.0, 8.0, 12.0];
//! assert!(a.is_parallel(&b)?);
//! assert_eq!(a.get_scalar(&b, true)?, 0.5);
//! assert!((b.normalize()?.length() - 1.0).abs() < EPSILON);
//!
//! // Any vector counts as parallel to the zero vector.
//! assert!(a.is_parallel(&Vector::zero(3))?);
//!
//! assert_eq!(geronimo::util::fib(9)?, 55);
//! assert_eq!(geronimo::util::gcd(16, 20), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use prelude::*;
pub use {geronimo_geometry as geometry, geronimo_util as util};

/// Prelude of common imports.
pub mod prelude {
    pub use geronimo_geometry::prelude::*;
    pub use geronimo_util::{UtilError, fibonacci, greatest_common_divisor};
}
