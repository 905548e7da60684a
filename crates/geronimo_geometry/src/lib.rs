//! N-dimensional points and vectors.
//!
//! Every operation that pairs two vectors (or two points) requires both
//! operands to have the same number of dimensions and returns
//! [`GeometryError::DimensionMismatch`] otherwise. Comparisons use exact
//! floating-point equality unless a [`Tolerance`] is passed explicitly.
//!
//! # Example
//!
//! ```
//! use geronimo_geometry::{Point, Vector, point, vector};
//!
//! let v = Vector::from_points(&point![1.0, 2.0, 4.0], &point![4.0, 6.0, 8.0])?;
//! assert_eq!(v, vector![3.0, 4.0, 4.0]);
//! assert_eq!(v.dot(&vector![1.0, 0.0, 0.0])?, 3.0);
//! assert_eq!(v.to_string(), "<3.0, 4.0, 4.0>");
//!
//! // Constructing without components zero-fills three dimensions.
//! assert_eq!(Point::default().position(), &[0.0, 0.0, 0.0]);
//! # Ok::<(), geronimo_geometry::GeometryError>(())
//! ```

pub use {approx, smallvec};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Number of dimensions of a point or vector constructed without any
/// components.
pub const DEFAULT_NDIM: usize = 3;

/// Small floating-point value used for approximate comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod vector;
#[macro_use]
mod point;

mod error;
mod ndim;
mod tolerance;

#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

pub use error::{GeometryError, Result};

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::error::GeometryError;
    pub use crate::ndim::Ndim;
    pub use crate::point::Point;
    pub use crate::tolerance::Tolerance;
    pub use crate::vector::Vector;
    pub use crate::{DEFAULT_NDIM, EPSILON, Float, point, vector};
}
pub use prelude::*;
