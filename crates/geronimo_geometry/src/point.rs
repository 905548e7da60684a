//! N-dimensional Euclidean point.

use std::fmt;
use std::ops::Index;

use approx::AbsDiffEq;
use itertools::Itertools;

use crate::{DEFAULT_NDIM, Float, Ndim, Result, Vector};

/// Constructs an N-dimensional Euclidean point, using the same syntax as
/// `vec![]`.
#[macro_export]
macro_rules! point {
    [$($tok:tt)*] => {
        $crate::Point::from_vector($crate::vector![$($tok)*])
    };
}

/// N-dimensional Euclidean point.
///
/// The position is fixed at construction.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, PartialEq)]
pub struct Point(Vector);

impl Default for Point {
    /// Returns the origin with [`DEFAULT_NDIM`] dimensions.
    fn default() -> Self {
        Self::origin(DEFAULT_NDIM)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:?})", self.position().iter().format(", "))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?})", self.position().iter().format(", "))
    }
}

impl Ndim for Point {
    /// Returns the number of components in the point.
    fn ndim(&self) -> usize {
        self.0.ndim()
    }
}

impl Point {
    /// Constructs a point at `position`, or the origin with [`DEFAULT_NDIM`]
    /// dimensions if `position` is empty.
    pub fn new(position: impl IntoIterator<Item = Float>) -> Self {
        Self(Vector::new(position))
    }
    /// Constructs a point at `position`, or the origin with `ndim` dimensions
    /// if `position` is empty.
    pub fn with_ndim(position: impl IntoIterator<Item = Float>, ndim: usize) -> Self {
        Self(Vector::with_ndim(position, ndim))
    }
    /// Returns the origin with `ndim` dimensions.
    pub fn origin(ndim: usize) -> Self {
        Self(Vector::zero(ndim))
    }
    /// Constructs the point at the tip of `vector` placed at the origin.
    pub fn from_vector(vector: Vector) -> Self {
        Self(vector)
    }

    /// Returns the number of dimensions of the point.
    pub fn dimensions(&self) -> usize {
        self.ndim()
    }
    /// Returns the coordinates of the point.
    pub fn position(&self) -> &[Float] {
        self.0.values()
    }

    /// Returns the vector from the origin to the point.
    pub fn to_vector(&self) -> Vector {
        self.0.clone()
    }
    /// Returns the vector from the origin to the point.
    pub fn into_vector(self) -> Vector {
        self.0
    }
    /// Returns the vector pointing from `self` to `tip`.
    pub fn displacement_to(&self, tip: &Point) -> Result<Vector> {
        Vector::from_points(self, tip)
    }
}

impl Index<usize> for Point {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AbsDiffEq for Point {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        Vector::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl FromIterator<Float> for Point {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Float>> for Point {
    fn from(position: Vec<Float>) -> Self {
        Self::new(position)
    }
}

impl<const N: usize> From<[Float; N]> for Point {
    fn from(position: [Float; N]) -> Self {
        Self::new(position)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::GeometryError;

    #[test]
    fn test_point_displacement() {
        let origin = point![1.0, 2.0, 4.0];
        let tip = point![4.0, 6.0, 8.0];
        assert_eq!(origin.displacement_to(&tip), Ok(Vector::new([3.0, 4.0, 4.0])));
        assert_eq!(tip.displacement_to(&origin), Ok(Vector::new([-3.0, -4.0, -4.0])));
        assert_eq!(
            origin.displacement_to(&point![1.0, 2.0]),
            Err(GeometryError::DimensionMismatch {
                expected: 3,
                actual: 2,
            }),
        );
    }

    #[test]
    fn test_point_vector_conversion() {
        let p = Point::from([0.5, -1.0]);
        assert_eq!(p.to_vector().values(), p.position());
        assert_eq!(Point::from_vector(p.to_vector()), p);
        assert_eq!(p.into_vector().into_vec(), vec![0.5, -1.0]);
    }

    #[test]
    fn test_point_index() {
        let p = point![7.0, 8.0, 9.0];
        assert_eq!(p[0], 7.0);
        assert_eq!(p[2], 9.0);
    }
}
