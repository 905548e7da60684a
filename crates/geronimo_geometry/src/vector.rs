//! N-dimensional vector math.

use std::fmt;
use std::ops::{Div, Index, Mul, Neg};

use approx::AbsDiffEq;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::{DEFAULT_NDIM, EPSILON, Float, GeometryError, Ndim, Point, Result, Tolerance};

/// Constructs an N-dimensional vector, using the same syntax as `vec![]`.
///
/// Unlike [`Vector::new()`], the components are taken as-is, so `vector![]`
/// is zero-dimensional.
#[macro_export]
macro_rules! vector {
    [$($tok:tt)*] => {
        $crate::Vector::from_smallvec($crate::smallvec::smallvec![$($tok)*])
    };
}

/// N-dimensional vector.
///
/// The number of dimensions is fixed at construction and every operation
/// returns a new vector.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, PartialEq)]
pub struct Vector(SmallVec<[Float; 4]>);

impl Default for Vector {
    /// Returns the zero vector with [`DEFAULT_NDIM`] dimensions.
    fn default() -> Self {
        Self::zero(DEFAULT_NDIM)
    }
}

/// Components use the float `Debug` form, so integral values keep their `.0`
/// and special values print as `1e16`, `NaN` and `inf`.
impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:?})", self.0.iter().format(", "))
    }
}

/// Angle-bracket form `<1.0, 2.0>`, with components formatted as in `Debug`.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?}>", self.0.iter().format(", "))
    }
}

impl Ndim for Vector {
    /// Returns the number of components in the vector.
    fn ndim(&self) -> usize {
        self.0.len()
    }
}

impl Vector {
    /// Zero-dimensional empty vector.
    pub const EMPTY: Self = Self(SmallVec::new_const());

    /// Constructs a vector from `values`, or the zero vector with
    /// [`DEFAULT_NDIM`] dimensions if `values` is empty.
    pub fn new(values: impl IntoIterator<Item = Float>) -> Self {
        Self::with_ndim(values, DEFAULT_NDIM)
    }
    /// Constructs a vector from `values`, or the zero vector with `ndim`
    /// dimensions if `values` is empty.
    ///
    /// `ndim` is ignored when `values` is non-empty.
    pub fn with_ndim(values: impl IntoIterator<Item = Float>, ndim: usize) -> Self {
        let values: SmallVec<_> = values.into_iter().collect();
        if values.is_empty() {
            Self::zero(ndim)
        } else {
            Self(values)
        }
    }
    /// Returns the zero vector with `ndim` dimensions.
    pub fn zero(ndim: usize) -> Self {
        Self(SmallVec::from_elem(0.0, ndim))
    }
    #[doc(hidden)]
    pub fn from_smallvec(values: SmallVec<[Float; 4]>) -> Self {
        Self(values)
    }

    /// Constructs the vector pointing from `origin` to `tip`.
    pub fn from_points(origin: &Point, tip: &Point) -> Result<Self> {
        origin.ensure_same_ndim(tip)?;
        Ok(std::iter::zip(tip.position(), origin.position())
            .map(|(t, o)| t - o)
            .collect())
    }

    /// Returns the number of dimensions of the vector.
    pub fn dimensions(&self) -> usize {
        self.ndim()
    }
    /// Returns the components of the vector.
    pub fn values(&self) -> &[Float] {
        &self.0
    }
    /// Returns an iterator over the components of the vector.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Float> + '_ {
        self.0.iter().copied()
    }
    /// Returns the components of the vector as a `Vec`.
    pub fn into_vec(self) -> Vec<Float> {
        self.0.into_vec()
    }

    /// Returns the Euclidean length of the vector.
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Returns the squared Euclidean length of the vector.
    pub fn length_squared(&self) -> Float {
        self.iter().map(|x| x * x).sum()
    }

    /// Applies `f` to each pair of corresponding components.
    fn zip_with(&self, other: &Vector, f: impl Fn(Float, Float) -> Float) -> Result<Vector> {
        self.ensure_same_ndim(other)?;
        Ok(std::iter::zip(self.iter(), other.iter())
            .map(|(a, b)| f(a, b))
            .collect())
    }

    /// Returns the component-wise sum of two vectors.
    pub fn try_add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a + b)
    }
    /// Returns the component-wise difference `self - other`.
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a - b)
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(&self, scalar: Float) -> Vector {
        self.iter().map(|x| x * scalar).collect()
    }
    /// Returns the dot product of this vector with another.
    pub fn dot(&self, other: &Vector) -> Result<Float> {
        self.ensure_same_ndim(other)?;
        Ok(std::iter::zip(self.iter(), other.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Returns whether the dot product of the two vectors is exactly zero.
    pub fn is_perpendicular(&self, other: &Vector) -> Result<bool> {
        self.is_perpendicular_with(other, Tolerance::Exact)
    }
    /// Returns whether the dot product of the two vectors is zero under
    /// `tolerance`.
    pub fn is_perpendicular_with(&self, other: &Vector, tolerance: Tolerance) -> Result<bool> {
        Ok(tolerance.eq_zero(self.dot(other)?))
    }

    /// Returns whether every component of `self` is the same multiple of the
    /// corresponding component of `other`, using exact comparison.
    ///
    /// Components where `other` is zero are skipped, so any vector is
    /// considered parallel to a zero vector of the same dimension.
    pub fn is_parallel(&self, other: &Vector) -> Result<bool> {
        self.is_parallel_with(other, Tolerance::Exact)
    }
    /// Same as [`Vector::is_parallel()`], but comparing ratios (and testing
    /// components of `other` for zero) under `tolerance`.
    pub fn is_parallel_with(&self, other: &Vector, tolerance: Tolerance) -> Result<bool> {
        self.ensure_same_ndim(other)?;
        let mut ratios = std::iter::zip(self.iter(), other.iter())
            .filter(|&(_, b)| !tolerance.eq_zero(b))
            .map(|(a, b)| a / b);
        Ok(match ratios.next() {
            None => true,
            Some(k) => ratios.all(|local_k| tolerance.eq(local_k, k)),
        })
    }

    /// Returns the scalar λ such that `self = λ * other`.
    ///
    /// If `check_uniform_scalar` is `true`, first checks that the vectors are
    /// parallel and returns [`GeometryError::NotParallel`] if they are not.
    /// The scalar itself is always computed from the first components only,
    /// so [`GeometryError::DivisionByZero`] is returned whenever the first
    /// component of `other` is zero.
    pub fn get_scalar(&self, other: &Vector, check_uniform_scalar: bool) -> Result<Float> {
        if check_uniform_scalar && !self.is_parallel(other)? {
            log::debug!("no uniform scalar between {self} and {other}");
            return Err(GeometryError::NotParallel);
        }
        let (Some(&a), Some(&b)) = (self.0.first(), other.0.first()) else {
            return Err(GeometryError::ZeroDimensional);
        };
        if b == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Returns a copy of the vector scaled to length one.
    ///
    /// Returns [`GeometryError::DivisionByZero`] for a vector of length zero.
    pub fn normalize(&self) -> Result<Vector> {
        let length = self.length();
        if length == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self.scale(1.0 / length))
    }
}

macro_rules! impl_vector_ops {
    (impl for $type_name:ty) => {
        impl Neg for $type_name {
            type Output = Vector;

            fn neg(self) -> Self::Output {
                self.iter().map(|x| -x).collect()
            }
        }

        impl Mul<Float> for $type_name {
            type Output = Vector;

            fn mul(self, rhs: Float) -> Self::Output {
                self.scale(rhs)
            }
        }
        impl Div<Float> for $type_name {
            type Output = Vector;

            #[allow(clippy::suspicious_arithmetic_impl)]
            fn div(self, rhs: Float) -> Self::Output {
                self.scale(1.0 / rhs)
            }
        }
    };
}
impl_vector_ops!(impl for Vector);
impl_vector_ops!(impl for &'_ Vector);

impl Index<usize> for Vector {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.ndim() == other.ndim()
            && std::iter::zip(self.iter(), other.iter()).all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

impl FromIterator<Float> for Vector {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Float>> for Vector {
    fn from(values: Vec<Float>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[Float; N]> for Vector {
    fn from(values: [Float; N]) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_vector_try_add() {
        let v1 = vector![1.0, 2.0, -10.0];
        let v2 = vector![-5.0, 0.5, 1.0];
        assert_eq!(v1.try_add(&v2), Ok(vector![-4.0, 2.5, -9.0]));
        assert_eq!(v2.try_add(&v1), Ok(vector![-4.0, 2.5, -9.0]));
        assert_eq!(
            v1.try_add(&vector![-5.0]),
            Err(GeometryError::DimensionMismatch {
                expected: 3,
                actual: 1,
            }),
        );
    }

    #[test]
    fn test_vector_subtract() {
        let v1 = vector![1.0, 2.0, -10.0];
        let v2 = vector![-5.0, 0.5, 1.0];
        assert_eq!(v1.subtract(&v2), Ok(vector![6.0, 1.5, -11.0]));
        assert_eq!(v2.subtract(&v1), Ok(vector![-6.0, -1.5, 11.0]));
        assert!(vector![1.0, 2.0].subtract(&v1).is_err());
    }

    #[test]
    fn test_vector_neg() {
        let v1 = vector![1.0, 2.0, -10.0];
        assert_eq!(-&v1, vector![-1.0, -2.0, 10.0]);
        assert_eq!(-v1, vector![-1.0, -2.0, 10.0]);
    }

    #[test]
    fn test_vector_mul_div_scalar() {
        let v1 = vector![1.0, 2.0, -10.0];
        assert_eq!(&v1 * 2.0, vector![2.0, 4.0, -20.0]);
        assert_eq!(&v1 / 2.0, vector![0.5, 1.0, -5.0]);
        assert_eq!(v1 * -1.0, vector![-1.0, -2.0, 10.0]);
    }

    #[test]
    fn test_dot_product() {
        let v1 = vector![1.0, 2.0, -10.0];
        let v2 = vector![-5.0, 16.0, 0.5];
        assert_eq!(v1.dot(&v2), Ok(22.0));
        assert!(v1.dot(&vector![-5.0, 16.0]).is_err());
    }

    #[test]
    fn test_empty_vector_stays_empty() {
        assert_eq!(Vector::EMPTY.scale(3.0), Vector::EMPTY);
        assert_eq!(Vector::EMPTY.length(), 0.0);
        assert_eq!(vector![], Vector::EMPTY);
    }
}
