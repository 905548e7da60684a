//! Number of dimensions trait.

use crate::{GeometryError, Result};

/// Number of dimensions.
pub trait Ndim {
    /// Returns the number of components of the object.
    fn ndim(&self) -> usize;

    /// Returns the number of dimensions shared by `self` and `other`.
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if they differ.
    fn ensure_same_ndim(&self, other: &impl Ndim) -> Result<usize> {
        let expected = self.ndim();
        let actual = other.ndim();
        if expected == actual {
            Ok(expected)
        } else {
            log::debug!("rejecting operands with mismatched dimensions ({actual} != {expected})");
            Err(GeometryError::DimensionMismatch { expected, actual })
        }
    }
}

impl<T: Ndim> Ndim for &'_ T {
    fn ndim(&self) -> usize {
        (*self).ndim()
    }
}
