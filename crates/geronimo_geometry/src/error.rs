use thiserror::Error;

/// Result type for fallible geometry operations.
pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

/// Error produced by a vector or point operation whose inputs violate its
/// contract.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum GeometryError {
    /// Two operands do not have the same number of dimensions.
    #[error("operands do not have the same dimension ({actual} != {expected})")]
    DimensionMismatch {
        /// Number of dimensions of the receiver.
        expected: usize,
        /// Number of dimensions of the other operand.
        actual: usize,
    },
    /// Vectors are not related by a uniform scalar.
    #[error("vectors are not parallel and cannot have uniform λ")]
    NotParallel,
    /// Division by a zero component or by a zero length.
    #[error("division by zero")]
    DivisionByZero,
    /// Operation needs at least one component but the vector has none.
    #[error("vector has no components")]
    ZeroDimensional,
}
