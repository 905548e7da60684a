use thiserror::Error;

/// Result type for fallible utilities.
pub type Result<T, E = UtilError> = std::result::Result<T, E>;

/// Error produced by an integer utility.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UtilError {
    /// The argument is outside the domain of the function.
    #[error("invalid argument {n}: must not be negative")]
    InvalidArgument {
        /// Rejected argument.
        n: i64,
    },
    /// The result does not fit in the return type.
    #[error("result for argument {n} overflows")]
    Overflow {
        /// Argument whose result overflows.
        n: i64,
    },
}
