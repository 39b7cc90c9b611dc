use rigid_types::MathError;

/// An error type for the transform algebra.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// Error when a rotation axis has zero length.
    #[error("rotation axis has zero length")]
    ZeroAxis,

    /// Error coming from an operation on the value types.
    #[error(transparent)]
    Math(#[from] MathError),
}
