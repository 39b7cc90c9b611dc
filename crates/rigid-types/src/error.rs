/// An error type for the value types.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Error when a value type is divided by zero, either explicitly or while normalizing.
    #[error("{0}: division by zero")]
    DivisionByZero(&'static str),
}
