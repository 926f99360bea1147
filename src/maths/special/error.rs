use thiserror::Error;

/// Result type alias for the inverse error functions.
pub type Result<T> = core::result::Result<T, DomainError>;

/// The argument lies outside the closed interval the function is defined on.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("input must lie in [{lower}, {upper}], got {value}")]
pub struct DomainError {
    /// The rejected argument.
    pub value: f64,
    /// Lower bound of the domain.
    pub lower: f64,
    /// Upper bound of the domain.
    pub upper: f64,
}

impl DomainError {
    pub(crate) fn new(value: f64, lower: f64, upper: f64) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(value, lower, upper, "argument outside domain");
        Self {
            value,
            lower,
            upper,
        }
    }
}
