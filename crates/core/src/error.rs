//! Model error type.

use thiserror::Error;

/// Result type used by the shape checks of the record crates.
pub type ModelResult<T> = Result<T, ModelError>;

/// Model-level error.
///
/// Equality never produces one of these: a comparison only answers
/// "equal" or "not equal". Errors come from the explicit shape checks and
/// indexed lookups that callers may run before comparing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A container field does not have the length its header promises.
    #[error("shape mismatch in `{field}`: expected at least {expected} entries, found {found}")]
    Shape {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A value failed validation (e.g. a negative count).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested entry does not exist.
    #[error("not found")]
    NotFound,
}

impl ModelError {
    pub fn shape(field: &'static str, expected: usize, found: usize) -> Self {
        Self::Shape {
            field,
            expected,
            found,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
