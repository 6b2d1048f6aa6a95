//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the data object engine.
#[derive(Error, Debug)]
pub enum Error {
    /// The resolved concrete type is not the expected type or one of its subtypes.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A type name is already taken by a different class.
    #[error("registry conflict: '{type_name}' is registered for {existing}, cannot register {rejected}")]
    RegistryConflict {
        type_name: String,
        existing: String,
        rejected: String,
    },

    /// A required argument was missing (programming error).
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Validation errors.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown type or object type name.
    #[error("not found: {0}")]
    NotFound(String),

    /// A node could not be converted into its declared value type.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Malformed JSON text or JSON encoding failures.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience constructors
impl Error {
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
}
