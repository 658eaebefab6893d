//! Error types for the signup workflow.

use thiserror::Error;

/// A single rejected field.
///
/// # Examples
///
/// ```
/// use signup_sample::FieldError;
///
/// let error = FieldError::new("email", "must contain '@'");
/// assert_eq!(error.to_string(), "email: must contain '@'");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Name of the offending field
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    #[must_use]
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Why a signup did not produce an account.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignupError {
    /// The request body was not a valid signup document.
    #[error("malformed request: {0}")]
    Malformed(String),
    /// The request parsed but one or more fields were rejected.
    #[error("{} field(s) rejected", .0.len())]
    Rejected(Vec<FieldError>),
}

impl SignupError {
    /// The rejected fields, empty for a malformed request.
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        match self {
            Self::Malformed(_) => &[],
            Self::Rejected(errors) => errors,
        }
    }
}
