//! Field validation failures
//!
//! Each variant's `Display` output is the exact text shown next to the
//! offending field.

use thiserror::Error;

use crate::field::FieldId;

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Full Name is required.")]
    NameRequired,

    #[error("Email Address is required.")]
    EmailRequired,

    #[error("Please enter a valid email address.")]
    EmailInvalid,

    #[error("Password is required.")]
    PasswordRequired,

    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },

    #[error("Please confirm your password.")]
    ConfirmationRequired,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl FieldError {
    /// The field this error is displayed against
    pub fn field(&self) -> FieldId {
        match self {
            FieldError::NameRequired => FieldId::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => FieldId::Email,
            FieldError::PasswordRequired | FieldError::PasswordTooShort { .. } => {
                FieldId::Password
            }
            FieldError::ConfirmationRequired | FieldError::PasswordMismatch => {
                FieldId::ConfirmPassword
            }
        }
    }
}
