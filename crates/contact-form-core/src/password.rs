//! Password and confirmation rules
//!
//! Both work on the raw value; unlike name and email, whitespace counts.

use crate::error::FieldError;

/// Default minimum password length
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Length as a browser's `input.value.length` reports it (UTF-16 code units)
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Password is required and must be at least `min_length` long
pub fn check_password(value: &str, min_length: usize) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if utf16_len(value) < min_length {
        return Err(FieldError::PasswordTooShort { min: min_length });
    }
    Ok(())
}

/// Confirmation is required and must equal the password exactly
pub fn check_confirm_password(confirm: &str, password: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        return Err(FieldError::ConfirmationRequired);
    }
    if confirm != password {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}
