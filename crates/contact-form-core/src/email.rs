//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;
use crate::string::{trim_input, JS_WHITESPACE_CLASS};

/// `local@domain.tld` where each part is one or more characters that are
/// neither whitespace nor `@`. Whitespace is the browser's `\s`, not Rust's.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", JS_WHITESPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is a valid regex")
});

/// Validates basic `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Email is required and must match the basic pattern after trimming
pub fn check_email(value: &str) -> Result<(), FieldError> {
    let email = trim_input(value);
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}
