// File: src/field.rs
// Purpose: Field identifiers, visual status, and the page element ids the form binds to

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named input participating in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Password,
    ConfirmPassword,
    /// Free text; never validated
    Message,
}

impl FieldId {
    /// Validated fields in validator order. Submission runs them in this
    /// order and focuses the first failure.
    pub const VALIDATED: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Message,
    ];

    /// Default id of the input element
    pub fn input_id(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Message => "message",
        }
    }

    /// Default id of the inline error element, if the field has one
    pub fn error_id(self) -> Option<&'static str> {
        match self {
            FieldId::Name => Some("nameError"),
            FieldId::Email => Some("emailError"),
            FieldId::Password => Some("passwordError"),
            FieldId::ConfirmPassword => Some("confirmPasswordError"),
            FieldId::Message => None,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Full Name",
            FieldId::Email => "Email Address",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
            FieldId::Message => "Message",
        }
    }

    pub fn is_validated(self) -> bool {
        self != FieldId::Message
    }

    /// Look up a field by its default input id
    pub fn from_input_id(id: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|f| f.input_id() == id)
    }

    /// Position in [`FieldId::VALIDATED`]
    pub(crate) fn slot(self) -> Option<usize> {
        FieldId::VALIDATED.iter().position(|f| *f == self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_id())
    }
}

/// Visual state of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Neither styling class applied
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub const VALID_CLASS: &'static str = "valid";
    pub const INVALID_CLASS: &'static str = "invalid";

    /// The class this status applies, if any
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            FieldStatus::Untouched => None,
            FieldStatus::Valid => Some(Self::VALID_CLASS),
            FieldStatus::Invalid => Some(Self::INVALID_CLASS),
        }
    }
}

/// Element ids of the page structure the form binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIds {
    #[serde(default = "default_form")]
    pub form: String,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_password")]
    pub password: String,

    #[serde(default = "default_confirm_password")]
    pub confirm_password: String,

    #[serde(default = "default_message")]
    pub message: String,

    #[serde(default = "default_name_error")]
    pub name_error: String,

    #[serde(default = "default_email_error")]
    pub email_error: String,

    #[serde(default = "default_password_error")]
    pub password_error: String,

    #[serde(default = "default_confirm_password_error")]
    pub confirm_password_error: String,

    #[serde(default = "default_success_message")]
    pub success_message: String,

    #[serde(default = "default_submit_button")]
    pub submit_button: String,
}

fn default_form() -> String {
    "contactForm".to_string()
}

fn default_name() -> String {
    FieldId::Name.input_id().to_string()
}

fn default_email() -> String {
    FieldId::Email.input_id().to_string()
}

fn default_password() -> String {
    FieldId::Password.input_id().to_string()
}

fn default_confirm_password() -> String {
    FieldId::ConfirmPassword.input_id().to_string()
}

fn default_message() -> String {
    FieldId::Message.input_id().to_string()
}

fn default_name_error() -> String {
    "nameError".to_string()
}

fn default_email_error() -> String {
    "emailError".to_string()
}

fn default_password_error() -> String {
    "passwordError".to_string()
}

fn default_confirm_password_error() -> String {
    "confirmPasswordError".to_string()
}

fn default_success_message() -> String {
    "successMessage".to_string()
}

fn default_submit_button() -> String {
    "submitButton".to_string()
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: default_form(),
            name: default_name(),
            email: default_email(),
            password: default_password(),
            confirm_password: default_confirm_password(),
            message: default_message(),
            name_error: default_name_error(),
            email_error: default_email_error(),
            password_error: default_password_error(),
            confirm_password_error: default_confirm_password_error(),
            success_message: default_success_message(),
            submit_button: default_submit_button(),
        }
    }
}

impl ElementIds {
    /// Id of the input element for `field`
    pub fn input(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
            FieldId::Message => &self.message,
        }
    }

    /// Id of the error element for `field`
    pub fn error(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => Some(&self.name_error),
            FieldId::Email => Some(&self.email_error),
            FieldId::Password => Some(&self.password_error),
            FieldId::ConfirmPassword => Some(&self.confirm_password_error),
            FieldId::Message => None,
        }
    }
}
