//! Plain snapshot of every field's value

use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::email::check_email;
use crate::error::FieldError;
use crate::field::FieldId;
use crate::password::{check_confirm_password, check_password};
use crate::string::check_name;

/// Current value of every field in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub message: String,
}

impl ContactValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
            FieldId::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Run one field's rule against this snapshot. The message field always passes.
    pub fn check(&self, field: FieldId, rules: &ValidationConfig) -> Result<(), FieldError> {
        match field {
            FieldId::Name => check_name(&self.name),
            FieldId::Email => check_email(&self.email),
            FieldId::Password => check_password(&self.password, rules.password_min_length),
            FieldId::ConfirmPassword => {
                check_confirm_password(&self.confirm_password, &self.password)
            }
            FieldId::Message => Ok(()),
        }
    }

    /// Every failing field, in validator order
    pub fn validate(&self, rules: &ValidationConfig) -> Vec<FieldError> {
        FieldId::VALIDATED
            .into_iter()
            .filter_map(|field| self.check(field, rules).err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, email: &str, password: &str, confirm: &str) -> ContactValues {
        ContactValues {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_validate_collects_in_order() {
        let errors = values("", "a@b", "", "x").validate(&ValidationConfig::default());
        assert_eq!(
            errors,
            vec![
                FieldError::NameRequired,
                FieldError::EmailInvalid,
                FieldError::PasswordRequired,
                FieldError::PasswordMismatch,
            ]
        );
    }

    #[test]
    fn test_validate_passes() {
        let errors = values("Jo", "a@b.com", "12345678", "12345678")
            .validate(&ValidationConfig::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_message_never_checked() {
        let mut v = ContactValues::default();
        v.set(FieldId::Message, "");
        assert!(v.check(FieldId::Message, &ValidationConfig::default()).is_ok());
        assert_eq!(v.get(FieldId::Message), "");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let v: ContactValues = toml::from_str("name = \"Jo\"\nconfirmPassword = \"x\"").unwrap();
        assert_eq!(v.name, "Jo");
        assert_eq!(v.confirm_password, "x");
        assert_eq!(v.email, "");
    }
}
