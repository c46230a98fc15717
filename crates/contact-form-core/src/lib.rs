//! Contact Form Core
//!
//! Headless validation for a contact form. The pure rules in [`email`],
//! [`password`] and [`string`] decide validity; [`FormValidator`] applies them
//! to a [`FormView`] on blur and submit, and owns the success-message timer
//! through a [`Scheduler`].
//!
//! The browser binding lives in `contact-form-wasm`; [`memory`] provides
//! in-memory implementations of both seams for headless hosts and tests.

pub mod config;
pub mod email;
pub mod error;
pub mod field;
pub mod memory;
pub mod password;
pub mod string;
pub mod validator;
pub mod values;
pub mod view;

#[cfg(feature = "markup")]
pub mod markup;

pub use config::{FormConfig, SuccessConfig, ValidationConfig};
pub use email::{check_email, is_valid_email};
pub use error::FieldError;
pub use field::{ElementIds, FieldId, FieldStatus};
pub use password::{check_confirm_password, check_password, utf16_len};
pub use string::{check_name, trim_input};
pub use validator::{FieldSnapshot, FormValidator, SubmitOutcome};
pub use values::ContactValues;
pub use view::{FormView, HideToken, Scheduler};
