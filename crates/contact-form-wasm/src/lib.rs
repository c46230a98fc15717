//! Contact Form WASM
//!
//! WebAssembly bindings that attach the contact form validator to the live
//! page. Uses the same rules as `contact-form-core`.

use contact_form_core as form_core;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod error;
pub mod logging;
pub mod mount;
pub mod scheduler;

pub use error::MountError;
pub use mount::{mount, mount_contact_form, mount_on_ready, ContactFormHandle};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Send `tracing` output to the console at `level` ("debug", "info", ...).
/// Must be called before `mountContactForm` to take effect.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    logging::init(logging::parse_level(level.as_deref()));
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Validate a snapshot of the form without touching the page
///
/// # Arguments
/// * `values` - `{ name, email, password, confirmPassword, message }`; missing keys are empty
/// * `config` - optional form configuration
///
/// # Returns
/// Array of `{ field, message }` in validator order (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateContactForm({ name: 'Jo', email: 'nope' });
/// // [{ field: 'email', message: 'Please enter a valid email address.' }, ...]
/// ```
#[wasm_bindgen(js_name = validateContactForm)]
pub fn validate_contact_form(values: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let values: form_core::ContactValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    let config = mount::parse_config(config)?;

    let errors = collect_errors(&values, &config.validation);
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

fn collect_errors(
    values: &form_core::ContactValues,
    rules: &form_core::ValidationConfig,
) -> Vec<ValidationError> {
    values
        .validate(rules)
        .into_iter()
        .map(|error| ValidationError {
            field: error.field().input_id().to_string(),
            message: error.to_string(),
        })
        .collect()
}

/// Quick email validation (no trimming)
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    form_core::is_valid_email(email)
}

/// Quick password validation; returns the error text or `undefined`
#[wasm_bindgen(js_name = checkPassword)]
pub fn check_password_js(password: &str, min_length: Option<usize>) -> Option<String> {
    let min_length = min_length.unwrap_or(form_core::password::DEFAULT_MIN_LENGTH);
    form_core::check_password(password, min_length)
        .err()
        .map(|e| e.to_string())
}
