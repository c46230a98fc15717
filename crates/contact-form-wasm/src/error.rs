//! Mount failures

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why the form could not be attached to the page
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window; contact form must run in a browser")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to attach {event} listener to #{id}")]
    Listener { id: String, event: &'static str },
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
