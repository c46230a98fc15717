//! Seams between the validator and its host
//!
//! [`FormView`] stands in for the page elements: inputs, error text, styling,
//! focus and the success message. [`Scheduler`] stands in for the event
//! loop's one-shot timers.

use std::time::Duration;

use crate::field::{FieldId, FieldStatus};
use crate::values::ContactValues;

/// The page structure a [`crate::FormValidator`] drives
pub trait FormView {
    /// Current text of a field's input control
    fn value(&self, field: FieldId) -> String;

    /// Set the inline error text of a validated field. Empty clears it.
    fn set_error_text(&mut self, field: FieldId, text: &str);

    /// Apply the styling for `status`, removing the other status classes
    fn set_status(&mut self, field: FieldId, status: FieldStatus);

    /// Move input focus to a field
    fn focus(&mut self, field: FieldId);

    /// Show the success message with `text`
    fn show_success(&mut self, text: &str);

    fn hide_success(&mut self);

    /// Clear every field's value, including the message
    fn reset_values(&mut self);

    /// Read every field at once
    fn values(&self) -> ContactValues {
        let mut values = ContactValues::default();
        for field in FieldId::ALL {
            values.set(field, self.value(field));
        }
        values
    }
}

/// Identifies one scheduled success-message hide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HideToken(pub u64);

/// One-shot timer for hiding the success message
///
/// When the delay for `token` passes, the host must call
/// [`crate::FormValidator::hide_elapsed`] with the same token. A cancelled
/// token must never be delivered.
pub trait Scheduler {
    fn schedule_hide(&mut self, token: HideToken, delay: Duration);

    fn cancel_hide(&mut self, token: HideToken);
}
