//! In-memory implementations of [`FormView`] and [`Scheduler`]
//!
//! Useful for headless hosts and for driving the validator in tests.

use std::collections::HashMap;
use std::time::Duration;

use crate::field::{FieldId, FieldStatus};
use crate::values::ContactValues;
use crate::view::{FormView, HideToken, Scheduler};

/// A form held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    values: ContactValues,
    errors: HashMap<FieldId, String>,
    statuses: HashMap<FieldId, FieldStatus>,
    focused: Option<FieldId>,
    success_text: String,
    success_visible: bool,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: ContactValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Simulate typing into a field
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn error_text(&self, field: FieldId) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn status(&self, field: FieldId) -> FieldStatus {
        self.statuses.get(&field).copied().unwrap_or_default()
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    /// Success text while the message is visible
    pub fn success(&self) -> Option<&str> {
        self.success_visible.then_some(self.success_text.as_str())
    }
}

impl FormView for MemoryView {
    fn value(&self, field: FieldId) -> String {
        self.values.get(field).to_string()
    }

    fn set_error_text(&mut self, field: FieldId, text: &str) {
        if text.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, text.to_string());
        }
    }

    fn set_status(&mut self, field: FieldId, status: FieldStatus) {
        self.statuses.insert(field, status);
    }

    fn focus(&mut self, field: FieldId) {
        self.focused = Some(field);
    }

    fn show_success(&mut self, text: &str) {
        self.success_text = text.to_string();
        self.success_visible = true;
    }

    fn hide_success(&mut self) {
        self.success_visible = false;
    }

    fn reset_values(&mut self) {
        self.values = ContactValues::default();
    }

    fn values(&self) -> ContactValues {
        self.values.clone()
    }
}

/// Timers driven by explicitly advancing a virtual clock
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    timers: Vec<(HideToken, Duration)>,
    cancelled: Vec<HideToken>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Tokens still waiting to fire, soonest first
    pub fn pending(&self) -> Vec<HideToken> {
        self.timers.iter().map(|(token, _)| *token).collect()
    }

    /// Tokens cancelled so far, in cancellation order
    pub fn cancelled(&self) -> &[HideToken] {
        &self.cancelled
    }

    /// Move the clock forward and return the tokens that came due
    pub fn advance(&mut self, by: Duration) -> Vec<HideToken> {
        self.now += by;
        let now = self.now;
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|(_, deadline)| *deadline <= now);
        self.timers = waiting;
        due.into_iter().map(|(token, _)| token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_hide(&mut self, token: HideToken, delay: Duration) {
        self.timers.push((token, self.now + delay));
        self.timers.sort_by_key(|(_, deadline)| *deadline);
    }

    fn cancel_hide(&mut self, token: HideToken) {
        let before = self.timers.len();
        self.timers.retain(|(t, _)| *t != token);
        if self.timers.len() != before {
            self.cancelled.push(token);
        }
    }
}
