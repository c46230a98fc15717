// File: src/validator.rs
// Purpose: Per-form validation context: field validators, trigger policy, submission

use tracing::{debug, info};

use crate::config::FormConfig;
use crate::error::FieldError;
use crate::field::{FieldId, FieldStatus};
use crate::string::is_blank;
use crate::view::{FormView, HideToken, Scheduler};

/// Last known validation state of one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub status: FieldStatus,
    /// Empty unless `status` is [`FieldStatus::Invalid`]
    pub error: String,
}

impl FieldSnapshot {
    pub fn is_valid(&self) -> bool {
        self.status != FieldStatus::Invalid
    }
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields passed; the success message shows `message`
    Accepted { message: String },
    /// At least one field failed; `focus` is the first failure in validator order
    Rejected {
        focus: FieldId,
        errors: Vec<FieldError>,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Validation context for one mounted contact form
///
/// Created when the form view mounts and dropped when it unmounts. All
/// handlers are synchronous and expect to be called from the single event
/// loop that owns the view.
pub struct FormValidator<V, S> {
    view: V,
    scheduler: S,
    config: FormConfig,
    fields: [FieldSnapshot; 4],
    pending_hide: Option<HideToken>,
    next_token: u64,
}

impl<V: FormView, S: Scheduler> FormValidator<V, S> {
    pub fn new(view: V, scheduler: S, config: FormConfig) -> Self {
        Self {
            view,
            scheduler,
            config,
            fields: Default::default(),
            pending_hide: None,
            next_token: 0,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn into_parts(self) -> (V, S) {
        (self.view, self.scheduler)
    }

    /// Last validation state of a field, `None` for the message field
    pub fn snapshot(&self, field: FieldId) -> Option<&FieldSnapshot> {
        field.slot().map(|slot| &self.fields[slot])
    }

    /// Token of the hide timer currently running, if any
    pub fn pending_hide(&self) -> Option<HideToken> {
        self.pending_hide
    }

    pub fn validate_name(&mut self) -> bool {
        self.validate(FieldId::Name)
    }

    pub fn validate_email(&mut self) -> bool {
        self.validate(FieldId::Email)
    }

    pub fn validate_password(&mut self) -> bool {
        self.validate(FieldId::Password)
    }

    pub fn validate_confirm_password(&mut self) -> bool {
        self.validate(FieldId::ConfirmPassword)
    }

    /// Run one field's validator and update its display. The message field
    /// is always valid and never touched.
    pub fn validate(&mut self, field: FieldId) -> bool {
        self.apply(field).is_ok()
    }

    fn apply(&mut self, field: FieldId) -> Result<(), FieldError> {
        let Some(slot) = field.slot() else {
            return Ok(());
        };

        let result = self.view.values().check(field, &self.config.validation);
        let snapshot = &mut self.fields[slot];

        match &result {
            Ok(()) => {
                snapshot.status = FieldStatus::Valid;
                snapshot.error.clear();
                self.view.set_error_text(field, "");
                self.view.set_status(field, FieldStatus::Valid);
                debug!(field = %field, "field valid");
            }
            Err(error) => {
                snapshot.status = FieldStatus::Invalid;
                snapshot.error = error.to_string();
                self.view.set_error_text(field, &snapshot.error);
                self.view.set_status(field, FieldStatus::Invalid);
                debug!(field = %field, error = %error, "field invalid");
            }
        }
        result
    }

    /// A field lost focus
    pub fn on_blur(&mut self, field: FieldId) {
        match field {
            FieldId::Message => {}
            FieldId::Password => {
                self.validate_password();
                // Only re-check a confirmation the user has typed
                if !is_blank(&self.view.value(FieldId::ConfirmPassword)) {
                    self.validate_confirm_password();
                }
            }
            other => {
                self.validate(other);
            }
        }
    }

    /// The form was submitted. The host must suppress the default submission.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.cancel_pending_hide();

        let mut errors = Vec::new();
        let mut focus = None;
        for field in FieldId::VALIDATED {
            if let Err(error) = self.apply(field) {
                focus.get_or_insert(field);
                errors.push(error);
            }
        }

        match focus {
            None => self.accept(),
            Some(focus) => {
                self.view.hide_success();
                self.view.focus(focus);
                info!(focus = %focus, failures = errors.len(), "submission rejected");
                SubmitOutcome::Rejected { focus, errors }
            }
        }
    }

    /// A hide timer fired. Returns false when `token` is stale.
    pub fn hide_elapsed(&mut self, token: HideToken) -> bool {
        if self.pending_hide != Some(token) {
            debug!(token = token.0, "ignoring stale hide timer");
            return false;
        }
        self.pending_hide = None;
        self.view.hide_success();
        debug!(token = token.0, "success message hidden");
        true
    }

    /// Cancel the running hide timer, leaving the success message as it is
    pub fn cancel_pending_hide(&mut self) {
        if let Some(token) = self.pending_hide.take() {
            self.scheduler.cancel_hide(token);
            debug!(token = token.0, "cancelled hide timer");
        }
    }

    fn accept(&mut self) -> SubmitOutcome {
        let name = self.view.value(FieldId::Name);
        let message = self.config.success.render(&name);

        self.view.show_success(&message);
        self.view.reset_values();
        for field in FieldId::VALIDATED {
            self.view.set_status(field, FieldStatus::Untouched);
            self.view.set_error_text(field, "");
        }
        self.fields = Default::default();

        let token = HideToken(self.next_token);
        self.next_token += 1;
        self.scheduler.schedule_hide(token, self.config.success.hide_delay());
        self.pending_hide = Some(token);

        info!(token = token.0, "submission accepted");
        SubmitOutcome::Accepted { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{ManualScheduler, MemoryView};

    fn validator() -> FormValidator<MemoryView, ManualScheduler> {
        FormValidator::new(MemoryView::new(), ManualScheduler::new(), FormConfig::default())
    }

    #[test]
    fn test_invalid_sets_error_and_class() {
        let mut form = validator();
        assert!(!form.validate_name());
        assert_eq!(form.view().error_text(FieldId::Name), "Full Name is required.");
        assert_eq!(form.view().status(FieldId::Name), FieldStatus::Invalid);

        let snapshot = form.snapshot(FieldId::Name).unwrap();
        assert!(!snapshot.is_valid());
        assert_eq!(snapshot.error, "Full Name is required.");
    }

    #[test]
    fn test_valid_clears_error() {
        let mut form = validator();
        form.validate_email();
        form.view_mut().set_value(FieldId::Email, "a@b.com");
        assert!(form.validate_email());
        assert_eq!(form.view().error_text(FieldId::Email), "");
        assert_eq!(form.view().status(FieldId::Email), FieldStatus::Valid);
        assert_eq!(form.snapshot(FieldId::Email).unwrap().error, "");
    }

    #[test]
    fn test_message_is_never_validated() {
        let mut form = validator();
        assert!(form.validate(FieldId::Message));
        form.on_blur(FieldId::Message);
        assert!(form.snapshot(FieldId::Message).is_none());
        assert_eq!(form.view().status(FieldId::Message), FieldStatus::Untouched);
    }

    #[test]
    fn test_configured_min_length() {
        let mut config = FormConfig::default();
        config.validation.password_min_length = 12;
        let mut form = FormValidator::new(MemoryView::new(), ManualScheduler::new(), config);
        form.view_mut().set_value(FieldId::Password, "12345678");
        assert!(!form.validate_password());
        assert_eq!(
            form.view().error_text(FieldId::Password),
            "Password must be at least 12 characters long."
        );
    }

    #[test]
    fn test_stale_token_ignored() {
        let mut form = validator();
        assert!(!form.hide_elapsed(HideToken(42)));
        assert_eq!(form.pending_hide(), None);
    }
}
