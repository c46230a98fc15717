// File: src/scheduler.rs
// Purpose: Scheduler backed by window.setTimeout

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use contact_form_core::{FormValidator, HideToken, Scheduler};
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::dom::DomView;

/// A validator mounted on the live page
pub type SharedForm = Rc<RefCell<FormValidator<DomView, WindowScheduler>>>;
type WeakForm = Weak<RefCell<FormValidator<DomView, WindowScheduler>>>;

struct PendingHide {
    token: HideToken,
    timeout_id: i32,
    // Must outlive the timeout
    _callback: Closure<dyn FnMut()>,
}

/// One live `setTimeout` at a time, delivering back into the form
pub struct WindowScheduler {
    window: Window,
    form: WeakForm,
    pending: Option<PendingHide>,
}

impl WindowScheduler {
    pub fn new(window: Window, form: WeakForm) -> Self {
        Self {
            window,
            form,
            pending: None,
        }
    }

    fn clear(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.window.clear_timeout_with_handle(pending.timeout_id);
        }
    }
}

impl Scheduler for WindowScheduler {
    fn schedule_hide(&mut self, token: HideToken, delay: Duration) {
        self.clear();

        let form = self.form.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            let Some(form) = form.upgrade() else {
                return;
            };
            match form.try_borrow_mut() {
                Ok(mut form) => {
                    form.hide_elapsed(token);
                }
                Err(_) => warn!(token = token.0, "form busy, hide timer dropped"),
            };
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(timeout_id) => {
                self.pending = Some(PendingHide {
                    token,
                    timeout_id,
                    _callback: callback,
                });
            }
            Err(err) => warn!(token = token.0, "setTimeout failed: {:?}", err),
        }
    }

    fn cancel_hide(&mut self, token: HideToken) {
        if self.pending.as_ref().is_some_and(|p| p.token == token) {
            self.clear();
        }
    }
}

impl Drop for WindowScheduler {
    fn drop(&mut self) {
        self.clear();
    }
}
