// File: src/mount.rs
// Purpose: Attach the validator to the page and detach it again

use std::cell::RefCell;
use std::rc::Rc;

use contact_form_core::{FieldId, FormConfig, FormValidator};
use tracing::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::dom::DomView;
use crate::error::MountError;
use crate::logging;
use crate::scheduler::{SharedForm, WindowScheduler};

const READY_EVENT: &str = "DOMContentLoaded";

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn detach(&self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!(event = self.event, "failed to remove listener: {:?}", err);
        }
    }
}

/// Everything a handle owns. Shared with the ready listener.
#[derive(Default)]
struct Mounted {
    form: Option<SharedForm>,
    listeners: Vec<Listener>,
    // Kept after firing; a closure cannot be dropped while it runs
    ready: Option<Listener>,
    error: Option<String>,
}

impl Mounted {
    /// Resolve the page elements and attach blur and submit listeners
    fn attach(&mut self, config: FormConfig) -> Result<(), MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let view = DomView::resolve(&document, &config.elements)?;
        let ids = config.elements.clone();
        let form: SharedForm = Rc::new_cyclic(|weak| {
            RefCell::new(FormValidator::new(
                view,
                WindowScheduler::new(window, weak.clone()),
                config,
            ))
        });
        self.form = Some(form.clone());

        for field in FieldId::VALIDATED {
            let target = form
                .borrow()
                .view()
                .field_target(field)
                .cloned()
                .ok_or_else(|| MountError::MissingElement(ids.input(field).to_string()))?;

            let shared = form.clone();
            let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                match shared.try_borrow_mut() {
                    Ok(mut form) => form.on_blur(field),
                    Err(_) => warn!(field = %field, "form busy, blur ignored"),
                };
            });
            self.listen(target, ids.input(field), "blur", callback)?;
        }

        let target = form.borrow().view().form_target().clone();
        let shared = form.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            match shared.try_borrow_mut() {
                Ok(mut form) => {
                    form.on_submit();
                }
                Err(_) => warn!("form busy, submit ignored"),
            };
        });
        self.listen(target, &ids.form, "submit", callback)?;

        info!(form = %ids.form, "contact form mounted");
        Ok(())
    }

    fn listen(
        &mut self,
        target: EventTarget,
        id: &str,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), MountError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| MountError::Listener {
                id: id.to_string(),
                event,
            })?;
        self.listeners.push(Listener {
            target,
            event,
            callback,
        });
        Ok(())
    }

    /// Detach form listeners and drop the validator. Leaves `ready` alone.
    fn release(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        if let Some(form) = self.form.take() {
            if let Ok(mut form) = form.try_borrow_mut() {
                form.cancel_pending_hide();
            }
            info!("contact form unmounted");
        }
    }
}

/// A mounted contact form
///
/// Listeners stay attached until `unmount()` is called or the handle is freed.
#[wasm_bindgen]
pub struct ContactFormHandle {
    inner: Rc<RefCell<Mounted>>,
}

/// Attach validation to the contact form on the current page
///
/// While the document is still loading, attaching waits for
/// `DOMContentLoaded`; a failure at that point is logged and reported by
/// `mountError()`.
///
/// # Example (JavaScript)
/// ```javascript
/// const form = mountContactForm({ success: { hide_delay_ms: 3000 } });
/// // later
/// form.unmount();
/// ```
#[wasm_bindgen(js_name = mountContactForm)]
pub fn mount_contact_form(config: JsValue) -> Result<ContactFormHandle, JsValue> {
    let config = parse_config(config)?;
    Ok(mount(config)?)
}

/// Read a config object from JS; `undefined` and `null` mean defaults
pub fn parse_config(config: JsValue) -> Result<FormConfig, MountError> {
    if config.is_undefined() || config.is_null() {
        return Ok(FormConfig::default());
    }
    let config: FormConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| MountError::Config(e.to_string()))?;
    config
        .validate()
        .map_err(|e| MountError::Config(e.to_string()))?;
    Ok(config)
}

/// Attach now if the page structure is ready, otherwise on `DOMContentLoaded`
pub fn mount(config: FormConfig) -> Result<ContactFormHandle, MountError> {
    logging::init(tracing::Level::INFO);

    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    if document.ready_state() == "loading" {
        return mount_on_ready(config);
    }

    let handle = ContactFormHandle::empty();
    handle.inner.borrow_mut().attach(config)?;
    Ok(handle)
}

/// Attach the next time `DOMContentLoaded` fires on the document
pub fn mount_on_ready(config: FormConfig) -> Result<ContactFormHandle, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let target: EventTarget = window.document().ok_or(MountError::NoDocument)?.into();

    let handle = ContactFormHandle::empty();
    let weak = Rc::downgrade(&handle.inner);
    let mut config = Some(config);

    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let Some(config) = config.take() else {
            return;
        };
        let Ok(mut mounted) = inner.try_borrow_mut() else {
            warn!("form busy, {} ignored", READY_EVENT);
            return;
        };
        if let Some(ready) = &mounted.ready {
            ready.detach();
        }
        if let Err(err) = mounted.attach(config) {
            error!("failed to mount contact form: {}", err);
            mounted.release();
            mounted.error = Some(err.to_string());
        }
    });

    target
        .add_event_listener_with_callback(READY_EVENT, callback.as_ref().unchecked_ref())
        .map_err(|_| MountError::Listener {
            id: "document".to_string(),
            event: READY_EVENT,
        })?;
    handle.inner.borrow_mut().ready = Some(Listener {
        target,
        event: READY_EVENT,
        callback,
    });

    info!("contact form waiting for {}", READY_EVENT);
    Ok(handle)
}

impl ContactFormHandle {
    fn empty() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Mounted::default())),
        }
    }

    fn form(&self) -> Option<SharedForm> {
        self.inner.try_borrow().ok()?.form.clone()
    }
}

#[wasm_bindgen]
impl ContactFormHandle {
    /// Detach every listener and cancel a pending success hide
    pub fn unmount(&mut self) {
        let Ok(mut mounted) = self.inner.try_borrow_mut() else {
            warn!("form busy, unmount skipped");
            return;
        };
        mounted.release();
        if let Some(ready) = mounted.ready.take() {
            ready.detach();
        }
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.form().is_some()
    }

    /// True while waiting for `DOMContentLoaded`
    #[wasm_bindgen(js_name = isWaiting)]
    pub fn is_waiting(&self) -> bool {
        self.inner
            .try_borrow()
            .map(|m| m.ready.is_some() && m.form.is_none() && m.error.is_none())
            .unwrap_or(false)
    }

    /// Why a deferred mount failed, if it did
    #[wasm_bindgen(js_name = mountError)]
    pub fn mount_error(&self) -> Option<String> {
        self.inner.try_borrow().ok()?.error.clone()
    }

    /// Run the submission handler as if the form were submitted.
    /// Returns whether every field passed.
    pub fn submit(&self) -> bool {
        let Some(form) = self.form() else {
            return false;
        };
        let accepted = match form.try_borrow_mut() {
            Ok(mut form) => form.on_submit().is_accepted(),
            Err(_) => false,
        };
        accepted
    }

    /// True while a success-message hide timer is running
    #[wasm_bindgen(js_name = hidePending)]
    pub fn hide_pending(&self) -> bool {
        let Some(form) = self.form() else {
            return false;
        };
        let pending = form
            .try_borrow()
            .map(|f| f.pending_hide().is_some())
            .unwrap_or(false);
        pending
    }

    /// Current error text for a field, by input id (e.g. `"confirmPassword"`)
    #[wasm_bindgen(js_name = fieldError)]
    pub fn field_error(&self, field: &str) -> Option<String> {
        let field = FieldId::from_input_id(field)?;
        let form = self.form()?;
        let form = form.try_borrow().ok()?;
        let error = form.snapshot(field).map(|s| s.error.clone());
        error
    }
}

impl Drop for ContactFormHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}
