// File: src/dom.rs
// Purpose: FormView over the live page elements

use contact_form_core::{ElementIds, FieldId, FieldStatus, FormView};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::error::MountError;

/// An input slot: `<input>` or `<textarea>`
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn value(&self) -> String {
        match self {
            Control::Input(el) => el.value(),
            Control::TextArea(el) => el.value(),
        }
    }

    fn element(&self) -> &HtmlElement {
        match self {
            Control::Input(el) => el.as_ref(),
            Control::TextArea(el) => el.as_ref(),
        }
    }
}

/// The contact form's elements, resolved once at mount
pub struct DomView {
    form: HtmlFormElement,
    controls: Vec<(FieldId, Control)>,
    errors: Vec<(FieldId, HtmlElement)>,
    success: HtmlElement,
}

impl DomView {
    /// Look up every element in `ids`. Fails on the first one missing.
    pub fn resolve(document: &Document, ids: &ElementIds) -> Result<Self, MountError> {
        let form = element::<HtmlFormElement>(document, &ids.form, "a <form>")?;

        let mut controls = Vec::with_capacity(FieldId::ALL.len());
        for field in FieldId::ALL {
            controls.push((field, control(document, ids.input(field))?));
        }

        let mut errors = Vec::with_capacity(FieldId::VALIDATED.len());
        for field in FieldId::VALIDATED {
            if let Some(id) = ids.error(field) {
                errors.push((field, element::<HtmlElement>(document, id, "an HTML element")?));
            }
        }

        let success = element::<HtmlElement>(document, &ids.success_message, "an HTML element")?;
        // Must exist even though nothing listens on it
        element::<HtmlElement>(document, &ids.submit_button, "an HTML element")?;

        Ok(Self {
            form,
            controls,
            errors,
            success,
        })
    }

    pub fn form_target(&self) -> &EventTarget {
        &self.form
    }

    /// Event target of a field's control
    pub fn field_target(&self, field: FieldId) -> Option<&EventTarget> {
        self.control(field)
            .map(|c| AsRef::<EventTarget>::as_ref(c.element()))
    }

    fn control(&self, field: FieldId) -> Option<&Control> {
        self.controls
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, c)| c)
    }

    fn error_element(&self, field: FieldId) -> Option<&HtmlElement> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, el)| el)
    }

    fn set_success_display(&self, display: &str) {
        if let Err(err) = self.success.style().set_property("display", display) {
            warn!("failed to set success display: {:?}", err);
        }
    }
}

impl FormView for DomView {
    fn value(&self, field: FieldId) -> String {
        self.control(field).map(Control::value).unwrap_or_default()
    }

    fn set_error_text(&mut self, field: FieldId, text: &str) {
        if let Some(el) = self.error_element(field) {
            el.set_text_content(Some(text));
        }
    }

    fn set_status(&mut self, field: FieldId, status: FieldStatus) {
        let Some(control) = self.control(field) else {
            return;
        };
        let classes = control.element().class_list();

        let result = match status {
            FieldStatus::Valid => classes
                .remove_1(FieldStatus::INVALID_CLASS)
                .and_then(|_| classes.add_1(FieldStatus::VALID_CLASS)),
            FieldStatus::Invalid => classes
                .remove_1(FieldStatus::VALID_CLASS)
                .and_then(|_| classes.add_1(FieldStatus::INVALID_CLASS)),
            FieldStatus::Untouched => {
                classes.remove_2(FieldStatus::VALID_CLASS, FieldStatus::INVALID_CLASS)
            }
        };
        if let Err(err) = result {
            warn!(field = %field, "failed to update classes: {:?}", err);
        }
    }

    fn focus(&mut self, field: FieldId) {
        if let Some(control) = self.control(field) {
            if let Err(err) = control.element().focus() {
                warn!(field = %field, "failed to focus: {:?}", err);
            }
        }
    }

    fn show_success(&mut self, text: &str) {
        self.success.set_text_content(Some(text));
        self.set_success_display("block");
    }

    fn hide_success(&mut self) {
        self.set_success_display("none");
    }

    fn reset_values(&mut self) {
        self.form.reset();
    }
}

fn element<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| MountError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

fn control(document: &Document, id: &str) -> Result<Control, MountError> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))?;

    let el = match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Ok(Control::Input(input)),
        Err(el) => el,
    };
    el.dyn_into::<HtmlTextAreaElement>()
        .map(Control::TextArea)
        .map_err(|_: web_sys::Element| MountError::WrongElementType {
            id: id.to_string(),
            expected: "an <input> or <textarea>",
        })
}
