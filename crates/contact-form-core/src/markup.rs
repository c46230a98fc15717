// File: src/markup.rs
// Purpose: Server-rendered page structure the validator binds to

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Serialize;

use crate::field::{ElementIds, FieldId};

/// Render the contact form with every element id the validator expects
///
/// The success message starts hidden and native browser validation is
/// disabled so the inline errors are the only feedback.
pub fn contact_form(ids: &ElementIds) -> Markup {
    html! {
        form id=(ids.form) novalidate {
            (input_row(ids, FieldId::Name, "text"))
            (input_row(ids, FieldId::Email, "email"))
            (input_row(ids, FieldId::Password, "password"))
            (input_row(ids, FieldId::ConfirmPassword, "password"))
            div.form-group {
                label for=(ids.message) { (FieldId::Message.label()) }
                textarea id=(ids.message) name=(ids.message) rows="5" {}
            }
            button type="submit" id=(ids.submit_button) { "Send Message" }
            div.success-message id=(ids.success_message) style="display: none;" {}
        }
    }
}

fn input_row(ids: &ElementIds, field: FieldId, input_type: &str) -> Markup {
    let id = ids.input(field);
    html! {
        div.form-group {
            label for=(id) { (field.label()) }
            input type=(input_type) id=(id) name=(id);
            @if let Some(error_id) = ids.error(field) {
                span.error-message id=(error_id) {}
            }
        }
    }
}

/// Full page that loads the wasm module from `module_url` and mounts the form
pub fn contact_page(ids: &ElementIds, module_url: &str) -> Markup {
    let bootstrap = format!(
        "import init, {{ mountContactForm }} from {};\n\
         await init();\n\
         window.contactForm = mountContactForm({{ elements: {} }});",
        script_json(module_url, "\"\""),
        script_json(ids, "{}"),
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Contact Us" }
            }
            body {
                h1 { "Contact Us" }
                (contact_form(ids))
                script type="module" { (PreEscaped(bootstrap)) }
            }
        }
    }
}

/// JSON literal safe to embed in a `<script>` body: `<` is escaped so no
/// value can close the element
fn script_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| fallback.to_string())
        .replace('<', "\\u003c")
}
