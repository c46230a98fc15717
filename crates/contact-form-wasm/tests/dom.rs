//! Browser tests: mount onto rendered markup and drive real DOM events
//!
//! Run with `wasm-pack test --headless --firefox crates/contact-form-wasm`.

#![cfg(target_arch = "wasm32")]

use contact_form_core::markup::contact_form;
use contact_form_core::{ElementIds, FormConfig};
use contact_form_wasm::{mount, mount_on_ready, MountError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn render(ids: &ElementIds) {
    document()
        .body()
        .unwrap()
        .set_inner_html(&contact_form(ids).into_string());
}

fn input(id: &str) -> HtmlInputElement {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
}

fn element(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn text(id: &str) -> String {
    element(id).text_content().unwrap_or_default()
}

fn blur(id: &str) {
    input(id).dispatch_event(&Event::new("blur").unwrap()).unwrap();
}

/// Dispatch a cancelable submit on the form, as the browser does
fn submit_event(form_id: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    element(form_id).dispatch_event(&event).unwrap();
    event
}

fn ready() {
    document()
        .dispatch_event(&Event::new("DOMContentLoaded").unwrap())
        .unwrap();
}

fn success_display() -> String {
    element("successMessage")
        .style()
        .get_property_value("display")
        .unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn fill(name: &str, email: &str, password: &str, confirm: &str) {
    input("name").set_value(name);
    input("email").set_value(email);
    input("password").set_value(password);
    input("confirmPassword").set_value(confirm);
}

#[wasm_bindgen_test]
fn test_missing_element_reported() {
    document().body().unwrap().set_inner_html("");
    match mount(FormConfig::default()) {
        Err(MountError::MissingElement(id)) => assert_eq!(id, "contactForm"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("mounted without a form"),
    }
}

#[wasm_bindgen_test]
fn test_blur_shows_inline_error() {
    render(&ElementIds::default());
    let _form = mount(FormConfig::default()).unwrap();

    blur("email");
    assert_eq!(text("emailError"), "Email Address is required.");
    assert!(element("email").class_list().contains("invalid"));
    assert_eq!(text("nameError"), "");

    input("email").set_value("a@b.com");
    blur("email");
    assert_eq!(text("emailError"), "");
    assert!(element("email").class_list().contains("valid"));
    assert!(!element("email").class_list().contains("invalid"));
}

#[wasm_bindgen_test]
fn test_rejected_submit_focuses_first_invalid() {
    render(&ElementIds::default());
    let form = mount(FormConfig::default()).unwrap();

    fill("Jo", "a@b.com", "short", "short");
    assert!(!form.submit());
    assert_eq!(text("passwordError"), "Password must be at least 8 characters long.");
    assert_eq!(
        form.field_error("password").as_deref(),
        Some("Password must be at least 8 characters long.")
    );

    let active = document().active_element().unwrap();
    assert_eq!(active.id(), "password");
}

#[wasm_bindgen_test]
fn test_accepted_submit_shows_success_and_resets() {
    render(&ElementIds::default());
    let form = mount(FormConfig::default()).unwrap();

    fill("Jo", "a@b.com", "12345678", "12345678");
    assert!(form.submit());

    assert_eq!(text("successMessage"), "Thank you, Jo! Your message has been sent.");
    let display = element("successMessage")
        .style()
        .get_property_value("display")
        .unwrap();
    assert_eq!(display, "block");

    assert_eq!(input("name").value(), "");
    assert_eq!(input("confirmPassword").value(), "");
    assert!(!element("name").class_list().contains("valid"));
}

#[wasm_bindgen_test]
fn test_unmount_detaches_listeners() {
    render(&ElementIds::default());
    let mut form = mount(FormConfig::default()).unwrap();
    form.unmount();
    assert!(!form.is_mounted());

    blur("name");
    assert_eq!(text("nameError"), "");
    assert!(!form.submit());
}

#[wasm_bindgen_test]
fn test_custom_element_ids() {
    let mut config = FormConfig::default();
    config.elements.form = "signup".to_string();
    config.elements.name_error = "fullNameError".to_string();
    render(&config.elements);

    let _form = mount(config).unwrap();
    blur("name");
    assert_eq!(text("fullNameError"), "Full Name is required.");
}

#[wasm_bindgen_test]
fn test_submit_event_default_prevented_when_rejected() {
    render(&ElementIds::default());
    let _form = mount(FormConfig::default()).unwrap();

    fill("", "a@b.com", "12345678", "12345678");
    let event = submit_event("contactForm");
    assert!(event.default_prevented());
    assert_eq!(text("nameError"), "Full Name is required.");
    assert_eq!(document().active_element().unwrap().id(), "name");
}

#[wasm_bindgen_test]
fn test_submit_event_default_prevented_when_accepted() {
    render(&ElementIds::default());
    let _form = mount(FormConfig::default()).unwrap();

    fill("Jo", "a@b.com", "12345678", "12345678");
    let event = submit_event("contactForm");
    assert!(event.default_prevented());
    assert_eq!(text("successMessage"), "Thank you, Jo! Your message has been sent.");
    assert_eq!(input("name").value(), "");
}

#[wasm_bindgen_test]
async fn test_success_hides_after_delay() {
    render(&ElementIds::default());
    let mut config = FormConfig::default();
    config.success.hide_delay_ms = 100;
    let form = mount(config).unwrap();

    fill("Jo", "a@b.com", "12345678", "12345678");
    submit_event("contactForm");
    assert_eq!(success_display(), "block");
    assert!(form.hide_pending());

    sleep(250).await;
    assert_eq!(success_display(), "none");
    assert!(!form.hide_pending());
}

#[wasm_bindgen_test]
async fn test_resubmit_restarts_hide_timer() {
    render(&ElementIds::default());
    let mut config = FormConfig::default();
    config.success.hide_delay_ms = 300;
    let form = mount(config).unwrap();

    fill("Jo", "a@b.com", "12345678", "12345678");
    submit_event("contactForm");
    sleep(150).await;

    fill("Al", "al@b.com", "abcdefgh", "abcdefgh");
    submit_event("contactForm");
    assert_eq!(text("successMessage"), "Thank you, Al! Your message has been sent.");

    // the first timer would have fired by now
    sleep(200).await;
    assert_eq!(success_display(), "block");

    sleep(250).await;
    assert_eq!(success_display(), "none");
    assert!(!form.hide_pending());
}

#[wasm_bindgen_test]
async fn test_unmount_cancels_pending_hide() {
    render(&ElementIds::default());
    let mut config = FormConfig::default();
    config.success.hide_delay_ms = 100;
    let mut form = mount(config).unwrap();

    fill("Jo", "a@b.com", "12345678", "12345678");
    submit_event("contactForm");
    form.unmount();

    sleep(250).await;
    assert_eq!(success_display(), "block");
}

#[wasm_bindgen_test]
fn test_mount_waits_for_dom_content_loaded() {
    render(&ElementIds::default());
    let form = mount_on_ready(FormConfig::default()).unwrap();
    assert!(form.is_waiting());
    assert!(!form.is_mounted());

    blur("name");
    assert_eq!(text("nameError"), "");

    ready();
    assert!(form.is_mounted());
    assert!(!form.is_waiting());
    blur("name");
    assert_eq!(text("nameError"), "Full Name is required.");

    // a second event does not attach twice
    ready();
    assert_eq!(form.mount_error(), None);
}

#[wasm_bindgen_test]
fn test_unmount_before_ready_attaches_nothing() {
    render(&ElementIds::default());
    let mut form = mount_on_ready(FormConfig::default()).unwrap();
    form.unmount();
    assert!(!form.is_waiting());

    ready();
    assert!(!form.is_mounted());
    blur("name");
    assert_eq!(text("nameError"), "");
}

#[wasm_bindgen_test]
fn test_deferred_mount_reports_missing_element() {
    document().body().unwrap().set_inner_html("");
    let form = mount_on_ready(FormConfig::default()).unwrap();

    ready();
    assert!(!form.is_mounted());
    assert!(!form.is_waiting());
    assert_eq!(
        form.mount_error().as_deref(),
        Some("element #contactForm not found")
    );
}
