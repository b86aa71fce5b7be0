use crate::constants::*;
use crate::core::{simulated_submission, ContactMessage, Validation};
use crate::dom;
use crate::overlay::{self, Tone};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let doc = document.clone();
    let form_submit = form.clone();
    let sending = Rc::new(Cell::new(false));

    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        let message = read_message(&doc);
        let validation = message.validate();
        show_validation(&doc, &validation);
        if !validation.is_valid() {
            log::debug!(
                "[contact] rejected: {} invalid fields",
                validation.errors().count()
            );
            return;
        }
        sending.set(true);
        spawn_local(submit(
            doc.clone(),
            form_submit.clone(),
            message,
            sending.clone(),
        ));
    }) as Box<dyn FnMut(web::Event)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn read_message(document: &web::Document) -> ContactMessage {
    ContactMessage {
        name: field_value(document, "name"),
        email: field_value(document, "email"),
        subject: field_value(document, "subject"),
        message: field_value(document, "message"),
    }
}

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn show_validation(document: &web::Document, validation: &Validation) {
    for (field, error) in &validation.results {
        let Some(el) = document.get_element_by_id(field.id()) else {
            continue;
        };
        let slot = el
            .closest(".form-group")
            .ok()
            .flatten()
            .and_then(|group| group.query_selector(".form-error").ok().flatten());
        let (border, text) = match error {
            Some(e) => (ERROR_BORDER_COLOR, e.to_string()),
            None => ("", String::new()),
        };
        dom::set_style(&el, "border-color", border);
        if let Some(slot) = slot {
            slot.set_text_content(Some(&text));
        }
    }
}

async fn submit(
    document: web::Document,
    form: web::HtmlFormElement,
    message: ContactMessage,
    sending: Rc<Cell<bool>>,
) {
    let button = form.query_selector(".btn").ok().flatten();
    let original_label = button.as_ref().map(|b| b.inner_html());
    if let Some(b) = &button {
        b.set_inner_html(SENDING_LABEL_HTML);
        set_disabled(b, true);
    }

    dom::sleep_ms(SUBMIT_DELAY_MS).await;

    match simulated_submission(js_sys::Math::random()) {
        Ok(()) => {
            log::info!("[contact] sent \"{}\"", message.subject.trim());
            overlay::notify(&document, SUCCESS_MESSAGE, Tone::Success);
            form.reset();
        }
        Err(e) => {
            log::warn!("[contact] {}", e);
            overlay::notify(&document, &e.to_string(), Tone::Error);
        }
    }

    if let (Some(b), Some(label)) = (&button, original_label) {
        b.set_inner_html(&label);
        set_disabled(b, false);
    }
    sending.set(false);
}

fn set_disabled(el: &web::Element, disabled: bool) {
    if let Some(button) = el.dyn_ref::<web::HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        _ = el.set_attribute("disabled", "");
    } else {
        _ = el.remove_attribute("disabled");
    }
}
