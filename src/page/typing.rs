use crate::constants::{TYPING_ROLES, TYPING_TEXT_ID};
use crate::core::Typewriter;
use crate::dom;
use web_sys as web;

pub fn start(document: &web::Document) {
    let Some(el) = document.get_element_by_id(TYPING_TEXT_ID) else {
        return;
    };
    let Some(writer) = Typewriter::new(TYPING_ROLES) else {
        return;
    };
    type_next(el, writer);
}

fn type_next(el: web::Element, mut writer: Typewriter) {
    let frame = writer.tick();
    el.set_text_content(Some(&frame.text));
    dom::set_timeout(frame.delay_ms as i32, move || type_next(el, writer));
}
