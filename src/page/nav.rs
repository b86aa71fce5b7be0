use crate::constants::*;
use crate::core::{section_is_active, ScrollState};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct SectionLink {
    section: web::HtmlElement,
    link: web::Element,
}

/// Keep navbar styling, the reading progress bar and the active nav link in
/// step with the scroll position.
pub fn wire(window: &web::Window, document: &web::Document) {
    let navbar = document.get_element_by_id(NAVBAR_ID);
    let progress = document.get_element_by_id(SCROLL_PROGRESS_ID);
    let scroll_top = document.get_element_by_id(SCROLL_TOP_ID);
    let sections: Vec<SectionLink> = dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let selector = format!(".nav-link[href=\"#{}\"]", el.id());
            let link = document.query_selector(&selector).ok().flatten()?;
            let section = el.dyn_into::<web::HtmlElement>().ok()?;
            Some(SectionLink { section, link })
        })
        .collect();

    let win = window.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let offset = win.scroll_y().unwrap_or(0.0);
        let (scroll_height, client_height) = doc
            .document_element()
            .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
            .unwrap_or_default();
        let state = ScrollState::measure(offset, scroll_height, client_height);

        toggle_class(navbar.as_ref(), "scrolled", state.scrolled);
        toggle_class(scroll_top.as_ref(), "visible", state.show_scroll_top);
        if let Some(bar) = &progress {
            dom::set_style(bar, "width", &format!("{}%", state.progress));
        }
        for s in &sections {
            let active = section_is_active(
                offset,
                s.section.offset_top() as f64,
                s.section.offset_height() as f64,
            );
            toggle_class(Some(&s.link), "active", active);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
fn toggle_class(el: Option<&web::Element>, class: &str, on: bool) {
    if let Some(el) = el {
        _ = el.class_list().toggle_with_force(class, on);
    }
}
