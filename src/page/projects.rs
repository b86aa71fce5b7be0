use crate::constants::*;
use crate::core::ProjectFilter;
use crate::dom;
use std::rc::Rc;
use web_sys as web;

pub fn wire(document: &web::Document) {
    let buttons = Rc::new(dom::query_all(document, FILTER_BUTTON_SELECTOR));
    let cards = Rc::new(dom::query_all(document, PROJECT_CARD_SELECTOR));
    for button in buttons.iter() {
        let all_buttons = buttons.clone();
        let cards = cards.clone();
        let clicked = button.clone();
        dom::add_click_listener(button, move || {
            for b in all_buttons.iter() {
                _ = b.class_list().remove_1("active");
            }
            _ = clicked.class_list().add_1("active");
            let value = clicked.get_attribute("data-filter");
            apply_filter(&ProjectFilter::from_attribute(value.as_deref()), &cards);
        });
    }
}

fn apply_filter(filter: &ProjectFilter, cards: &[web::Element]) {
    let mut shown = 0usize;
    for card in cards {
        let card_el = card.clone();
        if filter.matches(card.get_attribute("data-category").as_deref()) {
            shown += 1;
            dom::set_style(card, "display", "block");
            dom::set_timeout(FILTER_SHOW_DELAY_MS, move || {
                dom::set_style(&card_el, "opacity", "1");
                dom::set_style(&card_el, "transform", "scale(1)");
            });
        } else {
            dom::set_style(card, "opacity", "0");
            dom::set_style(card, "transform", "scale(0.8)");
            dom::set_timeout(FILTER_HIDE_DELAY_MS, move || {
                dom::set_style(&card_el, "display", "none");
            });
        }
    }
    log::debug!("[page] filter {:?}: {}/{} projects", filter, shown, cards.len());
}
