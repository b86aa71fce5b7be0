use crate::constants::*;
use crate::core::{progress_width, CountUp, RevealOnce};
use crate::dom;
use crate::frame;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fill skill bars and run the stat counters the first time their sections
/// scroll into view.
pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    if let Some(section) = document.get_element_by_id(SKILLS_SECTION_ID) {
        let doc = document.clone();
        observe_once(&section, SKILLS_THRESHOLD, move || fill_skill_bars(&doc))?;
    }
    if let Some(section) = document.get_element_by_id(ABOUT_SECTION_ID) {
        let doc = document.clone();
        observe_once(&section, COUNTERS_THRESHOLD, move || start_counters(&doc))?;
    }
    Ok(())
}

fn observe_once(
    target: &web::Element,
    threshold: f64,
    mut on_reveal: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let mut latch = RevealOnce::default();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .any(|e| e.is_intersecting());
            if visible && latch.trigger() {
                on_reveal();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {:?}", e))?;
    observer.observe(target);
    callback.forget();
    Ok(())
}

fn fill_skill_bars(document: &web::Document) {
    let bars = dom::query_all(document, SKILL_BAR_SELECTOR);
    for bar in &bars {
        let Some(width) = bar
            .get_attribute("data-progress")
            .as_deref()
            .and_then(progress_width)
        else {
            continue;
        };
        dom::set_style(bar, "--progress-width", &width);
        dom::set_style(bar, "width", &width);
    }
    log::debug!("[page] filled {} skill bars", bars.len());
}

fn start_counters(document: &web::Document) {
    for el in dom::query_all(document, COUNTER_SELECTOR) {
        let text = el.text_content().unwrap_or_default();
        if let Some(counter) = CountUp::from_text(&text) {
            run_counter(el, counter);
        }
    }
}

fn run_counter(el: web::Element, mut counter: CountUp) {
    let shown = counter.tick();
    el.set_text_content(Some(&shown.text));
    if !shown.done {
        frame::next_frame(move || run_counter(el, counter));
    }
}
