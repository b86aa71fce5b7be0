use crate::constants::*;
use crate::dom;
use web_sys as web;

const KEYFRAMES_ID: &str = "notification-keyframes";
const KEYFRAMES_CSS: &str = "@keyframes slideInRight { from { transform: translateX(400px); opacity: 0; } to { transform: translateX(0); opacity: 1; } } \
@keyframes slideOutRight { from { transform: translateX(0); opacity: 1; } to { transform: translateX(400px); opacity: 0; } }";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    fn name(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Success => "check-circle",
            Tone::Error => "exclamation-circle",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Tone::Success => NOTIFY_SUCCESS_BG,
            Tone::Error => NOTIFY_ERROR_BG,
        }
    }
}

/// Show a toast in the top-right corner; it slides out on its own.
pub fn notify(document: &web::Document, message: &str, tone: Tone) {
    ensure_keyframes(document);
    let (Ok(el), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    el.set_class_name(&format!("notification notification-{}", tone.name()));
    el.set_inner_html(&format!("<i class=\"fas fa-{}\"></i> <span></span>", tone.icon()));
    if let Ok(Some(span)) = el.query_selector("span") {
        span.set_text_content(Some(message));
    }
    _ = el.set_attribute(
        "style",
        &format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 0.5rem; \
             box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); display: flex; \
             align-items: center; gap: 0.75rem; z-index: 9999; \
             animation: slideInRight 0.3s ease; max-width: 400px;",
            tone.background()
        ),
    );
    _ = body.append_child(&el);

    dom::set_timeout(NOTIFY_LIFETIME_MS, move || {
        dom::set_style(&el, "animation", "slideOutRight 0.3s ease");
        dom::set_timeout(NOTIFY_EXIT_MS, move || el.remove());
    });
}

fn ensure_keyframes(document: &web::Document) {
    if document.get_element_by_id(KEYFRAMES_ID).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) else {
        return;
    };
    style.set_id(KEYFRAMES_ID);
    style.set_text_content(Some(KEYFRAMES_CSS));
    _ = head.append_child(&style);
}
