use super::Listener;
use crate::background::Scene;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over `container` for the field drawn on `canvas`.
///
/// The canvas itself has `pointer-events: none`, so the listeners sit on the
/// container and positions are made canvas-local from the canvas rect.
pub fn wire_pointer(
    container: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Vec<Listener> {
    let target: &web::EventTarget = container.as_ref();
    [
        wire_mousemove(target, canvas, scene),
        wire_release(target, "mouseleave", scene),
        wire_touchmove(target, canvas, scene),
        wire_release(target, "touchend", scene),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn wire_mousemove(
    target: &web::EventTarget,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Option<Listener> {
    let canvas = canvas.clone();
    let scene = scene.clone();
    Listener::attach(target, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = input::mouse_canvas_px(ev, &canvas);
        scene.borrow_mut().field.set_pointer(pos);
    })
}

fn wire_touchmove(
    target: &web::EventTarget,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Option<Listener> {
    let canvas = canvas.clone();
    let scene = scene.clone();
    Listener::attach(target, "touchmove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(pos) = input::touch_canvas_px(ev, &canvas) {
            scene.borrow_mut().field.set_pointer(pos);
        }
    })
}

fn wire_release(
    target: &web::EventTarget,
    kind: &'static str,
    scene: &Rc<RefCell<Scene>>,
) -> Option<Listener> {
    let scene = scene.clone();
    Listener::attach(target, kind, move |_ev: web::Event| {
        scene.borrow_mut().field.clear_pointer();
    })
}
