use crate::core::FrameGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` driver that calls `on_frame` once per display
/// refresh until [`FrameLoop::cancel`].
///
/// The tick closure only holds a weak reference to itself, so dropping the
/// loop frees it. Do not cancel or drop the loop from inside `on_frame`.
pub struct FrameLoop {
    gate: Rc<RefCell<FrameGate>>,
    _tick: Tick,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let gate = Rc::new(RefCell::new(FrameGate::default()));
        let tick: Tick = Rc::new(RefCell::new(None));

        let gate_tick = gate.clone();
        let tick_weak = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !gate_tick.borrow_mut().enter() {
                return;
            }
            on_frame();
            if let Some(tick) = tick_weak.upgrade() {
                if let Some(handle) = request_frame(&tick) {
                    gate_tick.borrow_mut().scheduled(handle);
                }
            }
        }) as Box<dyn FnMut()>));

        gate.borrow_mut().start();
        if let Some(handle) = request_frame(&tick) {
            gate.borrow_mut().scheduled(handle);
        }
        Self { gate, _tick: tick }
    }

    /// Stop the loop. Safe to call repeatedly or before any frame has run.
    pub fn cancel(&self) {
        let pending = self.gate.borrow_mut().cancel();
        if let (Some(handle), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        log::debug!(
            "[frame] loop cancelled after {} frames",
            self.gate.borrow().frames()
        );
    }

    pub fn is_active(&self) -> bool {
        self.gate.borrow().is_active()
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let callback = Closure::once_into_js(f);
        _ = w.request_animation_frame(callback.unchecked_ref());
    }
}
