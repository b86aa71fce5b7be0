use crate::core::{FieldConfig, FieldOptions, ParticleField};
use crate::dom;
use crate::events::{pointer, Listener};
use crate::frame::FrameLoop;
use crate::render::CanvasSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const OVERLAY_STYLE: [(&str, &str); 6] = [
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
];

/// State touched by the frame callback and the input listeners.
pub struct Scene {
    pub field: ParticleField,
    pub surface: CanvasSurface,
}

struct Live {
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
    frames: FrameLoop,
    listeners: Vec<Listener>,
}

/// Animated particle backdrop mounted into a container element.
///
/// Construction against a missing container yields an inert instance.
#[wasm_bindgen]
pub struct ParticleBackground {
    live: Option<Live>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// `options` is a plain object with camelCase keys (`particleCount`,
    /// `connectDistance`, `interactive`, ...); anything missing is defaulted.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, options: JsValue) -> ParticleBackground {
        Self::with_config(container_id, read_options(&options).resolve())
    }

    /// Stop animating, detach listeners and remove the canvas. Idempotent.
    pub fn destroy(&mut self) {
        let Some(live) = self.live.take() else {
            return;
        };
        live.frames.cancel();
        drop(live.listeners);
        live.canvas.remove();
        live.scene.borrow_mut().field.clear();
        log::info!("[particles] destroyed");
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.live.as_ref().is_some_and(|l| l.frames.is_active())
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.live
            .as_ref()
            .map_or(0, |l| l.scene.borrow().field.len())
    }
}

impl ParticleBackground {
    pub fn with_config(container_id: &str, config: FieldConfig) -> Self {
        let container = dom::window_document()
            .and_then(|d| d.get_element_by_id(container_id))
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let Some(container) = container else {
            log::debug!("[particles] #{} not found; skipping", container_id);
            return Self { live: None };
        };
        match Live::mount(&container, config) {
            Ok(live) => Self { live: Some(live) },
            Err(e) => {
                log::error!("[particles] init error: {:?}", e);
                Self { live: None }
            }
        }
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl Live {
    fn mount(container: &web::HtmlElement, config: FieldConfig) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        for (property, value) in OVERLAY_STYLE {
            dom::set_style(&canvas, property, value);
        }
        // Acquire the context first so a failure leaves nothing in the DOM.
        let surface = CanvasSurface::new(&canvas)?;
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let (w, h) = dom::sync_canvas_to_container(&canvas, container);
        let interactive = config.interactive;
        let field = ParticleField::with_rng(
            config,
            Vec2::new(w as f32, h as f32),
            dom::viewport_width() as f32,
            StdRng::from_entropy(),
        );
        log::info!(
            "[particles] {} particles on {}x{} (interactive={})",
            field.len(),
            w,
            h,
            interactive
        );
        let scene = Rc::new(RefCell::new(Scene { field, surface }));

        let mut listeners = Vec::new();
        listeners.extend(wire_resize(&window, container, &canvas, &scene));
        if interactive {
            listeners.extend(pointer::wire_pointer(container, &canvas, &scene));
        }

        let scene_frame = scene.clone();
        let frames = FrameLoop::start(move || {
            let mut scene = scene_frame.borrow_mut();
            let Scene { field, surface } = &mut *scene;
            field.step(surface);
        });

        Ok(Self {
            canvas,
            scene,
            frames,
            listeners,
        })
    }
}

fn wire_resize(
    window: &web::Window,
    container: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Option<Listener> {
    let container = container.clone();
    let canvas = canvas.clone();
    let scene = scene.clone();
    Listener::attach(window.as_ref(), "resize", move |_ev: web::Event| {
        let (w, h) = dom::sync_canvas_to_container(&canvas, &container);
        let rebuilt = scene
            .borrow_mut()
            .field
            .resize(Vec2::new(w as f32, h as f32), dom::viewport_width() as f32);
        if rebuilt {
            log::debug!("[particles] repopulated after resize to {}x{}", w, h);
        }
    })
}

fn read_options(options: &JsValue) -> FieldOptions {
    if !options.is_object() {
        return FieldOptions::default();
    }
    let get = |key: &str| js_sys::Reflect::get(options, &JsValue::from_str(key)).ok();
    let num = |key: &str| get(key).and_then(|v| v.as_f64());
    let text = |key: &str| get(key).and_then(|v| v.as_string());
    FieldOptions {
        particle_count: num("particleCount"),
        particle_size: num("particleSize"),
        particle_color: text("particleColor"),
        line_color: text("lineColor"),
        particle_opacity: num("particleOpacity"),
        line_opacity: num("lineOpacity"),
        speed: num("speed"),
        connect_distance: num("connectDistance"),
        interactive: get("interactive").and_then(|v| v.as_bool()),
        responsive_breakpoint: num("responsiveBreakpoint"),
    }
}
