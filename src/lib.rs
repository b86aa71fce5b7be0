#![cfg(target_arch = "wasm32")]
use crate::constants::{ACCENT_CSS_VAR, PARTICLES_CONTAINER_ID, REDUCED_MOTION_QUERY};
use crate::core::{run_steps, step, BootStep, FieldOptions};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod page;
mod render;

pub use background::ParticleBackground;

thread_local! {
    // The page-level backdrop lives for as long as the page does.
    static PAGE_BACKGROUND: RefCell<Option<ParticleBackground>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let steps: Vec<BootStep<'_, anyhow::Error>> = vec![
        step("nav", || {
            page::nav::wire(&window, &document);
            Ok(())
        }),
        step("typing", || {
            page::typing::start(&document);
            Ok(())
        }),
        step("reveal", || page::reveal::wire(&document)),
        step("projects", || {
            page::projects::wire(&document);
            Ok(())
        }),
        step("contact", || {
            page::contact::wire(&document);
            Ok(())
        }),
    ];
    let failed = run_steps(steps);
    if !failed.is_empty() {
        log::warn!("[page] continuing without: {}", failed.join(", "));
    }

    // The backdrop mounts whatever happened to the sections above.
    mount_background(&window, &document);
    Ok(())
}

fn mount_background(window: &web::Window, document: &web::Document) {
    if prefers_reduced_motion(window) {
        log::info!("[particles] reduced motion preferred; background disabled");
        return;
    }
    let accent = document
        .document_element()
        .and_then(|root| window.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value(ACCENT_CSS_VAR).ok());
    let options = FieldOptions {
        particle_color: accent,
        ..FieldOptions::default()
    };
    let background = ParticleBackground::with_config(PARTICLES_CONTAINER_ID, options.resolve());
    PAGE_BACKGROUND.with(|slot| *slot.borrow_mut() = Some(background));
}

fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}
