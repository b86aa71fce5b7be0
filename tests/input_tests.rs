// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_point_maps_relative_to_canvas_origin() {
    let origin = Vec2::new(40.0, 120.0);
    assert_eq!(to_local(Vec2::new(140.0, 170.0), origin), Vec2::new(100.0, 50.0));
}

#[test]
fn origin_at_zero_is_identity() {
    let p = Vec2::new(12.5, 7.25);
    assert_eq!(to_local(p, Vec2::ZERO), p);
}

#[test]
fn points_left_or_above_canvas_go_negative() {
    // Page scrolled so the canvas starts below the viewport top.
    let local = to_local(Vec2::new(10.0, 5.0), Vec2::new(30.0, 60.0));
    assert!(local.x < 0.0 && local.y < 0.0);
}
