// Host-side tests for page start-up ordering.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod boot {
    include!("../src/core/boot.rs");
}

use boot::*;
use std::cell::RefCell;

#[test]
fn failing_section_does_not_stop_later_ones() {
    let ran = RefCell::new(Vec::new());
    let steps: Vec<BootStep<'_, String>> = vec![
        step("nav", || {
            ran.borrow_mut().push("nav");
            Ok(())
        }),
        step("reveal", || {
            ran.borrow_mut().push("reveal");
            Err("IntersectionObserver unavailable".to_string())
        }),
        step("projects", || {
            ran.borrow_mut().push("projects");
            Ok(())
        }),
        step("background", || {
            ran.borrow_mut().push("background");
            Ok(())
        }),
    ];

    let failed = run_steps(steps);
    assert_eq!(failed, ["reveal"]);
    assert_eq!(*ran.borrow(), ["nav", "reveal", "projects", "background"]);
}

#[test]
fn every_failure_is_reported_in_order() {
    let steps: Vec<BootStep<'_, &str>> = vec![
        step("typing", || Err("no element")),
        step("contact", || Ok(())),
        step("reveal", || Err("observer")),
    ];
    assert_eq!(run_steps(steps), ["typing", "reveal"]);
}

#[test]
fn no_steps_no_failures() {
    assert!(run_steps::<String>(Vec::new()).is_empty());
}
