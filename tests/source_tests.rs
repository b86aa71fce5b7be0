// Host-side checks on the manifest and on wasm-only wiring order that the
// host cannot execute.

const MANIFEST: &str = include_str!("../Cargo.toml");
const BACKGROUND: &str = include_str!("../src/background.rs");

#[test]
fn manifest_is_a_single_package() {
    assert!(MANIFEST.contains("name = \"portfolio-fx\""));
    assert!(!MANIFEST.contains("[workspace"));
    assert!(!MANIFEST.contains("serde-serialize"));
}

#[test]
fn canvas_context_is_acquired_before_attaching() {
    let surface = BACKGROUND
        .find("CanvasSurface::new(&canvas)")
        .expect("surface creation");
    let attach = BACKGROUND
        .find(".append_child(&canvas)")
        .expect("canvas attach");
    assert!(
        surface < attach,
        "a failed 2d context must not leave a canvas in the container"
    );
}

#[test]
fn field_exposes_no_config_accessor() {
    let particles = include_str!("../src/core/particles.rs");
    assert!(!particles.contains("pub fn config("));
}
