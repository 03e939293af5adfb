//! Browser tests: the DOM host against real elements.
//!
//! Run with `wasm-pack test --headless --firefox crates/nerve-wasm`.

#![cfg(target_arch = "wasm32")]

use nerve_core::{Document, DrawUtil, SurfaceError};
use nerve_wasm::{WebCanvas, WebDocument, bootstrap_page};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> WebDocument {
    WebDocument::current().expect("test runs in a window")
}

/// Append `<tag id=id>` to the body; the caller removes it.
fn mount(tag: &str, id: &str) -> Element {
    let doc = document();
    let el = doc.inner().create_element(tag).unwrap();
    el.set_id(id);
    doc.inner().body().unwrap().append_child(&el).unwrap();
    el
}

fn mount_canvas(id: &str, width: u32, height: u32) -> HtmlCanvasElement {
    let canvas: HtmlCanvasElement = mount("canvas", id).dyn_into().unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

#[wasm_bindgen_test]
fn existing_canvas_size_is_kept() {
    let canvas = mount_canvas("sized", 320, 240);
    let draw: DrawUtil<WebCanvas> = DrawUtil::attach(&document(), "sized");

    assert!(draw.is_ready());
    assert_eq!(draw.size(), Some((320, 240)));
    canvas.remove();
}

#[wasm_bindgen_test]
fn zero_canvas_size_defaults_on_the_element() {
    let canvas = mount_canvas("unsized", 0, 0);
    let draw: DrawUtil<WebCanvas> = DrawUtil::attach(&document(), "unsized");

    assert!(draw.is_ready());
    assert_eq!((canvas.width(), canvas.height()), (400, 400));
    canvas.remove();
}

#[wasm_bindgen_test]
fn non_canvas_element_is_not_a_surface() {
    let div = mount("div", "plain");
    let draw: DrawUtil<WebCanvas> = DrawUtil::attach(&document(), "plain");

    assert_eq!(
        draw.degraded_reason(),
        Some(&SurfaceError::SurfaceNotFound { id: "plain".into() })
    );
    // Still reachable as a text target.
    assert!(document().element("plain").is_some());
    div.remove();
}

#[wasm_bindgen_test]
fn missing_id_degrades() {
    let draw: DrawUtil<WebCanvas> = DrawUtil::attach(&document(), "absent");
    assert!(!draw.is_ready());
    assert_eq!(draw.size(), None);
}

#[wasm_bindgen_test]
fn bootstrap_greets_and_draws_on_the_page() {
    let app = mount("div", "app");
    let canvas = mount_canvas("myCanvas", 0, 0);

    let mut draw = bootstrap_page(&document());

    assert_eq!(app.text_content().as_deref(), Some("hello,world, 1!"));
    assert!(draw.is_ready());
    assert_eq!(draw.size(), Some((400, 400)));
    // Sample shapes leave paint behind; clearing must not throw.
    draw.clear();

    app.remove();
    canvas.remove();
}

#[wasm_bindgen_test]
fn js_class_reports_readiness() {
    let canvas = mount_canvas("jsCanvas", 0, 0);
    let mut util = nerve_wasm::JsDrawUtil::new("jsCanvas");
    assert!(util.ready());
    assert_eq!((util.width(), util.height()), (400, 400));
    util.draw_point(10.0, 10.0, None, None);
    util.draw_arrow(0.0, 0.0, 50.0, 50.0, Some("blue".into()), Some(2.0));
    canvas.remove();

    let missing = nerve_wasm::JsDrawUtil::new("noSuchCanvas");
    assert!(!missing.ready());
    assert_eq!(missing.width(), 0);
}

#[wasm_bindgen_test]
fn small_world_toggles_color() {
    let canvas = mount_canvas("world", 800, 600);
    let mut view = nerve_wasm::JsSmallWorld::new("world");
    assert!(view.ready());
    assert_eq!(view.node_color(), "red");
    view.toggle_color();
    assert_eq!(view.node_color(), "blue");
    canvas.remove();
}
