//! WASM bridge for nerve — binds the drawing wrapper to the browser canvas.
//!
//! Compiled via `wasm-pack build --target web`. Loading the module runs the
//! page bootstrap once the document is ready; pages can also construct
//! their own `DrawUtil` or `SmallWorld` from JavaScript.

mod console;
mod dom;

pub use dom::{WebCanvas, WebContext, WebDocument, WebElement};

use nerve_core::{
    BootstrapConfig, DrawUtil, Line, LineStyle, Point, PointStyle, SmallWorld, TextStyle,
    run_bootstrap,
};
use std::sync::Once;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    install_hooks();

    let Some(document) = WebDocument::current() else {
        log::error!("no document to bootstrap");
        return;
    };

    // The module usually finishes loading after DOMContentLoaded has fired.
    if document.inner().ready_state() != "loading" {
        bootstrap_page(&document);
        return;
    }

    let ready_doc = document.clone();
    let on_ready = Closure::<dyn FnMut()>::once(move || {
        bootstrap_page(&ready_doc);
    });
    if let Err(err) = document
        .inner()
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::error!("failed to listen for DOMContentLoaded: {err:?}");
        return;
    }
    on_ready.forget();
}

/// Run the page bootstrap with the default ids against `document`.
pub fn bootstrap_page(document: &WebDocument) -> DrawUtil<WebCanvas> {
    run_bootstrap(document, &BootstrapConfig::default())
}

/// Console logging plus panics reported through it, installed once per
/// module instance. A logger set by the host page takes precedence.
fn install_hooks() {
    static HOOKS: Once = Once::new();
    HOOKS.call_once(|| {
        let _ = console::init(log::LevelFilter::Info);
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(|info| log::error!("panicked: {info}")));
    });
}

fn attach_current(canvas_id: &str) -> DrawUtil<WebCanvas> {
    install_hooks();
    match WebDocument::current() {
        Some(document) => DrawUtil::attach(&document, canvas_id),
        None => DrawUtil::detached(canvas_id),
    }
}

/// Canvas drawing wrapper exposed to JavaScript as `DrawUtil`.
#[wasm_bindgen(js_name = DrawUtil)]
pub struct JsDrawUtil {
    inner: DrawUtil<WebCanvas>,
}

#[wasm_bindgen(js_class = DrawUtil)]
impl JsDrawUtil {
    /// Attach to `<canvas id=canvas_id>`. Never throws; check `ready`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> JsDrawUtil {
        Self {
            inner: attach_current(canvas_id),
        }
    }

    /// `true` when draw calls reach a 2D context.
    #[wasm_bindgen(getter)]
    pub fn ready(&self) -> bool {
        self.inner.is_ready()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.size().map_or(0, |(w, _)| w)
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.size().map_or(0, |(_, h)| h)
    }

    /// `drawPoint(x, y, radius = 3, color = 'black')`
    #[wasm_bindgen(js_name = drawPoint)]
    pub fn draw_point(&mut self, x: f64, y: f64, radius: Option<f64>, color: Option<String>) {
        self.inner
            .draw_point(Point::new(x, y), &point_style(radius, color));
    }

    /// `drawLine(x1, y1, x2, y2, color = 'black', lineWidth = 1)`
    #[wasm_bindgen(js_name = drawLine)]
    pub fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Option<String>,
        line_width: Option<f64>,
    ) {
        self.inner.draw_line(
            Line::new((x1, y1), (x2, y2)),
            &line_style(color, line_width),
        );
    }

    /// `drawArrow(x1, y1, x2, y2, color = 'black', lineWidth = 1)`: a line
    /// with an arrowhead at `(x2, y2)`.
    #[wasm_bindgen(js_name = drawArrow)]
    pub fn draw_arrow(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Option<String>,
        line_width: Option<f64>,
    ) {
        self.inner.draw_directed_line(
            Line::new((x1, y1), (x2, y2)),
            &line_style(color, line_width),
        );
    }

    /// `drawText(text, x, y, color = 'black', font = '12px sans-serif')`
    #[wasm_bindgen(js_name = drawText)]
    pub fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        color: Option<String>,
        font: Option<String>,
    ) {
        self.inner
            .draw_text(text, Point::new(x, y), &text_style(color, font));
    }
}

/// The small-world sample network, exposed to JavaScript as `SmallWorld`.
#[wasm_bindgen(js_name = SmallWorld)]
pub struct JsSmallWorld {
    draw: DrawUtil<WebCanvas>,
    world: SmallWorld,
}

#[wasm_bindgen(js_class = SmallWorld)]
impl JsSmallWorld {
    /// Attach to `<canvas id=canvas_id>` and paint the network.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> JsSmallWorld {
        let mut view = Self {
            draw: attach_current(canvas_id),
            world: SmallWorld::new(),
        };
        view.render();
        view
    }

    #[wasm_bindgen(getter)]
    pub fn ready(&self) -> bool {
        self.draw.is_ready()
    }

    #[wasm_bindgen(getter, js_name = nodeColor)]
    pub fn node_color(&self) -> String {
        self.world.node_color().to_string()
    }

    pub fn render(&mut self) {
        self.world.render(&mut self.draw);
    }

    /// Flip node fill between red and blue and repaint.
    #[wasm_bindgen(js_name = toggleColor)]
    pub fn toggle_color(&mut self) {
        self.world.toggle_color();
        self.render();
    }
}

fn point_style(radius: Option<f64>, color: Option<String>) -> PointStyle {
    let mut style = PointStyle::default();
    if let Some(radius) = radius {
        style.radius = radius;
    }
    if let Some(color) = color {
        style.color = color;
    }
    style
}

fn line_style(color: Option<String>, width: Option<f64>) -> LineStyle {
    let mut style = LineStyle::default();
    if let Some(color) = color {
        style.color = color;
    }
    if let Some(width) = width {
        style.width = width;
    }
    style
}

fn text_style(color: Option<String>, font: Option<String>) -> TextStyle {
    let mut style = TextStyle::default();
    if let Some(color) = color {
        style.color = color;
    }
    if let Some(font) = font {
        style.font = font;
    }
    style
}
