//! Host traits over the browser DOM.
//!
//! The `web-sys` handles are wrapped in local newtypes so the `nerve-core`
//! traits can be implemented for them. Every method is a direct
//! pass-through.

use nerve_core::host::{Document, DrawContext, Surface, TextTarget};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

#[derive(Clone)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }

    /// The document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self)
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.0
    }
}

impl Document for WebDocument {
    type Element = WebElement;
    type Surface = WebCanvas;

    fn element(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn surface(&self, id: &str) -> Option<WebCanvas> {
        let element = self.0.get_element_by_id(id)?;
        match element.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => Some(WebCanvas(canvas)),
            Err(_) => {
                log::warn!("#{id} is not a <canvas> element");
                None
            }
        }
    }
}

/// Any element, as a text target.
#[derive(Clone)]
pub struct WebElement(Element);

impl TextTarget for WebElement {
    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// A `<canvas>` element.
#[derive(Clone)]
pub struct WebCanvas(HtmlCanvasElement);

impl WebCanvas {
    pub fn inner(&self) -> &HtmlCanvasElement {
        &self.0
    }
}

impl Surface for WebCanvas {
    type Context = WebContext;

    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn set_width(&self, width: u32) {
        self.0.set_width(width);
    }

    fn set_height(&self, height: u32) {
        self.0.set_height(height);
    }

    fn context_2d(&self) -> Option<WebContext> {
        match self.0.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<CanvasRenderingContext2d>().ok().map(WebContext),
            Ok(None) => None,
            Err(err) => {
                log::warn!("getContext(\"2d\") threw: {err:?}");
                None
            }
        }
    }
}

/// The canvas's 2D rendering context.
pub struct WebContext(CanvasRenderingContext2d);

impl DrawContext for WebContext {
    fn begin_path(&mut self) {
        self.0.begin_path();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.0.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.0.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.0.set_line_width(width);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        // Negative radii throw on the JS side; geometry is passed through as-is.
        let _ = self.0.arc(x, y, radius, start_angle, end_angle);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(x, y);
    }

    fn fill(&mut self) {
        self.0.fill();
    }

    fn stroke(&mut self) {
        self.0.stroke();
    }

    fn set_font(&mut self, font: &str) {
        self.0.set_font(font);
    }

    fn set_text_align(&mut self, align: &str) {
        self.0.set_text_align(align);
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.0.set_text_baseline(baseline);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if let Err(err) = self.0.fill_text(text, x, y) {
            log::warn!("fillText threw: {err:?}");
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.0.clear_rect(x, y, width, height);
    }
}
