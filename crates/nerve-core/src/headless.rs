//! In-memory host: a document of text elements and surfaces, plus a 2D
//! context that records every call it receives.
//!
//! Handles share their element through `Rc<RefCell<_>>`, so a size written
//! by the wrapper or a greeting written by the bootstrap is visible through
//! the document afterwards.

use crate::host::{Document, DrawContext, Surface, TextTarget};
use kurbo::Point;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// ─── Document ───────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
    surfaces: HashMap<String, MemorySurface>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty text element, returning a handle to it.
    pub fn insert_element(&mut self, id: impl Into<String>) -> MemoryElement {
        let element = MemoryElement::default();
        self.elements.insert(id.into(), element.clone());
        element
    }

    pub fn insert_surface(&mut self, id: impl Into<String>, surface: MemorySurface) {
        self.surfaces.insert(id.into(), surface);
    }

    /// Current text of element `id`.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(MemoryElement::text)
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;
    type Surface = MemorySurface;

    fn element(&self, id: &str) -> Option<MemoryElement> {
        self.elements.get(id).cloned()
    }

    fn surface(&self, id: &str) -> Option<MemorySurface> {
        self.surfaces.get(id).cloned()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    text: Rc<RefCell<String>>,
}

impl MemoryElement {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextTarget for MemoryElement {
    fn set_text_content(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

// ─── Surface ────────────────────────────────────────────────────────────

#[derive(Debug)]
struct SurfaceAttrs {
    width: u32,
    height: u32,
    context_available: bool,
}

#[derive(Debug, Clone)]
pub struct MemorySurface {
    attrs: Rc<RefCell<SurfaceAttrs>>,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_attrs(width, height, true)
    }

    /// A surface that refuses to hand out a 2D context.
    pub fn without_context(width: u32, height: u32) -> Self {
        Self::with_attrs(width, height, false)
    }

    fn with_attrs(width: u32, height: u32, context_available: bool) -> Self {
        Self {
            attrs: Rc::new(RefCell::new(SurfaceAttrs {
                width,
                height,
                context_available,
            })),
        }
    }
}

impl Surface for MemorySurface {
    type Context = RecordingContext;

    fn width(&self) -> u32 {
        self.attrs.borrow().width
    }

    fn height(&self) -> u32 {
        self.attrs.borrow().height
    }

    fn set_width(&self, width: u32) {
        self.attrs.borrow_mut().width = width;
    }

    fn set_height(&self, height: u32) {
        self.attrs.borrow_mut().height = height;
    }

    fn context_2d(&self) -> Option<RecordingContext> {
        self.attrs
            .borrow()
            .context_available
            .then(RecordingContext::new)
    }
}

// ─── Recording context ──────────────────────────────────────────────────

/// One primitive call received by a [`RecordingContext`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DrawCall {
    BeginPath,
    SetFillStyle {
        color: String,
    },
    SetStrokeStyle {
        color: String,
    },
    SetLineWidth {
        width: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Fill,
    Stroke,
    SetFont {
        font: String,
    },
    SetTextAlign {
        align: String,
    },
    SetTextBaseline {
        baseline: String,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// A filled arc, as it ended up on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPoint {
    pub center: Point,
    pub radius: f64,
    pub color: String,
}

/// A stroked segment, as it ended up on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLine {
    pub from: Point,
    pub to: Point,
    pub color: String,
    pub width: f64,
}

/// A filled text run with the anchor it was drawn at.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedText {
    pub text: String,
    pub at: Point,
    pub color: String,
    pub font: String,
    pub align: String,
    pub baseline: String,
}

/// Everything still visible after replaying a call log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Painted {
    pub points: Vec<RecordedPoint>,
    pub lines: Vec<RecordedLine>,
    pub texts: Vec<RecordedText>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    calls: Vec<DrawCall>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Filled arcs, in paint order.
    pub fn points(&self) -> Vec<RecordedPoint> {
        self.replay().points
    }

    /// Stroked segments, in paint order.
    pub fn lines(&self) -> Vec<RecordedLine> {
        self.replay().lines
    }

    /// Filled text runs, in paint order.
    pub fn texts(&self) -> Vec<RecordedText> {
        self.replay().texts
    }

    /// Fold the call log into visible shapes, tracking context state the
    /// way a canvas does: styles persist across paths, `begin_path` clears
    /// the current path, `fill`/`stroke` paint whatever the path holds.
    /// A `clear_rect` wipes everything painted so far; the wrapper only
    /// ever clears the full surface.
    pub fn replay(&self) -> Painted {
        let mut painted = Painted::default();

        let mut fill_style = "#000000".to_string();
        let mut stroke_style = "#000000".to_string();
        let mut line_width = 1.0;
        let mut font = "10px sans-serif".to_string();
        let mut align = "start".to_string();
        let mut baseline = "alphabetic".to_string();
        let mut arcs: Vec<(Point, f64)> = Vec::new();
        let mut segments: Vec<(Point, Point)> = Vec::new();
        let mut cursor: Option<Point> = None;

        for call in &self.calls {
            match call {
                DrawCall::BeginPath => {
                    arcs.clear();
                    segments.clear();
                    cursor = None;
                }
                DrawCall::SetFillStyle { color } => fill_style = color.clone(),
                DrawCall::SetStrokeStyle { color } => stroke_style = color.clone(),
                DrawCall::SetLineWidth { width } => line_width = *width,
                DrawCall::SetFont { font: f } => font = f.clone(),
                DrawCall::SetTextAlign { align: a } => align = a.clone(),
                DrawCall::SetTextBaseline { baseline: b } => baseline = b.clone(),
                DrawCall::Arc { x, y, radius, .. } => {
                    arcs.push((Point::new(*x, *y), *radius));
                }
                DrawCall::MoveTo { x, y } => cursor = Some(Point::new(*x, *y)),
                DrawCall::LineTo { x, y } => {
                    let to = Point::new(*x, *y);
                    if let Some(from) = cursor {
                        segments.push((from, to));
                    }
                    cursor = Some(to);
                }
                DrawCall::Fill => {
                    painted
                        .points
                        .extend(arcs.iter().map(|&(center, radius)| RecordedPoint {
                            center,
                            radius,
                            color: fill_style.clone(),
                        }));
                }
                DrawCall::Stroke => {
                    painted
                        .lines
                        .extend(segments.iter().map(|&(from, to)| RecordedLine {
                            from,
                            to,
                            color: stroke_style.clone(),
                            width: line_width,
                        }));
                }
                DrawCall::FillText { text, x, y } => painted.texts.push(RecordedText {
                    text: text.clone(),
                    at: Point::new(*x, *y),
                    color: fill_style.clone(),
                    font: font.clone(),
                    align: align.clone(),
                    baseline: baseline.clone(),
                }),
                DrawCall::ClearRect { .. } => painted = Painted::default(),
            }
        }

        painted
    }

    /// Render the painted shapes as a standalone SVG document.
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let painted = self.replay();
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        );

        for p in &painted.points {
            svg.push_str(&format!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                p.center.x,
                p.center.y,
                p.radius,
                escape_xml(&p.color)
            ));
        }
        for l in &painted.lines {
            svg.push_str(&format!(
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                l.from.x,
                l.from.y,
                l.to.x,
                l.to.y,
                escape_xml(&l.color),
                l.width
            ));
        }
        for t in &painted.texts {
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" fill=\"{}\" style=\"font: {}\" text-anchor=\"{}\" dominant-baseline=\"{}\">{}</text>\n",
                t.at.x,
                t.at.y,
                escape_xml(&t.color),
                escape_xml(&t.font),
                svg_anchor(&t.align),
                svg_baseline(&t.baseline),
                escape_xml(&t.text)
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// The raw call log as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.calls)
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn svg_anchor(align: &str) -> &'static str {
    match align {
        "center" => "middle",
        "end" | "right" => "end",
        _ => "start",
    }
}

fn svg_baseline(baseline: &str) -> &'static str {
    match baseline {
        "middle" => "middle",
        "top" | "hanging" => "hanging",
        _ => "alphabetic",
    }
}

impl DrawContext for RecordingContext {
    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.calls.push(DrawCall::SetFillStyle {
            color: color.to_string(),
        });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.calls.push(DrawCall::SetStrokeStyle {
            color: color.to_string(),
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::SetLineWidth { width });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.calls.push(DrawCall::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo { x, y });
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }

    fn set_font(&mut self, font: &str) {
        self.calls.push(DrawCall::SetFont {
            font: font.to_string(),
        });
    }

    fn set_text_align(&mut self, align: &str) {
        self.calls.push(DrawCall::SetTextAlign {
            align: align.to_string(),
        });
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.calls.push(DrawCall::SetTextBaseline {
            baseline: baseline.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.calls.push(DrawCall::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::ClearRect {
            x,
            y,
            width,
            height,
        });
    }
}
