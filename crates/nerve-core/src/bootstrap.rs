//! Page bootstrap: greet, attach to the canvas, draw the sample shapes.
//!
//! Hosts call [`run`] once from their document-ready signal.

use crate::draw::DrawUtil;
use crate::host::{Document, TextTarget};
use crate::style::{LineStyle, PointStyle};
use kurbo::{Line, Point};
use serde::Deserialize;

pub const GREETING: &str = "hello,world, 1!";
pub const GREETING_ELEMENT_ID: &str = "app";
pub const SURFACE_ID: &str = "myCanvas";

/// Element ids and greeting used by the bootstrap.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootstrapConfig {
    pub greeting_element_id: String,
    pub surface_id: String,
    pub greeting: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            greeting_element_id: GREETING_ELEMENT_ID.to_string(),
            surface_id: SURFACE_ID.to_string(),
            greeting: GREETING.to_string(),
        }
    }
}

/// The red sample point.
pub fn sample_point() -> (Point, PointStyle) {
    (Point::new(100.0, 100.0), PointStyle::new(5.0, "red"))
}

/// The blue sample line.
pub fn sample_line() -> (Line, LineStyle) {
    (
        Line::new((0.0, 0.0), (200.0, 200.0)),
        LineStyle::new("blue", 2.0),
    )
}

/// Run the bootstrap against `document`.
///
/// The greeting is written independently of the surface: a missing greeting
/// element is skipped silently, a missing or unusable surface leaves the
/// returned wrapper degraded and nothing is drawn.
pub fn run<D: Document>(document: &D, config: &BootstrapConfig) -> DrawUtil<D::Surface> {
    if let Some(element) = document.element(&config.greeting_element_id) {
        element.set_text_content(&config.greeting);
    }

    let mut draw = DrawUtil::attach(document, &config.surface_id);
    if draw.is_ready() {
        let (at, point_style) = sample_point();
        draw.draw_point(at, &point_style);
        let (line, line_style) = sample_line();
        draw.draw_line(line, &line_style);
        log::debug!("bootstrap drew sample shapes on #{}", config.surface_id);
    }
    draw
}
