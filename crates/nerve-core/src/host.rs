//! Host abstraction: the document, its elements, and the 2D context.
//!
//! The browser bridge implements these over `web-sys`; the headless host in
//! [`crate::headless`] implements them in memory for tests and tooling.

/// Looks up elements of the host document by id.
pub trait Document {
    type Element: TextTarget;
    type Surface: Surface;

    /// Any element that can receive text content.
    fn element(&self, id: &str) -> Option<Self::Element>;

    /// An element that can be drawn on. `None` when the id is missing or
    /// names something that is not a drawing surface.
    fn surface(&self, id: &str) -> Option<Self::Surface>;
}

pub trait TextTarget {
    fn set_text_content(&self, text: &str);
}

/// A drawable element with pixel dimensions.
///
/// Size setters mutate the element in place; handles are expected to alias
/// the underlying element the way DOM handles do.
pub trait Surface {
    type Context: DrawContext;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&self, width: u32);
    fn set_height(&self, height: u32);

    /// Acquire a 2D drawing context, or `None` if the host refuses one.
    fn context_2d(&self) -> Option<Self::Context>;
}

/// The subset of the 2D context API the wrapper issues.
///
/// Calls are immediate; implementations decide what happens with invalid
/// geometry.
pub trait DrawContext {
    fn begin_path(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn set_text_baseline(&mut self, baseline: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}
