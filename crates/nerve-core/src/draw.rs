//! Drawing surface wrapper.
//!
//! Attaches to a surface by id, gives it a default size when unset, and
//! acquires a 2D context once. Draw calls go straight through to that
//! context and nothing is retained. When attaching fails the wrapper stays
//! degraded for its whole lifetime and every draw call is a no-op.

use crate::error::SurfaceError;
use crate::host::{Document, DrawContext, Surface};
use crate::style::{LineStyle, PointStyle, TextStyle};
use kurbo::{Line, Point};
use std::f64::consts::TAU;

/// Size applied to a surface dimension that is zero at attach time.
pub const DEFAULT_SURFACE_SIZE: u32 = 400;

/// Whether draw calls reach a context.
#[derive(Debug)]
pub enum SurfaceState<C> {
    Ready(C),
    Degraded(SurfaceError),
}

pub struct DrawUtil<S: Surface> {
    surface: Option<S>,
    state: SurfaceState<S::Context>,
}

impl<S: Surface> DrawUtil<S> {
    /// Attach to the surface `surface_id` of `document`.
    ///
    /// Never fails: a missing surface or a refused context is logged and
    /// leaves the wrapper degraded.
    pub fn attach<D>(document: &D, surface_id: &str) -> Self
    where
        D: Document<Surface = S>,
    {
        let Some(surface) = document.surface(surface_id) else {
            return Self::detached(surface_id);
        };

        if surface.width() == 0 {
            surface.set_width(DEFAULT_SURFACE_SIZE);
        }
        if surface.height() == 0 {
            surface.set_height(DEFAULT_SURFACE_SIZE);
        }

        match surface.context_2d() {
            Some(ctx) => {
                log::debug!(
                    "attached to #{surface_id} ({}x{})",
                    surface.width(),
                    surface.height()
                );
                Self {
                    surface: Some(surface),
                    state: SurfaceState::Ready(ctx),
                }
            }
            None => Self::degraded(
                Some(surface),
                SurfaceError::ContextUnavailable {
                    id: surface_id.to_string(),
                },
            ),
        }
    }

    /// A wrapper with no host to look `surface_id` up in; behaves exactly
    /// like one whose surface was missing.
    pub fn detached(surface_id: &str) -> Self {
        Self::degraded(
            None,
            SurfaceError::SurfaceNotFound {
                id: surface_id.to_string(),
            },
        )
    }

    fn degraded(surface: Option<S>, err: SurfaceError) -> Self {
        log::error!("{err}");
        Self {
            surface,
            state: SurfaceState::Degraded(err),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SurfaceState::Ready(_))
    }

    pub fn state(&self) -> &SurfaceState<S::Context> {
        &self.state
    }

    /// The owned context, `None` when degraded.
    pub fn context(&self) -> Option<&S::Context> {
        match &self.state {
            SurfaceState::Ready(ctx) => Some(ctx),
            SurfaceState::Degraded(_) => None,
        }
    }

    pub fn degraded_reason(&self) -> Option<&SurfaceError> {
        match &self.state {
            SurfaceState::Ready(_) => None,
            SurfaceState::Degraded(err) => Some(err),
        }
    }

    /// Surface size after defaults were applied, `None` if no surface was found.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(|s| (s.width(), s.height()))
    }

    /// Fill a disk centred on `at`.
    pub fn draw_point(&mut self, at: Point, style: &PointStyle) {
        let SurfaceState::Ready(ctx) = &mut self.state else {
            return;
        };
        ctx.begin_path();
        ctx.set_fill_style(&style.color);
        ctx.arc(at.x, at.y, style.radius, 0.0, TAU);
        ctx.fill();
    }

    /// Stroke the segment `line`.
    pub fn draw_line(&mut self, line: Line, style: &LineStyle) {
        let SurfaceState::Ready(ctx) = &mut self.state else {
            return;
        };
        ctx.begin_path();
        ctx.set_stroke_style(&style.color);
        ctx.set_line_width(style.width);
        ctx.move_to(line.p0.x, line.p0.y);
        ctx.line_to(line.p1.x, line.p1.y);
        ctx.stroke();
    }

    /// Fill `text` anchored at `at` according to the style's alignment.
    pub fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let SurfaceState::Ready(ctx) = &mut self.state else {
            return;
        };
        ctx.set_fill_style(&style.color);
        ctx.set_font(&style.font);
        ctx.set_text_align(style.align.as_str());
        ctx.set_text_baseline(style.baseline.as_str());
        ctx.fill_text(text, at.x, at.y);
    }

    /// Clear the whole surface back to transparent.
    pub fn clear(&mut self) {
        let Some((width, height)) = self.size() else {
            return;
        };
        let SurfaceState::Ready(ctx) = &mut self.state else {
            return;
        };
        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }
}
