//! Per-call draw styles with the wrapper's default values.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "black";
pub const DEFAULT_POINT_RADIUS: f64 = 3.0;
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
pub const DEFAULT_FONT: &str = "12px sans-serif";

/// Fill style for a point: a disk of `radius` in `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub radius: f64,
    pub color: String,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            radius: DEFAULT_POINT_RADIUS,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl PointStyle {
    pub fn new(radius: f64, color: impl Into<String>) -> Self {
        Self {
            radius,
            color: color.into(),
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Stroke style for a line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl LineStyle {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

/// Horizontal anchor of a text run, as the 2D context's `textAlign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
            TextAlign::End => "end",
        }
    }
}

/// Vertical anchor of a text run, as the 2D context's `textBaseline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
}

impl TextBaseline {
    pub fn as_str(self) -> &'static str {
        match self {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        }
    }
}

/// Fill style for a text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: String,
    pub font: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            font: DEFAULT_FONT.to_string(),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
        }
    }
}

impl TextStyle {
    /// Text anchored on its centre point.
    pub fn centered(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_wrapper_signature() {
        assert_eq!(PointStyle::default(), PointStyle::new(3.0, "black"));
        assert_eq!(LineStyle::default(), LineStyle::new("black", 1.0));
    }

    #[test]
    fn builders_override_single_fields() {
        let point = PointStyle::default().with_color("red");
        assert_eq!(point.radius, 3.0);
        assert_eq!(point.color, "red");

        let line = LineStyle::default().with_width(4.0);
        assert_eq!(line.color, "black");
        assert_eq!(line.width, 4.0);
    }

    #[test]
    fn centered_text_anchors_on_middle() {
        let text = TextStyle::centered("black");
        assert_eq!(text.align.as_str(), "center");
        assert_eq!(text.baseline.as_str(), "middle");
        assert_eq!(text.font, "12px sans-serif");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let point: PointStyle = serde_json::from_str(r#"{"color":"red"}"#).unwrap();
        assert_eq!(point, PointStyle::new(3.0, "red"));

        let line: LineStyle = serde_json::from_str(r#"{"width":2.5}"#).unwrap();
        assert_eq!(line, LineStyle::new("black", 2.5));
    }
}
