//! Node-and-edge drawing: circular nodes with labels, edges clipped to the
//! node outlines, arrowheads, and the small-world sample network.

use crate::draw::DrawUtil;
use crate::host::Surface;
use crate::style::{LineStyle, PointStyle, TextStyle};
use kurbo::{Circle, Line, Point, Vec2};

/// Length of each arrowhead stroke.
pub const ARROW_LENGTH: f64 = 8.0;
/// Angle between the shaft and each arrowhead stroke.
pub const ARROW_SPREAD: f64 = std::f64::consts::PI / 6.0;

/// The segment joining two nodes, trimmed so it starts on `from`'s outline
/// and ends on `to`'s. `None` when the centres coincide and there is no
/// direction to draw in.
pub fn edge_between(from: &Circle, to: &Circle) -> Option<Line> {
    let d: Vec2 = to.center - from.center;
    let distance = d.hypot();
    if distance == 0.0 || !distance.is_finite() {
        return None;
    }
    let unit = d / distance;
    Some(Line::new(
        from.center + unit * from.radius,
        to.center - unit * to.radius,
    ))
}

/// The two strokes of an arrowhead at the end of `shaft`, each `length`
/// long and `spread` radians either side of the shaft.
pub fn arrowhead(shaft: Line, length: f64, spread: f64) -> [Line; 2] {
    let angle = (shaft.p1 - shaft.p0).atan2();
    let tip = shaft.p1;
    [angle + spread, angle - spread]
        .map(|a| Line::new(tip, tip - Vec2::from_angle(a) * length))
}

impl<S: Surface> DrawUtil<S> {
    /// Stroke `line` with an arrowhead at its end point.
    pub fn draw_directed_line(&mut self, line: Line, style: &LineStyle) {
        self.draw_line(line, style);
        for stroke in arrowhead(line, ARROW_LENGTH, ARROW_SPREAD) {
            self.draw_line(stroke, style);
        }
    }

    /// Fill a node and, when `label` is non-empty, centre it on the node in
    /// `label_style`.
    pub fn draw_node(
        &mut self,
        node: &Circle,
        color: &str,
        label: Option<&str>,
        label_style: &TextStyle,
    ) {
        self.draw_point(node.center, &PointStyle::new(node.radius, color));
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            self.draw_text(label, node.center, label_style);
        }
    }

    /// Draw a directed edge from `from` to `to`, clipped to both outlines.
    pub fn connect_nodes(&mut self, from: &Circle, to: &Circle, style: &LineStyle) {
        match edge_between(from, to) {
            Some(edge) => self.draw_directed_line(edge, style),
            None => log::debug!("skipping edge between coincident nodes at {:?}", from.center),
        }
    }
}

// ─── Small-world sample ─────────────────────────────────────────────────

pub const SMALL_WORLD_WIDTH: u32 = 800;
pub const SMALL_WORLD_HEIGHT: u32 = 600;
pub const SMALL_WORLD_TITLE: &str = "Small World Network Visualization";

const NODE_RADIUS: f64 = 50.0;
const TITLE_COLOR: &str = "blue";
const EDGE_COLOR: &str = "magenta";
const LABEL_COLOR: &str = "black";

/// Four labelled nodes on a 2x2 grid, chained 0→1→2→3 with a shortcut
/// 0→2. Node fill toggles between red and blue.
#[derive(Debug, Clone, PartialEq)]
pub struct SmallWorld {
    red: bool,
}

impl Default for SmallWorld {
    fn default() -> Self {
        Self { red: true }
    }
}

impl SmallWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_color(&self) -> &'static str {
        if self.red { "red" } else { "blue" }
    }

    /// Flip the node fill between red and blue.
    pub fn toggle_color(&mut self) {
        self.red = !self.red;
    }

    pub fn nodes(&self) -> Vec<Circle> {
        [300.0, 450.0]
            .into_iter()
            .flat_map(|y| [100.0, 300.0].map(|x| Circle::new((x, y), NODE_RADIUS)))
            .collect()
    }

    /// Directed edges as `(from, to)` node indices.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let chain = (0..self.nodes().len() - 1).map(|i| (i, i + 1));
        chain.chain(std::iter::once((0, 2))).collect()
    }

    /// Clear `draw` and paint title, nodes, then edges.
    pub fn render<S: Surface>(&self, draw: &mut DrawUtil<S>) {
        draw.clear();
        draw.draw_text(
            SMALL_WORLD_TITLE,
            Point::new(300.0, 100.0),
            &TextStyle::default().with_color(TITLE_COLOR),
        );

        let nodes = self.nodes();
        let label_style = TextStyle::centered(LABEL_COLOR);
        for (i, node) in nodes.iter().enumerate() {
            let label = format!("Node {i}");
            draw.draw_node(node, self.node_color(), Some(label.as_str()), &label_style);
        }

        let edge_style = LineStyle::new(EDGE_COLOR, 1.0);
        for (from, to) in self.edges() {
            draw.connect_nodes(&nodes[from], &nodes[to], &edge_style);
        }
    }
}
