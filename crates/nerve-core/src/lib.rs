pub mod bootstrap;
pub mod draw;
pub mod error;
pub mod headless;
pub mod host;
pub mod network;
pub mod style;

pub use bootstrap::{BootstrapConfig, run as run_bootstrap};
pub use draw::{DEFAULT_SURFACE_SIZE, DrawUtil, SurfaceState};
pub use error::SurfaceError;
pub use host::{Document, DrawContext, Surface, TextTarget};
pub use network::{SmallWorld, arrowhead, edge_between};
pub use style::{LineStyle, PointStyle, TextAlign, TextBaseline, TextStyle};

// Re-export kurbo geometry so downstream crates don't need a direct dependency
pub use kurbo::{Circle, Line, Point, Vec2};
