//! Browser-independent core of the pinch/pan image viewer: fit calculation,
//! the viewport transform, the touch gesture controller and per-frame
//! rendering against abstract surface traits.

pub mod config;
pub mod fit;
pub mod geometry;
pub mod gesture;
pub mod render;
pub mod scheduler;
pub mod surface;
pub mod viewport;

pub use config::ViewerConfig;
pub use fit::{compute_fit, Orientation};
pub use geometry::{distance, midpoint, Point, Rect, Size};
pub use gesture::ViewportController;
pub use render::{render_frame, MetricsSink, Painter};
pub use scheduler::FrameScheduler;
pub use surface::Surface;
pub use viewport::{GestureKind, Metrics, ViewportState};
