//! Per-frame drawing of the viewport state.
//!
//! The renderer only reads the transform. Integer rounding happens here and
//! stays here; the state keeps its unrounded values.

use crate::config::ViewerConfig;
use crate::geometry::{Point, Rect, Size};
use crate::viewport::{GestureKind, Metrics, ViewportState};

/// Drawing primitives the renderer needs from the host surface.
pub trait Painter {
    fn clear(&mut self, surface: Size);
    /// Draw the loaded image stretched into `rect`.
    fn draw_image(&mut self, rect: Rect);
    fn stroke_line(&mut self, from: Point, to: Point);
    fn fill_circle(&mut self, center: Point, radius: f64);
    fn stroke_circle(&mut self, center: Point, radius: f64);
}

/// Receives the debug readout once per frame.
pub trait MetricsSink {
    fn publish(&mut self, metrics: &Metrics);
}

impl<F: FnMut(&Metrics)> MetricsSink for F {
    fn publish(&mut self, metrics: &Metrics) {
        self(metrics)
    }
}

/// Reference grid with `rows` x `columns` cells spanning the whole surface.
pub fn draw_grid(painter: &mut impl Painter, surface: Size, rows: u32, columns: u32) {
    for c in 1..columns {
        let x = surface.width * c as f64 / columns as f64;
        painter.stroke_line(Point::new(x, 0.0), Point::new(x, surface.height));
    }
    for r in 1..rows {
        let y = surface.height * r as f64 / rows as f64;
        painter.stroke_line(Point::new(0.0, y), Point::new(surface.width, y));
    }
}

/// Draw one frame. Returns the metrics snapshot in debug mode.
pub fn render_frame(
    state: &ViewportState,
    surface: Size,
    has_image: bool,
    config: &ViewerConfig,
    painter: &mut impl Painter,
) -> Option<Metrics> {
    painter.clear(surface);

    if has_image {
        painter.draw_image(state.displayed_rect().rounded());
    }

    draw_grid(painter, surface, config.grid_rows, config.grid_columns);

    if !config.debug {
        return None;
    }

    if state.gesture == GestureKind::Pinching {
        if let Some(mid) = state.pinch.last_midpoint {
            painter.fill_circle(mid, config.pinch_marker_radius * state.scale);
        }
    }
    painter.stroke_circle(state.base_position, config.anchor_marker_radius);

    Some(state.metrics())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Op {
        Clear(Size),
        Image(Rect),
        Line(Point, Point),
        Disc(Point, f64),
        Ring(Point, f64),
    }

    #[derive(Default)]
    pub(crate) struct RecordingPainter {
        pub ops: Vec<Op>,
    }

    impl Painter for RecordingPainter {
        fn clear(&mut self, surface: Size) {
            self.ops.push(Op::Clear(surface));
        }
        fn draw_image(&mut self, rect: Rect) {
            self.ops.push(Op::Image(rect));
        }
        fn stroke_line(&mut self, from: Point, to: Point) {
            self.ops.push(Op::Line(from, to));
        }
        fn fill_circle(&mut self, center: Point, radius: f64) {
            self.ops.push(Op::Disc(center, radius));
        }
        fn stroke_circle(&mut self, center: Point, radius: f64) {
            self.ops.push(Op::Ring(center, radius));
        }
    }

    fn state() -> ViewportState {
        let mut s = ViewportState::from_fit(Rect::new(0.0, 75.0, 300.0, 150.0));
        s.offset = Point::new(10.4, 20.6);
        s.scale = 1.5;
        s
    }

    #[test]
    fn test_frame_draws_rounded_image_then_grid() {
        let mut p = RecordingPainter::default();
        let cfg = ViewerConfig { grid_rows: 3, grid_columns: 2, ..Default::default() };
        let surface = Size::new(300.0, 300.0);
        let metrics = render_frame(&state(), surface, true, &cfg, &mut p);

        assert!(metrics.is_none());
        assert_eq!(p.ops[0], Op::Clear(surface));
        assert_eq!(p.ops[1], Op::Image(Rect::new(10.0, 21.0, 450.0, 225.0)));
        let lines: Vec<_> = p.ops.iter().filter(|op| matches!(op, Op::Line(..))).collect();
        // 1 interior column line + 2 interior row lines
        assert_eq!(lines.len(), 3);
        assert_eq!(
            p.ops[2],
            Op::Line(Point::new(150.0, 0.0), Point::new(150.0, 300.0))
        );
        assert_eq!(
            p.ops[3],
            Op::Line(Point::new(0.0, 100.0), Point::new(300.0, 100.0))
        );
    }

    #[test]
    fn test_no_image_skips_draw_image() {
        let mut p = RecordingPainter::default();
        render_frame(&state(), Size::new(100.0, 100.0), false, &ViewerConfig::default(), &mut p);
        assert!(!p.ops.iter().any(|op| matches!(op, Op::Image(_))));
    }

    #[test]
    fn test_debug_markers_and_metrics() {
        let mut p = RecordingPainter::default();
        let cfg = ViewerConfig { debug: true, ..Default::default() };
        let mut s = state();
        s.gesture = GestureKind::Pinching;
        s.pinch.last_midpoint = Some(Point::new(120.0, 140.0));

        let metrics = render_frame(&s, Size::new(300.0, 300.0), true, &cfg, &mut p).unwrap();
        assert_eq!((metrics.x, metrics.y, metrics.width, metrics.height), (10, 21, 450, 225));
        assert_eq!(metrics.scale, 1.5);
        assert!(p.ops.contains(&Op::Disc(Point::new(120.0, 140.0), 15.0)));
        assert!(p.ops.contains(&Op::Ring(Point::new(0.0, 75.0), 4.0)));
    }

    #[test]
    fn test_midpoint_disc_only_while_pinching() {
        let mut p = RecordingPainter::default();
        let cfg = ViewerConfig { debug: true, ..Default::default() };
        let mut s = state();
        s.pinch.last_midpoint = Some(Point::new(120.0, 140.0));
        render_frame(&s, Size::new(300.0, 300.0), true, &cfg, &mut p);
        assert!(!p.ops.iter().any(|op| matches!(op, Op::Disc(..))));
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        let mut sink = |m: &Metrics| seen.push(*m);
        sink.publish(&state().metrics());
        assert_eq!(seen.len(), 1);
    }
}
