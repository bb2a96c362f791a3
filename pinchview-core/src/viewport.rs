use std::fmt;

use crate::geometry::{Point, Rect};

/// Which gesture currently drives the transform. At most one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureKind {
    #[default]
    None,
    Panning,
    Pinching,
}

/// One-finger drag bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanState {
    /// Last touch point, surface-local.
    pub anchor: Point,
    /// `anchor - offset`, resynced whenever the anchor leaves the image.
    pub gap: Point,
}

/// Two-finger zoom bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    /// Finger separation when the pinch began.
    pub start_distance: f64,
    /// `scale` when the pinch began.
    pub base_scale: f64,
    /// Latest two-finger midpoint, surface-local. `None` outside a pinch.
    pub last_midpoint: Option<Point>,
}

/// The mutable position/scale model. Written by the gesture controller,
/// read by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    pub base_position: Point,
    pub base_width: f64,
    pub base_height: f64,
    pub offset: Point,
    pub scale: f64,
    pub gesture: GestureKind,
    pub pan: PanState,
    pub pinch: PinchState,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            base_position: Point::default(),
            base_width: 0.0,
            base_height: 0.0,
            offset: Point::default(),
            scale: 1.0,
            gesture: GestureKind::None,
            pan: PanState::default(),
            pinch: PinchState {
                start_distance: 0.0,
                base_scale: 1.0,
                last_midpoint: None,
            },
        }
    }
}

impl ViewportState {
    pub fn from_fit(fit: Rect) -> Self {
        let mut state = ViewportState::default();
        state.reset_to_fit(fit);
        state
    }

    /// Overwrite placement with a fresh fit and drop any in-flight gesture.
    pub fn reset_to_fit(&mut self, fit: Rect) {
        self.snap_to_fit(fit);
        self.gesture = GestureKind::None;
        self.pan = PanState::default();
        self.pinch.start_distance = 0.0;
        self.pinch.last_midpoint = None;
    }

    /// Placement-only reset used at gesture end.
    pub fn snap_to_fit(&mut self, fit: Rect) {
        self.base_position = fit.origin();
        self.base_width = fit.width;
        self.base_height = fit.height;
        self.offset = fit.origin();
        self.scale = 1.0;
        self.pinch.base_scale = 1.0;
    }

    pub fn displayed_width(&self) -> f64 {
        self.base_width * self.scale
    }

    pub fn displayed_height(&self) -> f64 {
        self.base_height * self.scale
    }

    /// Where the image currently sits on the surface (unrounded).
    pub fn displayed_rect(&self) -> Rect {
        Rect::new(
            self.offset.x,
            self.offset.y,
            self.displayed_width(),
            self.displayed_height(),
        )
    }

    pub fn metrics(&self) -> Metrics {
        let r = self.displayed_rect().rounded();
        Metrics {
            x: r.x as i64,
            y: r.y as i64,
            width: r.width as i64,
            height: r.height as i64,
            scale: self.scale,
        }
    }
}

/// Rounded per-frame readout for the debug panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub scale: f64,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {}, y: {}, width: {}, height: {}, scale: {:.6}",
            self.x, self.y, self.width, self.height, self.scale
        )
    }
}
