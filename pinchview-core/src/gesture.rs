//! Touch-driven pan/pinch controller.
//!
//! Touch points arrive in client coordinates together with the surface's
//! on-screen bounding box. One finger pans, two fingers pinch, anything else
//! is ignored. At gesture end an image that is no longer fully inside the
//! surface snaps back to its fitted placement.

use crate::config::ViewerConfig;
use crate::fit::compute_fit;
use crate::geometry::{distance, midpoint, Point, Rect, Size};
use crate::render::{render_frame, MetricsSink, Painter};
use crate::scheduler::FrameScheduler;
use crate::surface::Surface;
use crate::viewport::{GestureKind, ViewportState};

pub struct ViewportController {
    config: ViewerConfig,
    state: ViewportState,
    surface: Size,
    image: Option<Size>,
    last_frame_time: Option<f64>,
}

fn to_local(p: Point, bounds: Rect) -> Point {
    p - bounds.origin()
}

impl ViewportController {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config: config.sanitized(),
            state: ViewportState::default(),
            surface: Size::default(),
            image: None,
            last_frame_time: None,
        }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn surface_size(&self) -> Size {
        self.surface
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    pub fn last_frame_time(&self) -> Option<f64> {
        self.last_frame_time
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    /// Fitted placement for the current image and surface.
    pub fn fit(&self) -> Option<Rect> {
        compute_fit(self.image?, self.surface)
    }

    /// Recompute the fit and reset the transform. Keeps the previous state
    /// when the sizes cannot be fitted.
    fn refit(&mut self) -> bool {
        let Some(image) = self.image else { return false };
        match compute_fit(image, self.surface) {
            Some(fit) => {
                self.state.reset_to_fit(fit);
                true
            }
            None => {
                log::warn!(
                    "Cannot fit {}x{} image on {}x{} surface, keeping previous placement",
                    image.width,
                    image.height,
                    self.surface.width,
                    self.surface.height
                );
                false
            }
        }
    }

    /// A new image source finished loading.
    pub fn set_image(&mut self, natural: Size) {
        if !natural.is_valid() {
            log::warn!("Ignoring image with natural size {}x{}", natural.width, natural.height);
            return;
        }
        self.image = Some(natural);
        if self.refit() {
            log::info!("Image {}x{} fitted", natural.width, natural.height);
        }
    }

    pub fn resize(&mut self, size: Size) {
        if !size.is_valid() {
            log::warn!("Ignoring surface size {}x{}", size.width, size.height);
            return;
        }
        self.surface = size;
        self.refit();
    }

    /// Resize the surface with the redraw task stopped, then restart it.
    pub fn resize_surface(
        &mut self,
        surface: &mut impl Surface,
        frames: &mut impl FrameScheduler,
        size: Size,
    ) {
        if !size.is_valid() {
            log::warn!("Ignoring surface size {}x{}", size.width, size.height);
            return;
        }
        frames.cancel();
        surface.set_size(size);
        self.resize(size);
        log::info!("Surface resized to {}x{}", size.width, size.height);
        frames.schedule();
    }

    pub fn on_touch_start(&mut self, touches: &[Point], bounds: Rect) {
        if self.image.is_none() {
            return;
        }
        match touches {
            [touch] => {
                let anchor = to_local(*touch, bounds);
                self.state.gesture = GestureKind::Panning;
                self.state.pan.anchor = anchor;
                self.state.pan.gap = anchor - self.state.offset;
                self.state.pinch.start_distance = 0.0;
                self.state.pinch.last_midpoint = None;
                log::debug!("pan start at ({:.1}, {:.1})", anchor.x, anchor.y);
            }
            [a, b] => {
                self.state.gesture = GestureKind::Pinching;
                self.state.pinch.start_distance = distance(*a, *b);
                self.state.pinch.base_scale = self.state.scale;
                self.state.pinch.last_midpoint = None;
                log::debug!(
                    "pinch start, distance {:.1}, scale {:.3}",
                    self.state.pinch.start_distance,
                    self.state.scale
                );
            }
            _ => {}
        }
    }

    pub fn on_touch_move(&mut self, touches: &[Point], bounds: Rect) {
        if self.image.is_none() {
            return;
        }
        match (self.state.gesture, touches) {
            (GestureKind::Panning, [touch]) => self.pan_to(*touch, bounds),
            (GestureKind::Pinching, [a, b]) => self.pinch_to(*a, *b, bounds),
            _ => {}
        }
    }

    fn pan_to(&mut self, touch: Point, bounds: Rect) {
        if !bounds.contains_point(touch) {
            return;
        }
        let anchor = to_local(touch, bounds);
        self.state.pan.anchor = anchor;
        if self.state.displayed_rect().contains_point(anchor) {
            self.state.offset = anchor - self.state.pan.gap;
        } else {
            self.state.pan.gap = anchor - self.state.offset;
        }
    }

    fn pinch_to(&mut self, a: Point, b: Point, bounds: Rect) {
        let start = self.state.pinch.start_distance;
        if !(start.is_finite() && start >= self.config.min_pinch_distance) {
            return;
        }
        let mid = midpoint(to_local(a, bounds), to_local(b, bounds));
        if !self.state.displayed_rect().contains_point(mid) {
            return;
        }

        let prev_scale = self.state.scale;
        let new_scale = self
            .config
            .clamp_scale(self.state.pinch.base_scale * (distance(a, b) / start));
        if !new_scale.is_finite() || prev_scale <= 0.0 {
            return;
        }

        // keep the point under the fingers fixed
        self.state.offset = mid - (mid - self.state.offset) * (new_scale / prev_scale);
        self.state.scale = new_scale;
        self.state.pinch.last_midpoint = Some(mid);
    }

    pub fn on_touch_end(&mut self) {
        if self.image.is_some() {
            let surface = Rect::from_size(self.surface);
            if !surface.contains_rect(&self.state.displayed_rect()) {
                if let Some(fit) = self.fit() {
                    self.state.snap_to_fit(fit);
                    log::info!("Image out of bounds, snapped back to fit");
                }
            }
        }
        self.state.gesture = GestureKind::None;
        self.state.pinch.start_distance = 0.0;
        self.state.pinch.last_midpoint = None;
    }

    /// One redraw pass.
    pub fn tick(
        &mut self,
        frame_time: f64,
        painter: &mut impl Painter,
        sink: &mut impl MetricsSink,
    ) {
        self.last_frame_time = Some(frame_time);
        if let Some(metrics) = render_frame(
            &self.state,
            self.surface,
            self.image.is_some(),
            &self.config,
            painter,
        ) {
            sink.publish(&metrics);
        }
    }
}
