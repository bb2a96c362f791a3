use std::f64::consts::TAU;

use pinchview_core::{Painter, Point, Rect, Size, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

const GRID_STROKE: &str = "rgba(255,255,255,0.25)";
const MIDPOINT_FILL: &str = "rgba(255,64,64,0.6)";
const ANCHOR_STROKE: &str = "#0f0";

/// Canvas-backed drawing surface holding the currently loaded image.
pub struct WebSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: Option<HtmlImageElement>,
}

impl WebSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            image: None,
        })
    }

    pub fn set_image(&mut self, image: HtmlImageElement) {
        self.image = Some(image);
    }
}

impl Surface for WebSurface {
    fn size(&self) -> Size {
        Size::from_pixels(self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, size: Size) {
        self.canvas.set_width(size.width.round() as u32);
        self.canvas.set_height(size.height.round() as u32);
    }

    fn bounding_box(&self) -> Rect {
        let r = self.canvas.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }
}

impl Painter for WebSurface {
    fn clear(&mut self, surface: Size) {
        self.ctx.clear_rect(0.0, 0.0, surface.width, surface.height);
    }

    fn draw_image(&mut self, rect: Rect) {
        let Some(image) = &self.image else { return };
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        ) {
            log::error!("drawImage failed: {e:?}");
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.ctx.set_stroke_style_str(GRID_STROKE);
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.ctx.set_fill_style_str(MIDPOINT_FILL);
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) {
        self.ctx.set_stroke_style_str(ANCHOR_STROKE);
        self.ctx.set_line_width(2.0);
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
            self.ctx.stroke();
        }
    }
}
