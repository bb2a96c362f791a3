use leptos::prelude::*;
use pinchview_core::{FrameScheduler, Metrics, Rect, Size, Surface, ViewportController};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use crate::canvas::{FrameLoop, WebSurface};
use crate::components::touch::touch_points;
use crate::state::AppState;

/// Everything the touch handlers and the frame callback share.
struct ViewerRuntime {
    controller: ViewportController,
    surface: Option<WebSurface>,
    /// Last loaded image, kept so a surface mounted after the load still gets it.
    image: Option<HtmlImageElement>,
    /// Bumped on every image request so late loads of a replaced source are dropped.
    image_generation: u32,
}

impl ViewerRuntime {
    fn bounds(&self) -> Option<Rect> {
        self.surface.as_ref().map(|s| s.bounding_box())
    }
}

fn load_image(
    src: &str,
    generation: u32,
    runtime: StoredValue<ViewerRuntime, LocalStorage>,
) -> Result<(), wasm_bindgen::JsValue> {
    let img = HtmlImageElement::new()?;

    let loaded = img.clone();
    let onload = Closure::once_into_js(move || {
        runtime.update_value(|rt| {
            if rt.image_generation != generation {
                return;
            }
            let natural = Size::from_pixels(loaded.natural_width(), loaded.natural_height());
            if let Some(surface) = rt.surface.as_mut() {
                surface.set_image(loaded.clone());
            }
            rt.image = Some(loaded.clone());
            rt.controller.set_image(natural);
        });
    });
    let src_owned = src.to_string();
    let onerror = Closure::once_into_js(move || {
        log::error!("Failed to load image {src_owned}");
    });

    img.set_onload(Some(onload.unchecked_ref()));
    img.set_onerror(Some(onerror.unchecked_ref()));
    img.set_src(src);
    Ok(())
}

#[component]
pub fn Viewer() -> impl IntoView {
    let state = expect_context::<AppState>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let viewer_config = state.config.with_value(|cfg| cfg.viewer.clone());
    let runtime = StoredValue::new_local(ViewerRuntime {
        controller: ViewportController::new(viewer_config),
        surface: None,
        image: None,
        image_generation: 0,
    });
    let frames: StoredValue<Option<FrameLoop>, LocalStorage> = StoredValue::new_local(None);

    // Mount: wrap the canvas, start the redraw loop and apply the initial size
    Effect::new(move || {
        let Some(canvas_el) = canvas_ref.get() else { return };
        if runtime.with_value(|rt| rt.surface.is_some()) {
            return;
        }
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        let mut surface = match WebSurface::new(canvas.clone()) {
            Ok(s) => s,
            Err(e) => {
                log::error!("Cannot use canvas: {e:?}");
                return;
            }
        };
        runtime.update_value(|rt| {
            if let Some(img) = rt.image.clone() {
                surface.set_image(img);
            }
            rt.surface = Some(surface);
        });

        let metrics = state.metrics;
        let frame_loop = FrameLoop::new(move |timestamp| {
            runtime.update_value(|rt| {
                let ViewerRuntime { controller, surface, .. } = rt;
                if let Some(surface) = surface.as_mut() {
                    controller.tick(timestamp, surface, &mut |m: &Metrics| metrics.set(Some(*m)));
                }
            });
        });
        frames.set_value(Some(frame_loop));

        let size = Size::from_pixels(
            state.surface_width.get_untracked(),
            state.surface_height.get_untracked(),
        );
        resize(runtime, frames, size);
        log::info!("Viewer mounted");
    });

    // Surface size changes from the form
    Effect::new(move || {
        let size = Size::from_pixels(state.surface_width.get(), state.surface_height.get());
        resize(runtime, frames, size);
    });

    // Image source follows the orientation selector
    Effect::new(move || {
        let src = state.image_src(state.orientation.get());
        let generation = runtime.with_value(|rt| rt.image_generation.wrapping_add(1));
        runtime.update_value(|rt| rt.image_generation = generation);
        if let Err(e) = load_image(&src, generation, runtime) {
            log::error!("Cannot create image element: {e:?}");
        }
    });

    Effect::new(move || {
        let debug = state.debug.get();
        runtime.update_value(|rt| rt.controller.set_debug(debug));
        if !debug {
            state.metrics.set(None);
        }
    });

    on_cleanup(move || {
        frames.update_value(|f| {
            if let Some(f) = f.as_mut() {
                f.cancel();
            }
        });
    });

    let on_touchstart = move |ev: web_sys::TouchEvent| {
        ev.prevent_default();
        let points = touch_points(&ev.touches());
        runtime.update_value(|rt| {
            let Some(bounds) = rt.bounds() else { return };
            rt.controller.on_touch_start(&points, bounds);
        });
    };

    let on_touchmove = move |ev: web_sys::TouchEvent| {
        ev.prevent_default();
        let points = touch_points(&ev.touches());
        runtime.update_value(|rt| {
            let Some(bounds) = rt.bounds() else { return };
            rt.controller.on_touch_move(&points, bounds);
        });
    };

    let on_touchend = move |ev: web_sys::TouchEvent| {
        ev.prevent_default();
        runtime.update_value(|rt| rt.controller.on_touch_end());
    };

    view! {
        <div class="viewer-container">
            <canvas
                node_ref=canvas_ref
                style="touch-action: none;"
                on:touchstart=on_touchstart
                on:touchmove=on_touchmove
                on:touchend=on_touchend
                on:touchcancel=on_touchend
            />
        </div>
    }
}

/// Stop the loop, resize the canvas and refit, then restart the loop.
fn resize(
    runtime: StoredValue<ViewerRuntime, LocalStorage>,
    frames: StoredValue<Option<FrameLoop>, LocalStorage>,
    size: Size,
) {
    runtime.update_value(|rt| {
        let ViewerRuntime { controller, surface, .. } = rt;
        let Some(surface) = surface.as_mut() else { return };
        frames.update_value(|f| {
            if let Some(frame_loop) = f.as_mut() {
                controller.resize_surface(surface, frame_loop, size);
            }
        });
    });
}
