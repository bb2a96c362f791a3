use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pinchview_core::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Self-rescheduling `requestAnimationFrame` loop with a start/stop pair.
///
/// At most one frame request is outstanding at any time.
pub struct FrameLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let win = web_sys::window()?;
    match win.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {e:?}");
            None
        }
    }
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(false));

        let callback_loop = callback.clone();
        let handle_loop = handle.clone();
        let running_loop = running.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            handle_loop.set(None);
            if !running_loop.get() {
                return;
            }
            on_frame(timestamp);
            // on_frame may have stopped or restarted the loop
            if running_loop.get() && handle_loop.get().is_none() {
                if let Some(cb) = callback_loop.borrow().as_ref() {
                    handle_loop.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        Self {
            callback,
            handle,
            running,
        }
    }
}

impl FrameScheduler for FrameLoop {
    fn schedule(&mut self) {
        if self.running.get() {
            return;
        }
        self.running.set(true);
        if let Some(cb) = self.callback.borrow().as_ref() {
            self.handle.set(request_frame(cb));
        }
    }

    fn cancel(&mut self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            if let Some(win) = web_sys::window() {
                if let Err(e) = win.cancel_animation_frame(id) {
                    log::error!("cancelAnimationFrame failed: {e:?}");
                }
            }
        }
    }

    fn is_scheduled(&self) -> bool {
        self.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        // the closure holds a handle to its own cell; break the cycle
        self.callback.borrow_mut().take();
    }
}
