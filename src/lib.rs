//! Touch pan/pinch image viewer for the browser.
//!
//! The Leptos front-end in this crate only wires the canvas, image loading
//! and touch events to `pinchview-core`, which owns the transform logic.

pub mod canvas;
pub mod components;
pub mod config;
pub mod state;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("pinchview starting");
    leptos::mount::mount_to_body(components::app::App);
}
