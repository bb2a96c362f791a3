pub mod frame_loop;
pub mod web_surface;

pub use frame_loop::FrameLoop;
pub use web_surface::WebSurface;
