pub mod app;
pub mod metrics_panel;
pub mod surface_form;
pub mod touch;
pub mod viewer;
