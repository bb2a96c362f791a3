use leptos::prelude::*;
use pinchview_core::Metrics;

use crate::config::HostConfig;

/// Which of the two configured images is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageOrientation {
    #[default]
    Landscape,
    Portrait,
}

impl ImageOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageOrientation::Landscape => "landscape",
            ImageOrientation::Portrait => "portrait",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "portrait" => ImageOrientation::Portrait,
            _ => ImageOrientation::Landscape,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub surface_width: RwSignal<u32>,
    pub surface_height: RwSignal<u32>,
    pub orientation: RwSignal<ImageOrientation>,
    pub debug: RwSignal<bool>,
    /// Latest debug readout, `None` when debug is off.
    pub metrics: RwSignal<Option<Metrics>>,
    pub config: StoredValue<HostConfig>,
}

impl AppState {
    pub fn new(config: HostConfig) -> Self {
        Self {
            surface_width: RwSignal::new(config.surface_width),
            surface_height: RwSignal::new(config.surface_height),
            orientation: RwSignal::new(ImageOrientation::default()),
            debug: RwSignal::new(config.viewer.debug),
            metrics: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn image_src(&self, orientation: ImageOrientation) -> String {
        self.config.with_value(|cfg| match orientation {
            ImageOrientation::Landscape => cfg.landscape_src.clone(),
            ImageOrientation::Portrait => cfg.portrait_src.clone(),
        })
    }
}
