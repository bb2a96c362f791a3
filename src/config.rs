use pinchview_core::ViewerConfig;
use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` block holding the
/// page configuration.
pub const CONFIG_ELEMENT_ID: &str = "pinchview-config";

/// Page-level configuration: viewer tuning plus the host's initial surface
/// size and image sources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub viewer: ViewerConfig,
    pub surface_width: u32,
    pub surface_height: u32,
    pub landscape_src: String,
    pub portrait_src: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            viewer: ViewerConfig::default(),
            surface_width: 360,
            surface_height: 640,
            landscape_src: "images/landscape.jpg".to_string(),
            portrait_src: "images/portrait.jpg".to_string(),
        }
    }
}

impl HostConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: HostConfig = serde_json::from_str(json)?;
        cfg.viewer = cfg.viewer.sanitized();
        if cfg.surface_width == 0 || cfg.surface_height == 0 {
            let defaults = HostConfig::default();
            log::warn!(
                "surface size {}x{} is empty, using {}x{}",
                cfg.surface_width,
                cfg.surface_height,
                defaults.surface_width,
                defaults.surface_height
            );
            cfg.surface_width = defaults.surface_width;
            cfg.surface_height = defaults.surface_height;
        }
        Ok(cfg)
    }

    /// Read the config block from the current document, falling back to
    /// defaults when it is missing or malformed.
    pub fn from_page() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(text) = text else {
            return HostConfig::default();
        };
        match HostConfig::from_json(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Invalid #{CONFIG_ELEMENT_ID} block, using defaults: {e}");
                HostConfig::default()
            }
        }
    }
}
