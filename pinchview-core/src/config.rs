use serde::{Deserialize, Serialize};

/// Viewer tuning knobs. Every field falls back to its default when absent
/// from the JSON source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Lower zoom bound (inclusive).
    pub min_scale: f64,
    /// Upper zoom bound (inclusive).
    pub max_scale: f64,
    pub grid_rows: u32,
    pub grid_columns: u32,
    /// Draw gesture markers and publish metrics each frame.
    pub debug: bool,
    /// Radius of the pinch-midpoint disc at scale 1.
    pub pinch_marker_radius: f64,
    pub anchor_marker_radius: f64,
    /// Pinches starting with fingers closer than this are treated as degenerate.
    pub min_pinch_distance: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 10.0,
            grid_rows: 10,
            grid_columns: 10,
            debug: false,
            pinch_marker_radius: 10.0,
            anchor_marker_radius: 4.0,
            min_pinch_distance: 1e-6,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<ViewerConfig>(json).map(ViewerConfig::sanitized)
    }

    /// Repair values that would break the clamp or grid drawing.
    pub fn sanitized(mut self) -> Self {
        let defaults = ViewerConfig::default();
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            log::warn!("min_scale {} is not positive, using {}", self.min_scale, defaults.min_scale);
            self.min_scale = defaults.min_scale;
        }
        if !(self.max_scale.is_finite() && self.max_scale > 0.0) {
            log::warn!("max_scale {} is not positive, using {}", self.max_scale, defaults.max_scale);
            self.max_scale = defaults.max_scale;
        }
        if self.min_scale > self.max_scale {
            log::warn!(
                "scale bounds inverted ({} > {}), swapping",
                self.min_scale,
                self.max_scale
            );
            std::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        // fit and snap-back always land on scale 1
        if self.min_scale > 1.0 {
            log::warn!("min_scale {} excludes the fitted scale 1, using 1", self.min_scale);
            self.min_scale = 1.0;
        }
        if self.max_scale < 1.0 {
            log::warn!("max_scale {} excludes the fitted scale 1, using 1", self.max_scale);
            self.max_scale = 1.0;
        }
        if self.grid_rows == 0 {
            log::warn!("grid_rows is 0, using {}", defaults.grid_rows);
            self.grid_rows = defaults.grid_rows;
        }
        if self.grid_columns == 0 {
            log::warn!("grid_columns is 0, using {}", defaults.grid_columns);
            self.grid_columns = defaults.grid_columns;
        }
        if !(self.min_pinch_distance.is_finite() && self.min_pinch_distance > 0.0) {
            self.min_pinch_distance = defaults.min_pinch_distance;
        }
        self
    }

    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = ViewerConfig::from_json(r#"{"max_scale": 4.0, "debug": true}"#).unwrap();
        assert_eq!(cfg.max_scale, 4.0);
        assert!(cfg.debug);
        assert_eq!(cfg.min_scale, 0.5);
        assert_eq!(cfg.grid_rows, 10);
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let cfg = ViewerConfig::from_json(r#"{"min_scale": 3.0, "max_scale": 0.25}"#).unwrap();
        assert_eq!(cfg.min_scale, 0.25);
        assert_eq!(cfg.max_scale, 3.0);
    }

    #[test]
    fn test_bounds_always_admit_scale_one() {
        let cfg = ViewerConfig { min_scale: 2.0, ..Default::default() }.sanitized();
        assert_eq!(cfg.min_scale, 1.0);
        assert_eq!(cfg.max_scale, 10.0);

        let cfg = ViewerConfig { max_scale: 0.8, ..Default::default() }.sanitized();
        assert_eq!(cfg.min_scale, 0.5);
        assert_eq!(cfg.max_scale, 1.0);

        // swapped first, then widened to reach 1
        let cfg = ViewerConfig::from_json(r#"{"min_scale": 8.0, "max_scale": 2.0}"#).unwrap();
        assert_eq!((cfg.min_scale, cfg.max_scale), (1.0, 8.0));
    }

    #[test]
    fn test_zero_grid_and_negative_scale_repaired() {
        let cfg = ViewerConfig::from_json(r#"{"grid_rows": 0, "min_scale": -1.0}"#).unwrap();
        assert_eq!(cfg.grid_rows, 10);
        assert_eq!(cfg.min_scale, 0.5);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ViewerConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_clamp_scale() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.clamp_scale(0.1), 0.5);
        assert_eq!(cfg.clamp_scale(50.0), 10.0);
        assert_eq!(cfg.clamp_scale(2.0), 2.0);
    }
}
