//! Editor configuration.
//!
//! Every field has a default so a partial JSON object (or `{}`) is valid.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// New items are placed in `[0, canvas_width - placement_margin_x)`.
    pub placement_margin_x: f32,
    /// New items are placed in `[0, canvas_height - placement_margin_y)`.
    pub placement_margin_y: f32,
    /// Undo depth cap. `None` keeps every entry for the session.
    pub max_history: Option<usize>,
    /// Fixed RNG seed for reproducible placement.
    pub seed: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            placement_margin_x: 100.0,
            placement_margin_y: 50.0,
            max_history: None,
            seed: None,
        }
    }
}

impl EditorConfig {
    /// Default config for a canvas of the given size.
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_canvas(self.canvas_width, self.canvas_height)?;
        let margin_ok = |m: f32| m.is_finite() && m >= 0.0;
        if !(margin_ok(self.placement_margin_x) && margin_ok(self.placement_margin_y)) {
            return Err(ConfigError::PlacementMargin {
                x: self.placement_margin_x,
                y: self.placement_margin_y,
            });
        }
        Ok(())
    }

    /// Canvas dimensions must be positive and finite. JSON numbers beyond
    /// `f32::MAX` deserialize to infinity, so `> 0` alone is not enough.
    pub fn check_canvas(width: f32, height: f32) -> Result<(), ConfigError> {
        let dim_ok = |d: f32| d.is_finite() && d > 0.0;
        if dim_ok(width) && dim_ok(height) {
            Ok(())
        } else {
            Err(ConfigError::CanvasSize { width, height })
        }
    }

    /// Exclusive upper bounds of the random placement range. Collapses to
    /// zero when the canvas is smaller than the margin.
    pub fn placement_range(&self) -> (f32, f32) {
        (
            (self.canvas_width - self.placement_margin_x).max(0.0),
            (self.canvas_height - self.placement_margin_y).max(0.0),
        )
    }
}
