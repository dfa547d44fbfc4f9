use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;

/// Tunables for the editor. Every field has a default, so partial settings
/// files are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Spacing between snapped cabinets.
    pub principal_gap: f64,
    /// Spacing between a base/top and the cabinets it is centred on.
    pub horizontal_gap: f64,
    /// Spacing between an internal module lifted onto a top and that top.
    pub internal_gap: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Multiplicative zoom change per wheel notch.
    pub wheel_zoom_step: f64,
    /// Multiplicative zoom change per zoom-in/zoom-out action.
    pub button_zoom_step: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_width: 700.0,
            canvas_height: 480.0,
            principal_gap: 4.0,
            horizontal_gap: 4.0,
            internal_gap: 2.0,
            zoom_min: 0.5,
            zoom_max: 3.0,
            wheel_zoom_step: 1.05,
            button_zoom_step: 1.2,
        }
    }
}

impl EditorSettings {
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.canvas_width, self.canvas_height)
    }
}
