use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// Inset of the usable area from the top/left canvas edge.
pub const MARGIN: f64 = 8.0;
/// Inset of the usable area's far edge from the right/bottom canvas edge.
pub const FAR_MARGIN: f64 = 16.0;

/// Logical drawing surface, in model units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 480.0,
        }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp a top-left corner into `[8, W-16-w] × [8, H-16-h]`. When the
    /// footprint is larger than the usable area the lower bound wins.
    pub fn clamp_origin(&self, origin: Point, width: f64, height: f64) -> Point {
        let max_x = self.width - FAR_MARGIN - width;
        let max_y = self.height - FAR_MARGIN - height;
        Point::new(
            MARGIN.max(max_x.min(origin.x)),
            MARGIN.max(max_y.min(origin.y)),
        )
    }

    pub fn clamp(&self, rect: &Rect) -> Rect {
        rect.at(self.clamp_origin(rect.origin(), rect.width, rect.height))
    }

    /// Top-left corner that centres a footprint on the canvas.
    pub fn centred_origin(&self, width: f64, height: f64) -> Point {
        Point::new((self.width - width) / 2.0, (self.height - height) / 2.0)
    }
}
