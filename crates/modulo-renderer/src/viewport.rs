use serde::{Deserialize, Serialize};

use modulo_core::{BBox, EditorSettings, Point};

/// Zoom bounds and step factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    /// Factor per wheel notch.
    pub wheel_step: f64,
    /// Factor per zoom-in/zoom-out action.
    pub button_step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 3.0,
            wheel_step: 1.05,
            button_step: 1.2,
        }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }
}

/// Pan/zoom state of the canvas.
///
/// Screen = model × `base_scale` × `zoom` + pan. `base_scale` fits the logical
/// canvas into its container; `zoom` is the user's magnification on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Pan offset in screen pixels.
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    /// Container-fit factor.
    pub base_scale: f64,
    /// Logical canvas width in model units.
    pub canvas_width: f64,
    /// Logical canvas height in model units.
    pub canvas_height: f64,
    pub limits: ZoomLimits,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
            base_scale: 1.0,
            canvas_width,
            canvas_height,
            limits: ZoomLimits::default(),
        }
    }

    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self {
            limits: ZoomLimits {
                min: settings.zoom_min,
                max: settings.zoom_max,
                wheel_step: settings.wheel_zoom_step,
                button_step: settings.button_zoom_step,
            },
            ..Self::new(settings.canvas_width, settings.canvas_height)
        }
    }

    /// Effective pixels per model unit.
    pub fn scale(&self) -> f64 {
        self.base_scale * self.zoom
    }

    /// Convert a pointer position to model coordinates.
    pub fn screen_to_model(&self, screen: Point) -> Point {
        let s = self.scale();
        Point::new((screen.x - self.pan_x) / s, (screen.y - self.pan_y) / s)
    }

    /// Convert model coordinates to a screen position.
    pub fn model_to_screen(&self, model: Point) -> Point {
        let s = self.scale();
        Point::new(model.x * s + self.pan_x, model.y * s + self.pan_y)
    }

    /// Zoom by `factor` keeping the model point under `screen` fixed.
    pub fn zoom_at(&mut self, screen: Point, factor: f64) {
        // Convert screen to model before zoom
        let model = self.screen_to_model(screen);

        self.zoom = self.limits.clamp(self.zoom * factor);

        // Re-anchor so the same model point sits under the cursor
        let s = self.scale();
        self.pan_x = screen.x - model.x * s;
        self.pan_y = screen.y - model.y * s;
    }

    /// One wheel notch at the pointer. Scrolling down (`delta_y > 0`) zooms out.
    pub fn wheel(&mut self, screen: Point, delta_y: f64) {
        let step = self.limits.wheel_step;
        let factor = if delta_y > 0.0 { 1.0 / step } else { step };
        self.zoom_at(screen, factor);
    }

    pub fn zoom_in(&mut self) {
        let centre = self.stage_centre();
        self.zoom_at(centre, self.limits.button_step);
    }

    pub fn zoom_out(&mut self) {
        let centre = self.stage_centre();
        self.zoom_at(centre, 1.0 / self.limits.button_step);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Fit the logical canvas into a container, leaving a 2% margin.
    pub fn fit_container(&mut self, container_width: f64, container_height: f64) {
        let scale_x = container_width / self.canvas_width;
        let scale_y = container_height / self.canvas_height;
        let fitted = scale_x.min(scale_y) * 0.98;
        if fitted.is_finite() && fitted > 0.0 {
            self.base_scale = fitted;
        } else {
            log::warn!(
                "ignoring container size {}x{}",
                container_width,
                container_height
            );
        }
    }

    /// Stage size in screen pixels (unaffected by zoom).
    pub fn stage_size(&self) -> (f64, f64) {
        (
            self.canvas_width * self.base_scale,
            self.canvas_height * self.base_scale,
        )
    }

    fn stage_centre(&self) -> Point {
        let (w, h) = self.stage_size();
        Point::new(w / 2.0, h / 2.0)
    }

    /// The model-space region currently visible on the stage.
    pub fn visible_bounds(&self) -> BBox {
        let (w, h) = self.stage_size();
        BBox::new(
            self.screen_to_model(Point::new(0.0, 0.0)),
            self.screen_to_model(Point::new(w, h)),
        )
    }

    /// Zoom as a whole percentage, for display.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pointer_to_model() {
        let mut vp = Viewport::new(700.0, 480.0);
        vp.base_scale = 0.5;
        vp.zoom = 2.0;
        vp.pan_x = 10.0;
        vp.pan_y = -20.0;
        let m = vp.screen_to_model(Point::new(110.0, 80.0));
        assert_relative_eq!(m.x, 100.0);
        assert_relative_eq!(m.y, 100.0);
        let back = vp.model_to_screen(m);
        assert_relative_eq!(back.x, 110.0);
        assert_relative_eq!(back.y, 80.0);
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let mut vp = Viewport::new(700.0, 480.0);
        vp.base_scale = 0.8;
        let cursor = Point::new(233.0, 141.0);
        let before = vp.screen_to_model(cursor);
        vp.zoom_at(cursor, 1.05);
        let after = vp.screen_to_model(cursor);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-9);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-9);
    }

    #[test]
    fn test_wheel_in_then_out_restores_pan() {
        let mut vp = Viewport::new(700.0, 480.0);
        vp.base_scale = 0.9;
        vp.pan_x = 12.0;
        vp.pan_y = -7.0;
        let cursor = Point::new(400.0, 250.0);
        for _ in 0..6 {
            vp.wheel(cursor, -100.0);
        }
        for _ in 0..6 {
            vp.wheel(cursor, 100.0);
        }
        assert_relative_eq!(vp.zoom, 1.0, epsilon = 1e-9);
        assert_relative_eq!(vp.pan_x, 12.0, epsilon = 1e-9);
        assert_relative_eq!(vp.pan_y, -7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut vp = Viewport::new(700.0, 480.0);
        for _ in 0..50 {
            vp.zoom_in();
        }
        assert_relative_eq!(vp.zoom, 3.0);
        for _ in 0..50 {
            vp.zoom_out();
        }
        assert_relative_eq!(vp.zoom, 0.5);
        vp.reset_zoom();
        assert_eq!(vp.zoom_percent(), 100);
    }

    #[test]
    fn test_fit_container() {
        let mut vp = Viewport::new(700.0, 480.0);
        vp.fit_container(1400.0, 480.0);
        assert_relative_eq!(vp.base_scale, 0.98);
        let (w, h) = vp.stage_size();
        assert_relative_eq!(w, 686.0, epsilon = 1e-9);
        assert_relative_eq!(h, 470.4, epsilon = 1e-9);

        vp.fit_container(0.0, 480.0);
        assert_relative_eq!(vp.base_scale, 0.98);
    }

    #[test]
    fn test_visible_bounds_at_rest() {
        let vp = Viewport::new(700.0, 480.0);
        let bb = vp.visible_bounds();
        assert_relative_eq!(bb.max.x, 700.0);
        assert_relative_eq!(bb.max.y, 480.0);
    }
}
