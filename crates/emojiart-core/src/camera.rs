//! Canvas view transform: zoom and pan around the viewport center.

use crate::sticker::Position;
use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Ephemeral view state for the canvas.
///
/// Zoom and pan only change how the document is displayed; they are never
/// written into sticker positions or sizes. Model coordinates are anchored
/// at the viewport center with y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Committed zoom factor. Not clamped.
    pub zoom: f64,
    /// Committed pan offset in screen units.
    pub pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    /// Create a view with no zoom or pan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiply the zoom by a finished pinch's scale.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom *= factor;
    }

    /// Add a finished drag's translation to the pan.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Model to screen transform for a viewport of the given size.
    pub fn transform(&self, viewport: Size) -> Affine {
        Self::compose(viewport, self.zoom, self.pan)
    }

    /// Screen to model transform for a viewport of the given size.
    pub fn inverse_transform(&self, viewport: Size) -> Affine {
        let center = viewport.to_vec2() / 2.0;
        Affine::FLIP_Y * Affine::scale(1.0 / self.zoom) * Affine::translate(-(center + self.pan))
    }

    /// Model to screen transform with in-progress gesture values folded in.
    ///
    /// Used by the renderer while a pinch or drag is still moving.
    pub fn transform_with(&self, viewport: Size, live_zoom: f64, live_pan: Vec2) -> Affine {
        Self::compose(viewport, self.zoom * live_zoom, self.pan + live_pan)
    }

    fn compose(viewport: Size, zoom: f64, pan: Vec2) -> Affine {
        let center = viewport.to_vec2() / 2.0;
        Affine::translate(center + pan) * Affine::scale(zoom) * Affine::FLIP_Y
    }

    /// Screen point of a model position.
    pub fn model_to_screen(&self, position: Position, viewport: Size) -> Point {
        self.transform(viewport) * Point::new(f64::from(position.x), f64::from(position.y))
    }

    /// Model position under a screen point, truncated toward zero.
    pub fn screen_to_model(&self, screen_point: Point, viewport: Size) -> Position {
        let model = self.inverse_transform(viewport) * screen_point;
        Position::new(model.x as i32, model.y as i32)
    }
}
