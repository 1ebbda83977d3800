//! Gesture events delivered by the platform and the in-flight gesture state.

use crate::sticker::StickerId;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// What a tap landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapTarget {
    Sticker(StickerId),
    /// Empty canvas or the background image.
    Background,
}

/// A recognized gesture.
///
/// `*Updated` events carry the running value since the gesture began and are
/// preview-only. `*Ended` events carry the final value and are the only ones
/// that change the document or the committed view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureEvent {
    Tap(TapTarget),
    LongPressEnded,
    DragUpdated(Vec2),
    DragEnded(Vec2),
    PinchUpdated(f64),
    PinchEnded(f64),
}

/// Values of gestures that are still in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    /// Running pinch scale (1.0 when no pinch is active).
    pub pinch: f64,
    /// Running drag translation (zero when no drag is active).
    pub drag: Vec2,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            pinch: 1.0,
            drag: Vec2::ZERO,
        }
    }
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pinching(&self) -> bool {
        (self.pinch - 1.0).abs() > f64::EPSILON
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != Vec2::ZERO
    }

    pub fn update_pinch(&mut self, scale: f64) {
        self.pinch = scale;
    }

    pub fn update_drag(&mut self, translation: Vec2) {
        self.drag = translation;
    }

    /// Drop the running pinch and return the final scale unchanged.
    pub fn end_pinch(&mut self, scale: f64) -> f64 {
        self.pinch = 1.0;
        scale
    }

    /// Drop the running drag and return the final translation unchanged.
    pub fn end_drag(&mut self, translation: Vec2) -> Vec2 {
        self.drag = Vec2::ZERO;
        translation
    }
}
