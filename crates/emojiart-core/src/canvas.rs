//! Runtime canvas: document, view, selection and gesture routing.

use crate::camera::ViewTransform;
use crate::document::Document;
use crate::drop::DropPayload;
use crate::input::{GestureEvent, GestureState, TapTarget};
use crate::selection::Selection;
use crate::sticker::StickerId;
use kurbo::{Point, Size, Vec2};

/// Default sticker size for drops, in screen units at zoom 1.
pub const DEFAULT_DROP_SIZE: f64 = 40.0;

/// Display adjustment for one sticker while a gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerPreview {
    /// Extra scale on top of the canvas scale.
    pub scale: f64,
    /// Extra screen offset.
    pub offset: Vec2,
}

impl StickerPreview {
    const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };
}

/// Runtime canvas state (the document plus everything not persisted).
///
/// Gestures are routed by selection: with nothing selected, pinch and drag
/// change the view; with a selection, they resize or move every selected
/// sticker by the same final amount.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// The document being edited.
    pub document: Document,
    /// Committed zoom and pan.
    pub view: ViewTransform,
    /// Selected sticker ids.
    pub selection: Selection,
    /// Running gesture values, preview only.
    pub gesture: GestureState,
    /// Viewport size.
    pub viewport_size: Size,
    /// Base size of dropped stickers before zoom compensation.
    pub drop_size: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a canvas with an empty document.
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    /// Create a canvas with an existing document.
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            view: ViewTransform::new(),
            selection: Selection::new(),
            gesture: GestureState::new(),
            viewport_size: Size::new(800.0, 600.0),
            drop_size: DEFAULT_DROP_SIZE,
        }
    }

    /// Set the viewport size.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = Size::new(width, height);
    }

    /// True when gestures should act on the view rather than on stickers.
    pub fn targets_view(&self) -> bool {
        !self.selection.has_live(&self.document)
    }

    /// Selected ids that still resolve, ascending.
    pub fn selected_ids(&self) -> Vec<StickerId> {
        self.selection.live(&self.document).collect()
    }

    pub fn is_selected(&self, id: StickerId) -> bool {
        self.selection.contains(id)
    }

    /// Apply one gesture event.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Tap(TapTarget::Sticker(id)) => {
                self.selection.toggle(id);
                log::debug!("Toggled selection of sticker {}", id);
            }
            GestureEvent::Tap(TapTarget::Background) => {
                self.selection.clear();
                log::debug!("Cleared selection");
            }
            GestureEvent::LongPressEnded => self.delete_selected(),
            GestureEvent::DragUpdated(translation) => self.gesture.update_drag(translation),
            GestureEvent::DragEnded(translation) => {
                let translation = self.gesture.end_drag(translation);
                self.finish_drag(translation);
            }
            GestureEvent::PinchUpdated(scale) => self.gesture.update_pinch(scale),
            GestureEvent::PinchEnded(scale) => {
                let scale = self.gesture.end_pinch(scale);
                self.finish_pinch(scale);
            }
        }
    }

    fn finish_drag(&mut self, translation: Vec2) {
        let targets = self.selected_ids();
        if targets.is_empty() {
            self.view.pan_by(translation);
            log::debug!("Panned view to {:?}", self.view.pan);
            return;
        }
        for id in targets {
            self.document.move_by_id(id, translation);
        }
    }

    fn finish_pinch(&mut self, scale: f64) {
        let targets = self.selected_ids();
        if targets.is_empty() {
            self.view.zoom_by(scale);
            log::debug!("Zoomed view to {}", self.view.zoom);
            return;
        }
        for id in targets {
            self.document.resize_by_id(id, scale);
        }
    }

    /// Delete every selected sticker. The selection itself is left alone.
    pub fn delete_selected(&mut self) {
        for id in self.selected_ids() {
            self.document.delete_by_id(id);
        }
    }

    /// Scale to draw the whole canvas with, including a running pinch when
    /// it targets the view.
    pub fn canvas_scale(&self) -> f64 {
        if self.gesture.is_pinching() && self.targets_view() {
            self.view.zoom * self.gesture.pinch
        } else {
            self.view.zoom
        }
    }

    /// Offset to draw the whole canvas with, including a running drag when
    /// it targets the view.
    pub fn canvas_offset(&self) -> Vec2 {
        if self.gesture.is_dragging() && self.targets_view() {
            self.view.pan + self.gesture.drag
        } else {
            self.view.pan
        }
    }

    /// Per-sticker preview while a gesture targets the selection.
    pub fn sticker_preview(&self, id: StickerId) -> StickerPreview {
        if self.is_selected(id) && !self.targets_view() {
            StickerPreview {
                scale: self.gesture.pinch,
                offset: self.gesture.drag,
            }
        } else {
            StickerPreview::IDENTITY
        }
    }

    /// Handle a drop at a screen location.
    ///
    /// Payloads are tried in order and the first usable one wins. Returns
    /// false if none was usable.
    pub fn drop_payloads(&mut self, payloads: &[DropPayload], location: Point) -> bool {
        for payload in payloads {
            match payload {
                DropPayload::Background(url) => {
                    self.document.set_background(Some(url.clone()));
                    return true;
                }
                DropPayload::Sticker(glyph) => {
                    let position = self.view.screen_to_model(location, self.viewport_size);
                    let size = self.drop_size / self.view.zoom;
                    self.document.add_sticker(glyph, position, size);
                    return true;
                }
                DropPayload::Data(bytes) => {
                    log::debug!("Skipping dropped image data ({} bytes)", bytes.len());
                }
            }
        }
        false
    }
}
