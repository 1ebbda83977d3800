//! The EmojiArt document: a background reference and the placed stickers.

use crate::sticker::{Position, Sticker, StickerCollection, StickerId};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use url::Url;

/// A canvas document.
///
/// All mutation goes through the intent methods below. Intents that take a
/// [`Sticker`] only use its id: the value may be a stale copy held by a view,
/// so the stored sticker is looked up again and the intent does nothing if
/// it is gone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    background: Option<Url>,
    stickers: StickerCollection,
}

impl Document {
    /// Create an empty document with no background.
    pub fn new() -> Self {
        Self::default()
    }

    /// The document a fresh editor window opens with.
    pub fn starter() -> Self {
        let mut document = Self::new();
        document.add_sticker("🐄", Position::new(-200, -150), 200.0);
        document.add_sticker("🐖", Position::new(250, 100), 80.0);
        document
    }

    /// Background image reference, if any.
    pub fn background(&self) -> Option<&Url> {
        self.background.as_ref()
    }

    /// Stickers in z-order (back to front).
    pub fn stickers(&self) -> &[Sticker] {
        self.stickers.as_slice()
    }

    /// Look up a sticker by id.
    pub fn sticker(&self, id: StickerId) -> Option<&Sticker> {
        self.stickers.get(id)
    }

    /// Replace the background. The reference is stored as given.
    pub fn set_background(&mut self, background: Option<Url>) {
        log::debug!("Setting background to {:?}", background.as_ref().map(Url::as_str));
        self.background = background;
    }

    /// Place a new sticker. `size` is truncated toward zero.
    pub fn add_sticker(&mut self, content: &str, position: Position, size: f64) -> StickerId {
        let sticker = self.stickers.add(content, position, size as i32);
        log::debug!(
            "Added sticker {} {:?} at ({}, {}) size {}",
            sticker.id(),
            sticker.content(),
            position.x,
            position.y,
            sticker.size
        );
        sticker.id()
    }

    /// Delete the stored sticker with the same id as `sticker`.
    pub fn delete(&mut self, sticker: &Sticker) {
        self.delete_by_id(sticker.id());
    }

    pub fn delete_by_id(&mut self, id: StickerId) {
        match self.stickers.delete(id) {
            Some(_) => log::debug!("Deleted sticker {}", id),
            None => log::trace!("Delete ignored, no sticker {}", id),
        }
    }

    /// Move a sticker by a screen-space offset.
    ///
    /// Screen y grows downward and model y grows upward, so the vertical
    /// component is subtracted.
    pub fn move_sticker(&mut self, sticker: &Sticker, offset: Vec2) {
        self.move_by_id(sticker.id(), offset);
    }

    pub fn move_by_id(&mut self, id: StickerId, offset: Vec2) {
        let Some(mut moved) = self.stickers.get(id).cloned() else {
            log::trace!("Move ignored, no sticker {}", id);
            return;
        };
        let existing = moved.position;
        moved.position = Position::new(
            existing.x.saturating_add(offset.x as i32),
            existing.y.saturating_sub(offset.y as i32),
        );
        log::debug!(
            "Moved sticker {} from ({}, {}) to ({}, {})",
            id,
            existing.x,
            existing.y,
            moved.position.x,
            moved.position.y
        );
        self.stickers.replace(id, &moved);
    }

    /// Scale a sticker's size by `scale`, truncating the result.
    pub fn resize(&mut self, sticker: &Sticker, scale: f64) {
        self.resize_by_id(sticker.id(), scale);
    }

    pub fn resize_by_id(&mut self, id: StickerId, scale: f64) {
        let Some(mut resized) = self.stickers.get(id).cloned() else {
            log::trace!("Resize ignored, no sticker {}", id);
            return;
        };
        let previous = resized.size;
        resized.size = (f64::from(previous) * scale) as i32;
        log::debug!("Resized sticker {} from {} to {}", id, previous, resized.size);
        self.stickers.replace(id, &resized);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(size: i32) -> (Document, StickerId) {
        let mut doc = Document::new();
        let id = doc.add_sticker("🌲", Position::ZERO, f64::from(size));
        (doc, id)
    }

    #[test]
    fn test_document_creation() {
        let doc = Document::new();
        assert!(doc.stickers().is_empty());
        assert!(doc.background().is_none());
    }

    #[test]
    fn test_starter_document() {
        let doc = Document::starter();
        let stickers = doc.stickers();
        assert_eq!(stickers.len(), 2);
        assert_eq!(stickers[0].content(), "🐄");
        assert_eq!(stickers[0].position, Position::new(-200, -150));
        assert_eq!(stickers[0].size, 200);
        assert_eq!(stickers[1].content(), "🐖");
        assert_eq!(stickers[1].position, Position::new(250, 100));
        assert_eq!(stickers[1].size, 80);
    }

    #[test]
    fn test_add_sticker_truncates_size() {
        let mut doc = Document::new();
        let a = doc.add_sticker("a", Position::ZERO, 40.9);
        let b = doc.add_sticker("b", Position::ZERO, -3.7);
        assert_eq!(doc.sticker(a).unwrap().size, 40);
        assert_eq!(doc.sticker(b).unwrap().size, -3);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut doc = Document::new();
        let ids: Vec<_> = (0..10)
            .map(|i| doc.add_sticker("x", Position::new(i, -i), 10.0))
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_set_background_replaces_unconditionally() {
        let mut doc = Document::new();
        let url = Url::parse("https://example.com/a.jpg").unwrap();
        doc.set_background(Some(url.clone()));
        assert_eq!(doc.background(), Some(&url));
        doc.set_background(None);
        assert!(doc.background().is_none());
    }

    #[test]
    fn test_move_flips_vertical_axis() {
        let (mut doc, id) = doc_with(40);
        doc.move_by_id(id, Vec2::new(30.0, 20.0));
        assert_eq!(doc.sticker(id).unwrap().position, Position::new(30, -20));
    }

    #[test]
    fn test_move_truncates_offset_components() {
        let (mut doc, id) = doc_with(40);
        doc.move_by_id(id, Vec2::new(10.9, -4.9));
        assert_eq!(doc.sticker(id).unwrap().position, Position::new(10, 4));
    }

    #[test]
    fn test_move_disjoint_ids_order_independent() {
        let mut a = Document::new();
        let x = a.add_sticker("x", Position::new(1, 1), 10.0);
        let y = a.add_sticker("y", Position::new(-5, 7), 10.0);
        let mut b = a.clone();

        a.move_by_id(x, Vec2::new(3.0, 4.0));
        a.move_by_id(y, Vec2::new(-2.0, 9.0));
        b.move_by_id(y, Vec2::new(-2.0, 9.0));
        b.move_by_id(x, Vec2::new(3.0, 4.0));

        assert_eq!(a, b);
        assert_eq!(a.sticker(x).unwrap().position, Position::new(4, -3));
        assert_eq!(a.sticker(y).unwrap().position, Position::new(-7, -2));
    }

    #[test]
    fn test_move_uses_stored_position_not_stale_copy() {
        let (mut doc, id) = doc_with(40);
        let stale = doc.sticker(id).unwrap().clone();
        doc.move_by_id(id, Vec2::new(10.0, 0.0));
        doc.move_sticker(&stale, Vec2::new(10.0, 0.0));
        assert_eq!(doc.sticker(id).unwrap().position, Position::new(20, 0));
    }

    #[test]
    fn test_intents_on_deleted_sticker_are_noops() {
        let (mut doc, id) = doc_with(40);
        let stale = doc.sticker(id).unwrap().clone();
        doc.delete(&stale);
        let after_delete = doc.clone();

        doc.move_sticker(&stale, Vec2::new(5.0, 5.0));
        doc.resize(&stale, 2.0);
        doc.delete(&stale);
        doc.move_by_id(999, Vec2::new(1.0, 1.0));
        doc.resize_by_id(999, 3.0);
        doc.delete_by_id(999);

        assert_eq!(doc, after_delete);
        assert!(doc.sticker(id).is_none());
    }

    #[test]
    fn test_resize_truncates() {
        let (mut doc, id) = doc_with(45);
        doc.resize_by_id(id, 1.5);
        assert_eq!(doc.sticker(id).unwrap().size, 67);
    }

    #[test]
    fn test_resize_is_not_a_round_trip() {
        let (mut doc, id) = doc_with(45);
        let f = 1.3;
        doc.resize_by_id(id, f);
        doc.resize_by_id(id, 1.0 / f);

        let expected = ((f64::from((45.0 * f) as i32)) * (1.0 / f)) as i32;
        assert_eq!(doc.sticker(id).unwrap().size, expected);
        assert_eq!(expected, 44);
        assert_ne!(doc.sticker(id).unwrap().size, 45);
    }

    #[test]
    fn test_resize_does_not_clamp() {
        let (mut doc, id) = doc_with(10);
        doc.resize_by_id(id, 0.05);
        assert_eq!(doc.sticker(id).unwrap().size, 0);

        let (mut doc, id) = doc_with(10);
        doc.resize_by_id(id, -2.0);
        assert_eq!(doc.sticker(id).unwrap().size, -20);
    }

    #[test]
    fn test_resize_keeps_content_and_position() {
        let mut doc = Document::new();
        let id = doc.add_sticker("🍄", Position::new(7, 8), 30.0);
        doc.resize_by_id(id, 2.0);
        let sticker = doc.sticker(id).unwrap();
        assert_eq!(sticker.content(), "🍄");
        assert_eq!(sticker.position, Position::new(7, 8));
        assert_eq!(sticker.size, 60);
    }

    #[test]
    fn test_document_serializes_to_json() {
        let doc = Document::starter();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["stickers"]["stickers"][1]["content"], "🐖");
        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
