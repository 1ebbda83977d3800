//! Placed stickers and the id-keyed collection that owns them.

use serde::{Deserialize, Serialize};

/// Identifier of a placed sticker. Assigned by the collection, never reused.
pub type StickerId = u64;

/// Offset of a sticker from the canvas center, in model units (y points up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The canvas center anchor.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A glyph placed on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    id: StickerId,
    content: String,
    /// Font size. Not clamped; shrinking can drive it to zero or below.
    pub size: i32,
    pub position: Position,
}

impl Sticker {
    pub fn id(&self) -> StickerId {
        self.id
    }

    /// The glyph (or text) this sticker shows.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered stickers (back to front) plus the id generator.
///
/// Lookups scan linearly and act on the first sticker with a matching id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StickerCollection {
    stickers: Vec<Sticker>,
    /// Last id handed out; ids start at 1.
    last_id: StickerId,
}

impl StickerCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new sticker on top of the z-order and return a copy of it.
    pub fn add(&mut self, content: impl Into<String>, position: Position, size: i32) -> Sticker {
        self.last_id += 1;
        let sticker = Sticker {
            id: self.last_id,
            content: content.into(),
            size,
            position,
        };
        self.stickers.push(sticker.clone());
        sticker
    }

    /// Remove the first sticker with `id`. Returns it if one was removed.
    pub fn delete(&mut self, id: StickerId) -> Option<Sticker> {
        let index = self.index_of(id)?;
        Some(self.stickers.remove(index))
    }

    /// Get the stored sticker with `id`.
    pub fn get(&self, id: StickerId) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.id == id)
    }

    /// Overwrite the mutable fields of the stored sticker with `id`.
    ///
    /// The stored id and content are kept. Returns false if `id` is absent.
    pub fn replace(&mut self, id: StickerId, updated: &Sticker) -> bool {
        match self.get_mut(id) {
            Some(stored) => {
                stored.size = updated.size;
                stored.position = updated.position;
                true
            }
            None => false,
        }
    }

    pub(crate) fn get_mut(&mut self, id: StickerId) -> Option<&mut Sticker> {
        self.stickers.iter_mut().find(|s| s.id == id)
    }

    fn index_of(&self, id: StickerId) -> Option<usize> {
        self.stickers.iter().position(|s| s.id == id)
    }

    /// Stickers in z-order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Sticker> {
        self.stickers.iter()
    }

    pub fn as_slice(&self) -> &[Sticker] {
        &self.stickers
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}
