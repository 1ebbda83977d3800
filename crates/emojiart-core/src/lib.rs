//! EmojiArt Core Library
//!
//! Platform-agnostic document model and interaction logic for the EmojiArt
//! canvas: placed stickers, selection-aware gesture routing, and palettes.

pub mod camera;
pub mod canvas;
pub mod document;
pub mod drop;
pub mod input;
pub mod palette;
pub mod selection;
pub mod sticker;

pub use camera::ViewTransform;
pub use canvas::{Canvas, StickerPreview};
pub use document::Document;
pub use drop::DropPayload;
pub use input::{GestureEvent, GestureState, TapTarget};
pub use palette::{Palette, PaletteId, PaletteStore};
pub use selection::Selection;
pub use sticker::{Position, Sticker, StickerCollection, StickerId};
