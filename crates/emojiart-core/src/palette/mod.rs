//! Palettes of quick-pick glyphs.

mod builtins;
mod store;

pub use builtins::{builtin_palettes, math_palette};
pub use store::PaletteStore;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

/// Unique identifier for palettes.
pub type PaletteId = Uuid;

/// A named list of distinct glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPalette")]
pub struct Palette {
    pub(crate) id: PaletteId,
    pub name: String,
    /// One grapheme cluster per entry, in first-seen order, no repeats.
    emojis: Vec<String>,
}

/// Palette as read from JSON, before glyph de-duplication.
#[derive(Deserialize)]
struct RawPalette {
    id: PaletteId,
    name: String,
    emojis: Vec<String>,
}

impl From<RawPalette> for Palette {
    fn from(raw: RawPalette) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            emojis: unique_glyphs(raw.emojis.iter().flat_map(|e| e.graphemes(true))),
        }
    }
}

impl Palette {
    /// Create a palette with a fresh id from a run of glyphs.
    pub fn new(name: impl Into<String>, emojis: &str) -> Self {
        Self::with_id(Uuid::new_v4(), name, emojis)
    }

    /// Create a palette that shares `id` with an existing one.
    ///
    /// Inserting or appending it into a store replaces the palette with
    /// that id.
    pub fn with_id(id: PaletteId, name: impl Into<String>, emojis: &str) -> Self {
        Self {
            id,
            name: name.into(),
            emojis: unique_glyphs(emojis.graphemes(true)),
        }
    }

    pub fn id(&self) -> PaletteId {
        self.id
    }

    pub fn emojis(&self) -> &[String] {
        &self.emojis
    }
}

/// Keep the first occurrence of each grapheme cluster.
fn unique_glyphs<'a>(graphemes: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut glyphs: Vec<String> = Vec::new();
    for glyph in graphemes {
        if !glyphs.iter().any(|g| g == glyph) {
            glyphs.push(glyph.to_string());
        }
    }
    glyphs
}
