//! The palette list shown by the chooser.

use super::{Palette, builtin_palettes};
use serde::Serialize;

/// A named, never-empty list of palettes with a wrapping cursor.
///
/// Inserting or appending a palette whose id is already present replaces
/// that palette instead of adding a second copy. Existing duplicates are not
/// repaired, only never introduced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteStore {
    name: String,
    palettes: Vec<Palette>,
    /// Reduced modulo the current length on every read.
    cursor: usize,
}

impl PaletteStore {
    /// Create a store holding the built-in palettes.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_palettes(name, builtin_palettes())
    }

    /// Create a store from an initial list. An empty list is replaced by a
    /// single warning palette.
    pub fn with_palettes(name: impl Into<String>, palettes: Vec<Palette>) -> Self {
        let name = name.into();
        let palettes = if palettes.is_empty() {
            log::warn!("Palette store {:?} started empty, using fallback palette", name);
            vec![Palette::new("Warning", "⚠️")]
        } else {
            palettes
        };
        Self {
            name,
            palettes,
            cursor: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Never true; the list cannot become empty.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Replace the whole list. An empty list is refused and the current
    /// list is kept.
    pub fn set_palettes(&mut self, palettes: Vec<Palette>) {
        if palettes.is_empty() {
            log::warn!("Refusing to remove every palette from {:?}", self.name);
            return;
        }
        self.palettes = palettes;
    }

    /// Wrap any integer into `0..len` with a true modulo.
    fn wrap(&self, index: isize) -> usize {
        let count = self.palettes.len() as isize;
        index.rem_euclid(count) as usize
    }

    /// Index of the palette currently shown.
    pub fn cursor_index(&self) -> usize {
        self.cursor % self.palettes.len()
    }

    /// Move the cursor. Any value is accepted and wrapped into range.
    pub fn set_cursor_index(&mut self, index: isize) {
        self.cursor = self.wrap(index);
    }

    /// Step the cursor forward (or back for negative `by`), wrapping.
    pub fn advance_cursor(&mut self, by: isize) {
        let next = self.cursor_index() as isize + by;
        self.set_cursor_index(next);
    }

    /// The palette under the cursor.
    pub fn current(&self) -> &Palette {
        &self.palettes[self.cursor_index()]
    }

    /// Insert at `index` (default: the cursor), wrapped into range.
    ///
    /// If a palette with the same id exists it is moved to that index and
    /// takes the new content.
    pub fn insert(&mut self, palette: Palette, index: Option<isize>) {
        let index = match index {
            Some(index) => self.wrap(index),
            None => self.cursor_index(),
        };
        if let Some(existing) = self.position_of(&palette) {
            self.palettes.remove(existing);
            log::debug!("Moving palette {:?} from {} to {}", palette.name, existing, index);
        } else {
            log::debug!("Inserting palette {:?} at {}", palette.name, index);
        }
        let index = index.min(self.palettes.len());
        self.palettes.insert(index, palette);
    }

    pub fn insert_named(&mut self, name: &str, emojis: &str, index: Option<isize>) {
        self.insert(Palette::new(name, emojis), index);
    }

    /// Add at the end. A palette with the same id is taken out of its old
    /// slot first (or replaced in place when it is the only one).
    pub fn append(&mut self, palette: Palette) {
        if let Some(existing) = self.position_of(&palette) {
            if self.palettes.len() == 1 {
                self.palettes = vec![palette];
                return;
            }
            self.palettes.remove(existing);
        }
        log::debug!("Appending palette {:?}", palette.name);
        self.palettes.push(palette);
    }

    pub fn append_named(&mut self, name: &str, emojis: &str) {
        self.append(Palette::new(name, emojis));
    }

    /// Remove the palette at `index`. The last remaining palette cannot be
    /// removed; `None` is returned and nothing changes.
    pub fn remove(&mut self, index: usize) -> Option<Palette> {
        if index >= self.palettes.len() {
            return None;
        }
        if self.palettes.len() == 1 {
            log::warn!("Refusing to delete the last palette of {:?}", self.name);
            return None;
        }
        let removed = self.palettes.remove(index);
        log::debug!("Removed palette {:?}", removed.name);
        Some(removed)
    }

    /// Remove the palette under the cursor.
    pub fn remove_current(&mut self) -> Option<Palette> {
        self.remove(self.cursor_index())
    }

    fn position_of(&self, palette: &Palette) -> Option<usize> {
        self.palettes.iter().position(|p| p.id == palette.id)
    }
}
