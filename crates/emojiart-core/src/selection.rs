//! Sticker selection.

use crate::document::Document;
use crate::sticker::StickerId;
use std::collections::BTreeSet;

/// Set of selected sticker ids.
///
/// Only explicit user actions change it. Ids of deleted stickers may stay
/// in the set; they no longer resolve, so they are skipped by
/// [`Selection::live`] and by every document intent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<StickerId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: StickerId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: StickerId) -> bool {
        self.ids.contains(&id)
    }

    /// True if no ids are held, live or not.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All held ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = StickerId> + '_ {
        self.ids.iter().copied()
    }

    /// Held ids that still name a sticker in `document`.
    pub fn live<'a>(&'a self, document: &'a Document) -> impl Iterator<Item = StickerId> + 'a {
        self.ids().filter(|&id| document.sticker(id).is_some())
    }

    /// True if at least one held id still names a sticker in `document`.
    pub fn has_live(&self, document: &Document) -> bool {
        self.live(document).next().is_some()
    }
}
