//! Editor shell: one canvas plus the palette store, built from config.

use crate::config::AppConfig;
use emojiart_core::palette::math_palette;
use emojiart_core::{Canvas, Document, DropPayload, GestureEvent, PaletteStore};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A non-gesture user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorAction {
    /// Drop text items at a screen location.
    Drop { payloads: Vec<String>, x: f64, y: f64 },
    /// Chooser button: show the next palette.
    NextPalette,
    /// Chooser menu "New": insert the Math palette at the cursor.
    NewPalette,
    /// Chooser menu "Delete": remove the palette under the cursor.
    DeletePalette,
}

/// The running editor.
#[derive(Debug, Clone)]
pub struct Editor {
    pub canvas: Canvas,
    pub palettes: PaletteStore,
}

impl Editor {
    /// Bootstrap an editor from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let document = if config.starter_stickers {
            Document::starter()
        } else {
            Document::new()
        };
        let mut canvas = Canvas::with_document(document);
        canvas.set_viewport_size(config.viewport_width, config.viewport_height);
        canvas.drop_size = config.palette_emoji_size;

        let palettes = PaletteStore::new(config.store_name.clone());
        log::info!(
            "Editor ready: {} stickers, {} palettes in {:?}",
            canvas.document.stickers().len(),
            palettes.len(),
            palettes.name()
        );
        Self { canvas, palettes }
    }

    pub fn handle_gesture(&mut self, event: GestureEvent) {
        self.canvas.handle_gesture(event);
    }

    /// Apply an action. Returns false for a drop nothing accepted or a
    /// refused palette deletion.
    pub fn apply(&mut self, action: &EditorAction) -> bool {
        match action {
            EditorAction::Drop { payloads, x, y } => {
                let payloads: Vec<_> = payloads.iter().map(|t| DropPayload::from_text(t)).collect();
                self.canvas.drop_payloads(&payloads, Point::new(*x, *y))
            }
            EditorAction::NextPalette => {
                self.palettes.advance_cursor(1);
                log::debug!("Showing palette {:?}", self.palettes.current().name);
                true
            }
            EditorAction::NewPalette => {
                self.palettes.insert(math_palette(), None);
                true
            }
            EditorAction::DeletePalette => self.palettes.remove_current().is_some(),
        }
    }
}
