//! Scripted sessions: replay recorded input against an editor.
//!
//! A script is a JSON array whose entries are either gesture events
//! (`{"pinch_ended": 2.0}`, `{"tap": {"sticker": 1}}`, `"long_press_ended"`)
//! or editor actions (`{"drop": {"payloads": ["🐖"], "x": 10, "y": 20}}`,
//! `"next_palette"`).

use crate::editor::{Editor, EditorAction};
use emojiart_core::{Document, GestureEvent, StickerId};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid session script: {0}")]
    Script(#[from] serde_json::Error),
}

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionStep {
    Gesture(GestureEvent),
    Action(EditorAction),
}

/// Editor state after a session.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub document: Document,
    pub zoom: f64,
    pub pan: Vec2,
    pub selected: Vec<StickerId>,
    pub palette: String,
    pub palette_cursor: usize,
}

impl Snapshot {
    pub fn of(editor: &Editor) -> Self {
        Self {
            document: editor.canvas.document.clone(),
            zoom: editor.canvas.view.zoom,
            pan: editor.canvas.view.pan,
            selected: editor.canvas.selected_ids(),
            palette: editor.palettes.current().name.clone(),
            palette_cursor: editor.palettes.cursor_index(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Parse a script from JSON text.
pub fn parse_script(json: &str) -> Result<Vec<SessionStep>, SessionError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<SessionStep>, SessionError> {
    let text = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_script(&text)
}

/// Apply every step in order.
pub fn run(editor: &mut Editor, steps: &[SessionStep]) {
    for (index, step) in steps.iter().enumerate() {
        match step {
            SessionStep::Gesture(event) => editor.handle_gesture(*event),
            SessionStep::Action(action) => {
                if !editor.apply(action) {
                    log::warn!("Step {} had no effect: {:?}", index, action);
                }
            }
        }
    }
    log::info!("Replayed {} steps", steps.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojiart_core::TapTarget;

    #[test]
    fn test_parse_mixed_steps() {
        let steps = parse_script(
            r#"[
                {"tap": {"sticker": 1}},
                {"drag_ended": {"x": 1.0, "y": 2.0}},
                "long_press_ended",
                {"drop": {"payloads": ["🐖"], "x": 3.0, "y": 4.0}},
                "next_palette"
            ]"#,
        )
        .unwrap();

        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps[0],
            SessionStep::Gesture(GestureEvent::Tap(TapTarget::Sticker(1)))
        );
        assert_eq!(
            steps[1],
            SessionStep::Gesture(GestureEvent::DragEnded(Vec2::new(1.0, 2.0)))
        );
        assert_eq!(steps[2], SessionStep::Gesture(GestureEvent::LongPressEnded));
        assert!(matches!(steps[3], SessionStep::Action(EditorAction::Drop { .. })));
        assert_eq!(steps[4], SessionStep::Action(EditorAction::NextPalette));
    }

    #[test]
    fn test_parse_drop_step() {
        let steps = parse_script(r#"[{"drop": {"payloads": ["🐖"], "x": 1.0, "y": 2.0}}]"#).unwrap();
        assert_eq!(
            steps,
            vec![SessionStep::Action(EditorAction::Drop {
                payloads: vec!["🐖".to_string()],
                x: 1.0,
                y: 2.0,
            })]
        );
    }

    #[test]
    fn test_load_missing_script_names_path() {
        let err = load_script(Path::new("/nonexistent/session.json")).unwrap_err();
        assert!(matches!(err, SessionError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/session.json"));
    }

    #[test]
    fn test_parse_rejects_unknown_step() {
        let result = parse_script(r#"["wiggle"]"#);
        assert!(matches!(result, Err(SessionError::Script(_))));
    }
}
