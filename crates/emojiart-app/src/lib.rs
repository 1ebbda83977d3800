//! EmojiArt Application
//!
//! Headless application shell: configuration, bootstrap of the starter
//! document and palettes, and replay of recorded input sessions.

mod config;
mod editor;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use editor::{Editor, EditorAction};
pub use session::{SessionError, SessionStep, Snapshot};
