//! Main application entry point.

use clap::Parser;
use emojiart_app::{AppConfig, ConfigError, Editor, SessionError, Snapshot, session};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level errors.
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Failed to write snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(name = "emojiart", about = "Replay an EmojiArt input session and print the result")]
struct Cli {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON session script. Without one, the starting state is printed.
    script: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), AppError> {
    let output = snapshot_json(&cli)?;
    println!("{}", output);
    Ok(())
}

fn snapshot_json(cli: &Cli) -> Result<String, AppError> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let mut editor = Editor::new(&config);

    if let Some(path) = &cli.script {
        let steps = session::load_script(path)?;
        session::run(&mut editor, &steps);
    }

    Ok(Snapshot::of(&editor).to_json()?)
}

fn main() {
    env_logger::init();
    log::info!("Starting EmojiArt");

    if let Err(e) = run(Cli::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::parse_from(["emojiart"]);
        let json = snapshot_json(&cli).unwrap();
        assert!(json.contains("\"palette\": \"Vehicles\""));
    }

    #[test]
    fn test_missing_config_is_config_error() {
        let cli = Cli::parse_from(["emojiart", "--config", "/nonexistent/config.json"]);
        let err = snapshot_json(&cli).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Io { .. })));
    }

    #[test]
    fn test_missing_script_is_session_error() {
        let cli = Cli::parse_from(["emojiart", "/nonexistent/session.json"]);
        let err = snapshot_json(&cli).unwrap_err();
        assert!(matches!(err, AppError::Session(SessionError::Io { .. })));
        assert!(err.to_string().contains("/nonexistent/session.json"));
    }
}
