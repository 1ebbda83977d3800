//! Payloads dropped onto the canvas.

use serde::{Deserialize, Serialize};
use url::Url;

/// URL schemes accepted as background references.
const BACKGROUND_SCHEMES: &[&str] = &["http", "https", "file", "data"];

/// One item of a drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPayload {
    /// Image reference to use as the document background.
    Background(Url),
    /// Glyph to place as a new sticker.
    Sticker(String),
    /// Raw image bytes. Not handled yet.
    Data(Vec<u8>),
}

impl DropPayload {
    /// Classify dropped text.
    ///
    /// Absolute URLs become backgrounds. Image-search result links carry the
    /// actual image in an `imgurl` query parameter, which is preferred when
    /// present. Everything else is a sticker.
    pub fn from_text(text: &str) -> Self {
        match parse_background(text.trim()) {
            Some(url) => DropPayload::Background(image_url(&url).unwrap_or(url)),
            None => DropPayload::Sticker(text.to_string()),
        }
    }
}

fn parse_background(text: &str) -> Option<Url> {
    let url = Url::parse(text).ok()?;
    BACKGROUND_SCHEMES.contains(&url.scheme()).then_some(url)
}

fn image_url(url: &Url) -> Option<Url> {
    url.query_pairs()
        .find(|(key, _)| key == "imgurl")
        .and_then(|(_, value)| parse_background(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_is_sticker() {
        assert_eq!(
            DropPayload::from_text("🐖"),
            DropPayload::Sticker("🐖".to_string())
        );
    }

    #[test]
    fn test_url_is_background() {
        let payload = DropPayload::from_text(" https://example.com/cat.png\n");
        assert_eq!(
            payload,
            DropPayload::Background(Url::parse("https://example.com/cat.png").unwrap())
        );
    }

    #[test]
    fn test_imgurl_is_unwrapped() {
        let payload = DropPayload::from_text(
            "https://images.example.com/imgres?imgurl=https%3A%2F%2Fcdn.example.org%2Fdog.jpg&w=10",
        );
        assert_eq!(
            payload,
            DropPayload::Background(Url::parse("https://cdn.example.org/dog.jpg").unwrap())
        );
    }

    #[test]
    fn test_unknown_scheme_is_sticker() {
        assert_eq!(
            DropPayload::from_text("note:hello"),
            DropPayload::Sticker("note:hello".to_string())
        );
    }
}
