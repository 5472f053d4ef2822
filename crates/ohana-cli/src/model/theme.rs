use std::time::Duration;

use ohana_engine::QuoteBank;
use serde::{Deserialize, Serialize};

/// Cosmetic settings of the cabinet, loaded from a JSON file.
///
/// Every field is optional in the file; missing ones take the built-in value.
///
/// ```json
/// {
///   "title": "Ohana Tetris",
///   "tagline": "Fill lines to unlock a quote",
///   "quotes": ["Aloha!"],
///   "toast_millis": 1200
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub title: String,
    pub tagline: String,
    pub quotes: Vec<String>,
    /// How long a notification stays on screen.
    pub toast_millis: u64,
}

const DEFAULT_QUOTES: &[&str] = &[
    "Ohana means family. Family means nobody gets left behind or forgotten.",
    "I like you. You be my friend?",
    "Aloha!",
    "This is my family. It's little, and broken, but still good. Yeah, still good.",
    "Blue punch buggy! No punch back!",
    "You can be happy with me.",
    "Stitch understands. Stitch is good.",
    "Family is your superpower.",
    "We're a good team, you and me.",
    "If you want to leave, you can. I'll remember you though. I remember everyone that leaves.",
];

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: "Ohana Tetris".to_owned(),
            tagline: "Fill lines to unlock a quote".to_owned(),
            quotes: DEFAULT_QUOTES.iter().map(|&q| q.to_owned()).collect(),
            toast_millis: 1200,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_millis)
    }

    #[must_use]
    pub fn quote_bank(&self) -> QuoteBank {
        QuoteBank::new(self.quotes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let theme: Theme = serde_json::from_str(r#"{ "title": "Stitch Mode" }"#).unwrap();
        assert_eq!(theme.title, "Stitch Mode");
        assert_eq!(theme.tagline, Theme::default().tagline);
        assert_eq!(theme.quotes.len(), DEFAULT_QUOTES.len());
        assert_eq!(theme.toast_duration(), Duration::from_millis(1200));
    }

    #[test]
    fn test_empty_quote_list_is_kept() {
        let theme: Theme =
            serde_json::from_str(r#"{ "quotes": [], "toast_millis": 500 }"#).unwrap();
        assert!(theme.quote_bank().is_empty());
        assert_eq!(theme.toast_duration(), Duration::from_millis(500));
    }
}
