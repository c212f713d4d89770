use serde::{Deserialize, Serialize};

use crate::Lookup;

fn default_url() -> String {
    "http://localhost:8765".to_string()
}

fn default_deck() -> String {
    "generated_anki_deck".to_string()
}

fn default_model() -> String {
    "Custom Flashcard Model".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// Push flashcards to Anki after writing reports
    pub enabled: bool,
    /// AnkiConnect URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Target deck name
    #[serde(default = "default_deck")]
    pub deck: String,
    /// Note model created on first export
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: default_url(),
            deck: default_deck(),
            model: default_model(),
        }
    }
}

impl AnkiConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let defaults = Self::default();
        Self {
            url: lookup("ANKI_CONNECT_URL").unwrap_or(defaults.url),
            deck: lookup("ANKI_DECK").unwrap_or(defaults.deck),
            ..defaults
        }
    }
}
