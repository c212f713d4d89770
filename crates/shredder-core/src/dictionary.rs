use std::collections::HashMap;

use shredder_types::{NOT_FOUND_READING, NOT_FOUND_TRANSLATION};

/// Primary translation and kana reading for a lookup key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gloss {
    pub translation: String,
    pub reading: String,
}

impl Gloss {
    pub fn new(translation: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            reading: reading.into(),
        }
    }

    /// Sentinel returned for keys missing from the dictionary
    pub fn not_found() -> Self {
        Self::new(NOT_FOUND_TRANSLATION, NOT_FOUND_READING)
    }

    pub fn is_found(&self) -> bool {
        self.translation != NOT_FOUND_TRANSLATION
    }
}

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Primary gloss for an exact key
    fn lookup(&self, key: &str) -> Option<&Gloss>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;

    /// Like `lookup`, but a miss yields the not-found sentinel
    fn resolve(&self, key: &str) -> Gloss {
        self.lookup(key).cloned().unwrap_or_else(Gloss::not_found)
    }
}

impl Dictionary for HashMap<String, Gloss> {
    fn lookup(&self, key: &str) -> Option<&Gloss> {
        self.get(key)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "in-memory".to_string(),
            language: "ja".to_string(),
            entry_count: self.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

/// Translation and readings settled for one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub translation: String,
    pub base_reading: String,
    pub surface_reading: String,
}

/// Look up the base for meaning and the surface for its own reading.
///
/// The surface reading falls back to the base reading when the surface
/// itself is unknown.
pub fn resolve_token(dictionary: &dyn Dictionary, base: &str, surface: &str) -> Resolution {
    let Gloss {
        translation,
        reading: base_reading,
    } = dictionary.resolve(base);

    let surface_reading = dictionary
        .lookup(surface)
        .map(|gloss| gloss.reading.clone())
        .filter(|reading| reading != NOT_FOUND_READING)
        .unwrap_or_else(|| base_reading.clone());

    Resolution {
        translation,
        base_reading,
        surface_reading,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
