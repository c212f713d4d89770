use std::collections::HashMap;

use serde::Deserialize;
use shredder_core::dictionary::{Dictionary, DictionaryMetadata, Gloss, LoadError};

/// JMdict dictionary entry
#[derive(Debug, Clone)]
pub struct JMdictEntry {
    pub id: String,
    pub kanji: Vec<String>,
    pub kana: Vec<KanaForm>,
    pub meanings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct KanaForm {
    pub text: String,
    /// Kanji spellings this reading belongs to, `*` meaning all of them
    pub applies_to_kanji: Vec<String>,
}

impl JMdictEntry {
    /// First English gloss, cut at the first `;`
    pub fn translation(&self) -> Option<String> {
        self.meanings
            .first()
            .and_then(|m| m.split(';').next())
            .map(|m| m.trim().to_string())
    }

    /// Reading of a kanji spelling, or the spelling itself when no kana applies
    pub fn reading_for_kanji(&self, kanji: &str) -> String {
        self.kana
            .iter()
            .find(|k| k.applies_to_kanji.iter().any(|a| a == kanji || a == "*"))
            .map(|k| k.text.clone())
            .unwrap_or_else(|| kanji.to_string())
    }
}

// JSON structures for parsing jmdict-simplified format
#[derive(Debug, Deserialize)]
struct JMdictJson {
    words: Vec<JMdictJsonEntry>,
}

#[derive(Debug, Deserialize)]
struct JMdictJsonEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    kanji: Vec<KanjiElement>,
    #[serde(default)]
    kana: Vec<KanaElement>,
    #[serde(default)]
    sense: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct KanjiElement {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KanaElement {
    text: Option<String>,
    #[serde(rename = "appliesToKanji", default)]
    applies_to_kanji: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(default)]
    gloss: Vec<JsonGloss>,
}

#[derive(Debug, Deserialize)]
struct JsonGloss {
    lang: Option<String>,
    text: Option<String>,
}

impl From<JMdictJsonEntry> for JMdictEntry {
    fn from(json: JMdictJsonEntry) -> Self {
        let meanings = json
            .sense
            .into_iter()
            .flat_map(|sense| sense.gloss)
            .filter(|gloss| gloss.lang.as_deref() == Some("eng"))
            .filter_map(|gloss| gloss.text.filter(|text| !text.is_empty()))
            .collect();

        Self {
            id: json.id,
            kanji: json.kanji.into_iter().filter_map(|k| k.text).collect(),
            kana: json
                .kana
                .into_iter()
                .filter_map(|k| {
                    Some(KanaForm {
                        text: k.text?,
                        applies_to_kanji: k.applies_to_kanji,
                    })
                })
                .collect(),
            meanings,
        }
    }
}

/// JMdict dictionary keyed by every kana and kanji spelling
#[derive(Debug, Default)]
pub struct JMdict {
    entry_count: usize,
    index: HashMap<String, Vec<Gloss>>,
}

impl JMdict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load JMdict from JSON string (jmdict-simplified format)
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: JMdictJson =
            serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let mut dict = Self::new();
        for json_entry in data.words {
            dict.add_entry(json_entry.into());
        }
        Ok(dict)
    }

    /// Index an entry; kana spellings go in before kanji spellings.
    ///
    /// Entries without an English gloss are skipped instead of being indexed
    /// with the not-found translation, so they never take the primary slot
    /// from an English entry registered later under the same key.
    pub fn add_entry(&mut self, entry: JMdictEntry) {
        let Some(translation) = entry.translation() else {
            tracing::trace!("Skipping JMdict entry {} without English gloss", entry.id);
            return;
        };

        for kana in &entry.kana {
            self.insert(&kana.text, Gloss::new(&translation, &kana.text));
        }
        for kanji in &entry.kanji {
            self.insert(kanji, Gloss::new(&translation, entry.reading_for_kanji(kanji)));
        }
        self.entry_count += 1;
    }

    fn insert(&mut self, key: &str, gloss: Gloss) {
        self.index.entry(key.to_string()).or_default().push(gloss);
    }

    /// Get the number of entries in the dictionary
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Every gloss registered for a key, primary first
    pub fn lookup_all(&self, key: &str) -> &[Gloss] {
        self.index.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Merge another dictionary into this one.
    /// Glosses from `other` are appended, so existing primaries are kept.
    pub fn merge(mut self, other: JMdict) -> Self {
        for (key, glosses) in other.index {
            self.index.entry(key).or_default().extend(glosses);
        }
        self.entry_count += other.entry_count;
        self
    }
}

impl Dictionary for JMdict {
    fn lookup(&self, key: &str) -> Option<&Gloss> {
        self.index.get(key).and_then(|glosses| glosses.first())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "JMdict".to_string(),
            language: "ja".to_string(),
            entry_count: self.entry_count,
        }
    }
}
