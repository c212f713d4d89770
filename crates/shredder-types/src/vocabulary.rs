use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One surface spelling of a base word with its example sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceVariant {
    pub surface_word: String,
    pub reading: String,
    pub surface_word_meaning: String,
    #[serde(rename = "surface_sentences")]
    pub example_sentences: Vec<String>,
}

/// All variants observed for one base form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub base_word: String,
    pub reading: String,
    pub meaning: String,
    /// Keyed by surface, serialized as a list in insertion order
    #[serde(with = "variant_list")]
    pub variants: IndexMap<String, SurfaceVariant>,
}

impl WordEntry {
    pub fn new(
        base_word: impl Into<String>,
        reading: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            base_word: base_word.into(),
            reading: reading.into(),
            meaning: meaning.into(),
            variants: IndexMap::new(),
        }
    }
}

/// Nested vocabulary as written to `output_data.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyDocument {
    pub words: Vec<WordEntry>,
}

impl VocabularyDocument {
    pub fn find(&self, base_word: &str) -> Option<&WordEntry> {
        self.words.iter().find(|w| w.base_word == base_word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

mod variant_list {
    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::SurfaceVariant;

    pub fn serialize<S>(
        variants: &IndexMap<String, SurfaceVariant>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(variants.values())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<IndexMap<String, SurfaceVariant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<SurfaceVariant>::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|variant| (variant.surface_word.clone(), variant))
            .collect())
    }
}
