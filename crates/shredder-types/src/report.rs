use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStats {
    /// Tokens that passed the filter, translated or not
    pub kept_initial: usize,
    pub duplicates_dropped: usize,
    pub final_kept: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRow {
    pub surface: String,
    pub reading: String,
    pub translation: String,
    pub sentence: String,
}

/// Deduplicated vocabulary of a single source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceListing {
    pub source_id: String,
    pub stats: SourceStats,
    pub rows: Vec<ListingRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub base: String,
    pub reading: String,
    pub translation: String,
    pub frequency: usize,
    pub sample_sentence: String,
}

/// Token that could not be translated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapRow {
    pub surface: String,
    pub reading: String,
    pub translation: String,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapSection {
    pub source_id: String,
    pub rows: Vec<ScrapRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguousOccurrence {
    pub potential_base: String,
    pub reading: String,
    pub translation: String,
    pub sentence: String,
}

/// Every occurrence of a kana surface whose base could not be settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguousGroup {
    pub surface: String,
    pub occurrences: Vec<AmbiguousOccurrence>,
}

/// Study card data handed to a deck builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlashcardEntry {
    pub word: String,
    pub reading: String,
    pub translation: String,
    pub sentences: Vec<String>,
    pub frequency: usize,
}
