pub mod report;
pub mod token;
pub mod vocabulary;

pub use report::{
    AmbiguousGroup, AmbiguousOccurrence, FlashcardEntry, FrequencyRow, ListingRow, ScrapRow,
    ScrapSection, SourceListing, SourceStats,
};
pub use token::{
    DICTIONARY_FORM_FIELD, Features, NOT_FOUND_READING, NOT_FOUND_TRANSLATION, PLACEHOLDER,
    POS_FIELD, SourceLine, TaggedToken, Token,
};
pub use vocabulary::{SurfaceVariant, VocabularyDocument, WordEntry};
