use serde::{Deserialize, Serialize};

/// Translation reported when a key is absent from the dictionary
pub const NOT_FOUND_TRANSLATION: &str = "??? (Not found)";
/// Reading reported when a key is absent from the dictionary
pub const NOT_FOUND_READING: &str = "N/A";

/// Tagger value meaning "no data" for a feature field
pub const PLACEHOLDER: &str = "*";
pub const POS_FIELD: usize = 0;
pub const DICTIONARY_FORM_FIELD: usize = 6;

/// One line of dialogue together with the file it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    pub sentence: String,
    pub source_id: String,
}

impl SourceLine {
    pub fn new(sentence: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
            source_id: source_id.into(),
        }
    }
}

/// Raw morpheme as emitted by the tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub surface: String,
    /// Comma separated grammatical tags, fixed order
    pub features: String,
}

impl TaggedToken {
    pub fn new(surface: impl Into<String>, features: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            features: features.into(),
        }
    }

    pub fn features(&self) -> Features<'_> {
        Features::parse(&self.features)
    }
}

/// Borrowed view over a feature string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features<'a> {
    raw: &'a str,
}

impl<'a> Features<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.raw.split(',').nth(index)
    }

    /// Top level part of speech (e.g. 名詞, 動詞)
    pub fn part_of_speech(&self) -> &'a str {
        self.field(POS_FIELD).unwrap_or_default()
    }

    /// Dictionary form reported by the tagger, `None` when missing or a placeholder
    pub fn dictionary_form(&self) -> Option<&'a str> {
        self.field(DICTIONARY_FORM_FIELD)
            .filter(|form| !form.is_empty() && *form != PLACEHOLDER)
    }
}

/// A tagged occurrence after normalization and dictionary resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub base: String,
    pub surface: String,
    pub base_reading: String,
    pub translation: String,
    pub surface_reading: String,
    pub sentence: String,
    pub potential_base: String,
    pub source_id: String,
}

impl Token {
    pub fn is_translated(&self) -> bool {
        self.translation != NOT_FOUND_TRANSLATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_form_skips_placeholder() {
        let verb = Features::parse("動詞,自立,*,*,一段,連用形,食べる,タベ,タベ");
        assert_eq!(verb.part_of_speech(), "動詞");
        assert_eq!(verb.dictionary_form(), Some("食べる"));

        let unknown = Features::parse("名詞,一般,*,*,*,*,*");
        assert_eq!(unknown.dictionary_form(), None);
    }

    #[test]
    fn short_feature_string_has_no_dictionary_form() {
        let features = Features::parse("名詞,固有名詞");
        assert_eq!(features.dictionary_form(), None);
        assert_eq!(features.field(1), Some("固有名詞"));
        assert_eq!(Features::parse("").part_of_speech(), "");
    }
}
