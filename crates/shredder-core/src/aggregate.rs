use indexmap::IndexMap;
use shredder_types::{SurfaceVariant, Token, VocabularyDocument, WordEntry};

/// Example sentences kept per surface variant
pub const DEFAULT_MAX_EXAMPLES: usize = 5;

pub const POLITE_SUFFIX: &str = "ます";
pub const POLITE_PAST_SUFFIX: &str = "ました";

/// Describe how a surface variant relates to its base meaning
pub fn annotate_meaning(base: &str, surface: &str, meaning: &str) -> String {
    if surface == base {
        format!("{meaning} (general meaning)")
    } else if surface.ends_with(POLITE_SUFFIX) {
        format!("{meaning} (polite form)")
    } else if surface.ends_with(POLITE_PAST_SUFFIX) {
        format!("{meaning} (past tense)")
    } else {
        meaning.to_string()
    }
}

/// Folds tokens into one `WordEntry` per base form
#[derive(Debug)]
pub struct Aggregator {
    entries: IndexMap<String, WordEntry>,
    max_examples: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EXAMPLES)
    }
}

impl Aggregator {
    pub fn new(max_examples: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            max_examples,
        }
    }

    /// Reading and meaning of an entry come from its first token
    pub fn add(&mut self, token: &Token) {
        if !token.is_translated() {
            return;
        }

        let entry = self
            .entries
            .entry(token.base.clone())
            .or_insert_with(|| WordEntry::new(&token.base, &token.base_reading, &token.translation));

        let variant = entry
            .variants
            .entry(token.surface.clone())
            .or_insert_with(|| SurfaceVariant {
                surface_word: token.surface.clone(),
                reading: token.surface_reading.clone(),
                surface_word_meaning: annotate_meaning(
                    &token.base,
                    &token.surface,
                    &token.translation,
                ),
                example_sentences: Vec::new(),
            });

        let sentences = &mut variant.example_sentences;
        if sentences.len() < self.max_examples && !sentences.contains(&token.sentence) {
            sentences.push(token.sentence.clone());
        }
    }

    pub fn extend<'a>(&mut self, tokens: impl IntoIterator<Item = &'a Token>) {
        for token in tokens {
            self.add(token);
        }
    }

    pub fn entries(&self) -> &IndexMap<String, WordEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_document(self) -> VocabularyDocument {
        VocabularyDocument {
            words: self.entries.into_values().collect(),
        }
    }
}

pub fn aggregate<'a>(
    tokens: impl IntoIterator<Item = &'a Token>,
    max_examples: usize,
) -> VocabularyDocument {
    let mut aggregator = Aggregator::new(max_examples);
    aggregator.extend(tokens);
    aggregator.into_document()
}
