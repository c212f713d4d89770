use shredder_types::{FlashcardEntry, WordEntry};

use crate::frequency::FrequencyTable;

/// Minimum corpus count for a word to become a card
pub const DEFAULT_THRESHOLD: usize = 5;
/// Example sentences carried by one card
pub const DEFAULT_MAX_SENTENCES: usize = 5;

/// Pool example sentences across variants, in order, without repeats
pub fn collect_sentences(entry: &WordEntry, max_sentences: usize) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    if max_sentences == 0 {
        return sentences;
    }

    'variants: for variant in entry.variants.values() {
        for sentence in &variant.example_sentences {
            if !sentences.contains(sentence) {
                sentences.push(sentence.clone());
            }
            if sentences.len() >= max_sentences {
                break 'variants;
            }
        }
    }

    sentences
}

/// Cards for every word whose frequency reaches `threshold`, in entry order
pub fn select<'a>(
    entries: impl IntoIterator<Item = &'a WordEntry>,
    frequency: &FrequencyTable,
    threshold: usize,
    max_sentences: usize,
) -> Vec<FlashcardEntry> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let count = frequency.count(&entry.base_word);
            (count >= threshold).then(|| FlashcardEntry {
                word: entry.base_word.clone(),
                reading: entry.reading.clone(),
                translation: entry.meaning.clone(),
                sentences: collect_sentences(entry, max_sentences),
                frequency: count,
            })
        })
        .collect()
}
