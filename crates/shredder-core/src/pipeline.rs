use std::collections::BTreeMap;

use indexmap::IndexMap;
use shredder_types::{
    AmbiguousGroup, FlashcardEntry, FrequencyRow, ListingRow, ScrapRow, ScrapSection, SourceLine,
    SourceListing, SourceStats, Token, VocabularyDocument,
};

use crate::aggregate::{self, DEFAULT_MAX_EXAMPLES};
use crate::ambiguity;
use crate::dedupe::{self, Deduplicated};
use crate::dictionary::{Dictionary, resolve_token};
use crate::error::PipelineError;
use crate::filter::is_unwanted;
use crate::flashcard::{self, DEFAULT_THRESHOLD};
use crate::frequency::FrequencyTable;
use crate::language::{LineSource, Tagger, TaggerError};
use crate::normalize::{DeferredKanaNormalizer, NormalizationStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Cap on example sentences per variant and per flashcard
    pub max_examples: usize,
    pub flashcard_threshold: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_examples: DEFAULT_MAX_EXAMPLES,
            flashcard_threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Every token produced by a run, split by whether it could be translated
#[derive(Debug, Default)]
pub struct TokenCollection {
    /// Translated tokens in encounter order, duplicates included
    pub tokens: Vec<Token>,
    pub scrap: BTreeMap<String, Vec<ScrapRow>>,
    /// Tokens that survived the filter, per source
    pub totals_by_source: BTreeMap<String, usize>,
}

impl TokenCollection {
    pub fn push(&mut self, token: Token) {
        *self
            .totals_by_source
            .entry(token.source_id.clone())
            .or_insert(0) += 1;

        if token.is_translated() {
            self.tokens.push(token);
        } else if token.surface.chars().count() > 1 {
            self.scrap
                .entry(token.source_id.clone())
                .or_default()
                .push(ScrapRow {
                    surface: token.surface,
                    reading: token.surface_reading,
                    translation: token.translation,
                    sentence: token.sentence,
                });
        }
    }

    pub fn scrap_count(&self) -> usize {
        self.scrap.values().map(Vec::len).sum()
    }
}

/// Everything the report writers need
#[derive(Debug, Default)]
pub struct PipelineOutput {
    pub listing: Vec<SourceListing>,
    pub frequency: Vec<FrequencyRow>,
    pub scrap: Vec<ScrapSection>,
    pub vocabulary: VocabularyDocument,
    pub ambiguous_vocabulary: VocabularyDocument,
    pub ambiguous_review: Vec<AmbiguousGroup>,
    pub flashcards: Vec<FlashcardEntry>,
}

pub struct Pipeline<'d> {
    dictionary: &'d dyn Dictionary,
    normalizer: Box<dyn NormalizationStrategy>,
    settings: PipelineSettings,
}

impl<'d> Pipeline<'d> {
    pub fn new(dictionary: &'d dyn Dictionary) -> Self {
        Self {
            dictionary,
            normalizer: Box::new(DeferredKanaNormalizer),
            settings: PipelineSettings::default(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: impl NormalizationStrategy + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    pub fn with_settings(mut self, settings: PipelineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> PipelineSettings {
        self.settings
    }

    /// Tokenize, filter, normalize and resolve one line
    pub fn process_line(
        &self,
        tagger: &mut dyn Tagger,
        line: &SourceLine,
    ) -> Result<Vec<Token>, TaggerError> {
        let tagged = tagger.tokenize(&line.sentence)?;

        let tokens = tagged
            .iter()
            .filter(|t| !is_unwanted(&t.surface, &t.features()))
            .map(|t| {
                let normalized = self.normalizer.normalize(&t.surface, &t.features());
                let resolution = resolve_token(self.dictionary, &normalized.base, &t.surface);
                Token {
                    base: normalized.base,
                    surface: t.surface.clone(),
                    base_reading: resolution.base_reading,
                    translation: resolution.translation,
                    surface_reading: resolution.surface_reading,
                    sentence: line.sentence.clone(),
                    potential_base: normalized.potential_base,
                    source_id: line.source_id.clone(),
                }
            })
            .collect();

        Ok(tokens)
    }

    pub fn collect(
        &self,
        tagger: &mut dyn Tagger,
        lines: &[SourceLine],
    ) -> Result<TokenCollection, TaggerError> {
        let mut collection = TokenCollection::default();
        for line in lines {
            for token in self.process_line(tagger, line)? {
                collection.push(token);
            }
        }

        tracing::debug!(
            "Collected {} translated tokens, {} scrap",
            collection.tokens.len(),
            collection.scrap_count()
        );
        Ok(collection)
    }

    /// Partition, deduplicate, aggregate and select flashcards
    pub fn analyze(&self, collection: &TokenCollection) -> PipelineOutput {
        let ambiguity = ambiguity::detect(&collection.tokens);
        let non_ambiguous = ambiguity.non_ambiguous_tokens(&collection.tokens);
        let ambiguous = ambiguity.ambiguous_tokens();
        tracing::info!(
            "{} ambiguous kana surfaces set aside ({} tokens)",
            ambiguity.ambiguous_count(),
            ambiguous.len()
        );

        let deduplicated = dedupe::dedupe(&collection.tokens);
        let listing = build_listing(collection, &deduplicated);

        let frequency = FrequencyTable::from_tokens(non_ambiguous.iter().copied());
        let frequency_rows = build_frequency_rows(&frequency, &non_ambiguous);

        let max_examples = self.settings.max_examples;
        let vocabulary = aggregate::aggregate(non_ambiguous.iter().copied(), max_examples);
        let ambiguous_vocabulary = aggregate::aggregate(ambiguous.iter().copied(), max_examples);

        let flashcards = flashcard::select(
            &vocabulary.words,
            &frequency,
            self.settings.flashcard_threshold,
            max_examples,
        );

        PipelineOutput {
            listing,
            frequency: frequency_rows,
            scrap: build_scrap(collection),
            vocabulary,
            ambiguous_vocabulary,
            ambiguous_review: ambiguity.review_groups(),
            flashcards,
        }
    }

    pub fn run(
        &self,
        tagger: &mut dyn Tagger,
        source: &dyn LineSource,
    ) -> Result<PipelineOutput, PipelineError> {
        let lines = source.lines()?;
        tracing::info!("Processing {} lines from {}", lines.len(), source.describe());
        self.run_lines(tagger, &lines)
    }

    /// Same as `run` for lines that were already read
    pub fn run_lines(
        &self,
        tagger: &mut dyn Tagger,
        lines: &[SourceLine],
    ) -> Result<PipelineOutput, PipelineError> {
        let collection = self.collect(tagger, lines)?;
        let output = self.analyze(&collection);
        tracing::info!(
            "{} tokens kept, {} scrap, {} base words, {} flashcards",
            collection.tokens.len(),
            collection.scrap_count(),
            output.vocabulary.words.len(),
            output.flashcards.len()
        );
        Ok(output)
    }
}

fn build_listing(collection: &TokenCollection, deduplicated: &Deduplicated<'_>) -> Vec<SourceListing> {
    collection
        .totals_by_source
        .iter()
        .map(|(source_id, &kept_initial)| {
            let mut rows: Vec<ListingRow> = deduplicated
                .kept_in(source_id)
                .map(|t| ListingRow {
                    surface: t.surface.clone(),
                    reading: t.surface_reading.clone(),
                    translation: t.translation.clone(),
                    sentence: t.sentence.clone(),
                })
                .collect();
            rows.sort_by(|a, b| a.surface.cmp(&b.surface));

            SourceListing {
                source_id: source_id.clone(),
                stats: SourceStats {
                    kept_initial,
                    duplicates_dropped: deduplicated.dropped(source_id),
                    final_kept: rows.len(),
                },
                rows,
            }
        })
        .collect()
}

/// One row per base, sample taken from its first non-ambiguous occurrence
fn build_frequency_rows(frequency: &FrequencyTable, tokens: &[&Token]) -> Vec<FrequencyRow> {
    let mut samples: IndexMap<&str, &Token> = IndexMap::new();
    for &token in tokens {
        samples.entry(token.base.as_str()).or_insert(token);
    }

    frequency
        .ranked()
        .into_iter()
        .filter_map(|(base, count)| {
            let sample = samples.get(base)?;
            Some(FrequencyRow {
                base: base.to_string(),
                reading: sample.surface_reading.clone(),
                translation: sample.translation.clone(),
                frequency: count,
                sample_sentence: sample.sentence.clone(),
            })
        })
        .collect()
}

fn build_scrap(collection: &TokenCollection) -> Vec<ScrapSection> {
    collection
        .scrap
        .iter()
        .map(|(source_id, rows)| {
            let mut rows = rows.clone();
            rows.sort_by(|a, b| a.sentence.cmp(&b.sentence));
            ScrapSection {
                source_id: source_id.clone(),
                rows,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::SourceError;
    use crate::test_utils::{ScriptedTagger, dictionary};
    use shredder_types::NOT_FOUND_TRANSLATION;

    const NOUN_CAT: &str = "名詞,一般,*,*,*,*,猫";
    const PARTICLE: &str = "助詞,係助詞,*,*,*,*,は";
    const PUNCT: &str = "記号,句点,*,*,*,*,。";

    struct Lines(Vec<SourceLine>);

    impl LineSource for Lines {
        fn describe(&self) -> String {
            "test lines".to_string()
        }

        fn lines(&self) -> Result<Vec<SourceLine>, SourceError> {
            Ok(self.0.clone())
        }
    }

    fn sample_dictionary() -> std::collections::HashMap<String, crate::Gloss> {
        dictionary(&[
            ("猫", "cat", "ねこ"),
            ("食べる", "to eat", "たべる"),
            ("食べます", "to eat", "たべます"),
            ("かえる", "to return", "かえる"),
            ("ねこ", "cat", "ねこ"),
        ])
    }

    fn sample_tagger() -> ScriptedTagger {
        ScriptedTagger::default()
            .with("猫は猫。", &[("猫", NOUN_CAT), ("は", PARTICLE), ("猫", NOUN_CAT), ("。", PUNCT)])
            .with("ご飯を食べます", &[
                ("ご飯", "名詞,一般,*,*,*,*,御飯"),
                ("を", "助詞,格助詞,一般,*,*,*,を"),
                ("食べ", "動詞,自立,*,*,一段,連用形,食べる"),
                ("ます", "助動詞,*,*,*,特殊・マス,基本形,ます"),
            ])
            .with("家にかえる", &[("家", "名詞,一般,*,*,*,*,家"), ("かえる", "動詞,自立,*,*,五段,基本形,帰る")])
            .with("かえるだ", &[("かえる", "名詞,一般,*,*,*,*,蛙")])
            .with("ねこだ", &[("ねこ", "名詞,一般,*,*,*,*,猫")])
    }

    #[test]
    fn process_line_filters_and_enriches() {
        let dict = sample_dictionary();
        let pipeline = Pipeline::new(&dict);
        let mut tagger = sample_tagger();

        let tokens = pipeline
            .process_line(&mut tagger, &SourceLine::new("ご飯を食べます", "ep01.ass"))
            .unwrap();

        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, ["ご飯", "食べ"]);

        let verb = &tokens[1];
        assert_eq!(verb.base, "食べる");
        assert_eq!(verb.translation, "to eat");
        assert_eq!(verb.surface_reading, "たべる");
        assert_eq!(verb.source_id, "ep01.ass");

        // ご飯 is missing from the dictionary
        assert_eq!(tokens[0].translation, NOT_FOUND_TRANSLATION);
    }

    #[test]
    fn untranslated_tokens_go_to_scrap_and_still_count() {
        let dict = sample_dictionary();
        let pipeline = Pipeline::new(&dict);
        let mut tagger = sample_tagger();
        let lines = vec![SourceLine::new("ご飯を食べます", "ep01.ass")];

        let collection = pipeline.collect(&mut tagger, &lines).unwrap();
        assert_eq!(collection.tokens.len(), 1);
        assert_eq!(collection.totals_by_source["ep01.ass"], 2);
        assert_eq!(collection.scrap["ep01.ass"][0].surface, "ご飯");

        let output = pipeline.analyze(&collection);
        assert!(output.vocabulary.find("ご飯").is_none());
        assert_eq!(output.scrap[0].rows.len(), 1);
    }

    #[test]
    fn run_tags_each_line_once() {
        let dict = sample_dictionary();
        let pipeline = Pipeline::new(&dict);
        let mut tagger = sample_tagger();
        let lines = vec![
            SourceLine::new("猫は猫。", "ep01.ass"),
            SourceLine::new("ご飯を食べます", "ep01.ass"),
            SourceLine::new("unknown line", "ep02.ass"),
        ];

        let from_lines = pipeline.run_lines(&mut tagger, &lines).unwrap();
        assert_eq!(tagger.calls, 3);

        let mut fresh = sample_tagger();
        let from_source = pipeline.run(&mut fresh, &Lines(lines)).unwrap();
        assert_eq!(fresh.calls, 3);
        assert_eq!(from_lines.listing, from_source.listing);
        assert_eq!(from_lines.vocabulary, from_source.vocabulary);
    }

    #[test]
    fn single_character_misses_are_not_scrapped() {
        let dict = dictionary(&[]);
        let pipeline = Pipeline::new(&dict);
        let mut tagger = ScriptedTagger::default().with("犬", &[("犬", "名詞,一般,*,*,*,*,犬")]);

        let collection = pipeline
            .collect(&mut tagger, &[SourceLine::new("犬", "a.txt")])
            .unwrap();
        assert!(collection.scrap.is_empty());
        assert_eq!(collection.totals_by_source["a.txt"], 1);
    }

    #[test]
    fn ambiguous_surfaces_are_kept_out_of_the_main_vocabulary() {
        let dict = sample_dictionary();
        let pipeline = Pipeline::new(&dict);
        let mut tagger = sample_tagger();
        let source = Lines(vec![
            SourceLine::new("家にかえる", "ep01.ass"),
            SourceLine::new("かえるだ", "ep02.ass"),
            SourceLine::new("ねこだ", "ep02.ass"),
        ]);

        let output = pipeline.run(&mut tagger, &source).unwrap();

        assert!(output.vocabulary.find("かえる").is_none());
        assert!(output.vocabulary.find("ねこ").is_some());
        let ambiguous = output.ambiguous_vocabulary.find("かえる").unwrap();
        assert_eq!(ambiguous.variants["かえる"].example_sentences, ["家にかえる", "かえるだ"]);

        assert_eq!(output.ambiguous_review.len(), 1);
        let bases: Vec<&str> = output.ambiguous_review[0]
            .occurrences
            .iter()
            .map(|o| o.potential_base.as_str())
            .collect();
        assert_eq!(bases, ["帰る", "蛙"]);
        assert!(output.frequency.iter().all(|row| row.base != "かえる"));
    }

    #[test]
    fn listing_dedupes_and_frequency_keeps_duplicates() {
        let dict = sample_dictionary();
        let pipeline = Pipeline::new(&dict);
        let mut tagger = sample_tagger();
        let lines: Vec<SourceLine> = (0..3)
            .map(|_| SourceLine::new("猫は猫。", "ep01.ass"))
            .collect();

        let collection = pipeline.collect(&mut tagger, &lines).unwrap();
        let output = pipeline.analyze(&collection);

        let listing = &output.listing[0];
        assert_eq!(listing.stats.kept_initial, 6);
        assert_eq!(listing.stats.duplicates_dropped, 5);
        assert_eq!(listing.stats.final_kept, 1);

        assert_eq!(output.frequency[0].base, "猫");
        assert_eq!(output.frequency[0].frequency, 6);
        assert_eq!(output.flashcards.len(), 1);
        assert_eq!(output.flashcards[0].sentences, ["猫は猫。"]);
    }

    #[test]
    fn threshold_is_configurable() {
        let dict = sample_dictionary();
        let pipeline = Pipeline::new(&dict).with_settings(PipelineSettings {
            max_examples: 5,
            flashcard_threshold: 7,
        });
        let mut tagger = sample_tagger();
        let lines: Vec<SourceLine> = (0..3)
            .map(|_| SourceLine::new("猫は猫。", "ep01.ass"))
            .collect();

        let output = pipeline.run(&mut tagger, &Lines(lines)).unwrap();
        assert!(output.flashcards.is_empty());
        assert_eq!(output.frequency[0].frequency, 6);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let dict = sample_dictionary();
        let pipeline = Pipeline::new(&dict);
        let lines = Lines(vec![
            SourceLine::new("猫は猫。", "ep02.ass"),
            SourceLine::new("家にかえる", "ep01.ass"),
            SourceLine::new("ご飯を食べます", "ep01.ass"),
            SourceLine::new("かえるだ", "ep02.ass"),
            SourceLine::new("ねこだ", "ep03.ass"),
        ]);

        let first = pipeline.run(&mut sample_tagger(), &lines).unwrap();
        let second = pipeline.run(&mut sample_tagger(), &lines).unwrap();

        assert_eq!(first.listing, second.listing);
        assert_eq!(first.frequency, second.frequency);
        assert_eq!(first.scrap, second.scrap);
        assert_eq!(first.vocabulary, second.vocabulary);
        assert_eq!(first.ambiguous_vocabulary, second.ambiguous_vocabulary);
        assert_eq!(first.ambiguous_review, second.ambiguous_review);
        assert_eq!(first.flashcards, second.flashcards);

        let sources: Vec<&str> = first.listing.iter().map(|l| l.source_id.as_str()).collect();
        assert_eq!(sources, ["ep01.ass", "ep02.ass", "ep03.ass"]);
    }

    struct KeepEverything;

    impl NormalizationStrategy for KeepEverything {
        fn normalize(&self, surface: &str, _features: &shredder_types::Features<'_>) -> crate::Normalized {
            crate::Normalized {
                base: surface.to_string(),
                potential_base: surface.to_string(),
            }
        }
    }

    #[test]
    fn normalizer_can_be_swapped() {
        let dict = sample_dictionary();
        let pipeline = Pipeline::new(&dict).with_normalizer(KeepEverything);
        let mut tagger = sample_tagger();

        let tokens = pipeline
            .process_line(&mut tagger, &SourceLine::new("ご飯を食べます", "ep01.ass"))
            .unwrap();
        assert_eq!(tokens[1].base, "食べ");
        assert_eq!(tokens[1].translation, NOT_FOUND_TRANSLATION);
    }
}
