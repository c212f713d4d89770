use shredder_types::Features;

use crate::script::contains_kanji;

pub const VERB: &str = "動詞";
pub const ADJECTIVE: &str = "形容詞";

/// Lookup key chosen for a token plus the tagger's own guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub base: String,
    /// Tagger dictionary form, kept as an ambiguity hint for kana surfaces
    pub potential_base: String,
}

/// Policy turning a surface and its tags into a canonical base form
pub trait NormalizationStrategy: Send + Sync {
    fn normalize(&self, surface: &str, features: &Features<'_>) -> Normalized;
}

/// Trusts kanji-bearing surfaces and leaves pure kana surfaces untouched.
///
/// A kanji surface is its own base, except that verbs take the tagger's
/// dictionary form when that form has kanji, and adjectives take it whenever
/// one is reported. Kana surfaces keep `base == surface`; whether they should
/// merge with something else is left to ambiguity detection.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeferredKanaNormalizer;

impl NormalizationStrategy for DeferredKanaNormalizer {
    fn normalize(&self, surface: &str, features: &Features<'_>) -> Normalized {
        let dictionary_form = features.dictionary_form();
        let candidate = dictionary_form.unwrap_or(surface);

        let base = if !contains_kanji(surface) {
            surface
        } else {
            match (features.part_of_speech(), dictionary_form) {
                (VERB, Some(form)) if contains_kanji(form) => form,
                (ADJECTIVE, Some(form)) => form,
                _ => surface,
            }
        };

        Normalized {
            base: base.to_string(),
            potential_base: candidate.to_string(),
        }
    }
}
