use std::collections::HashMap;

use shredder_types::{TaggedToken, Token};

use crate::dictionary::Gloss;
use crate::language::{Tagger, TaggerError};

pub fn dictionary(entries: &[(&str, &str, &str)]) -> HashMap<String, Gloss> {
    entries
        .iter()
        .map(|(key, translation, reading)| (key.to_string(), Gloss::new(*translation, *reading)))
        .collect()
}

/// Translated token with readings derived from the surface
pub fn token(base: &str, surface: &str, potential_base: &str, sentence: &str, source: &str) -> Token {
    Token {
        base: base.to_string(),
        surface: surface.to_string(),
        base_reading: format!("{base}-reading"),
        translation: format!("{base}-meaning"),
        surface_reading: format!("{surface}-reading"),
        sentence: sentence.to_string(),
        potential_base: potential_base.to_string(),
        source_id: source.to_string(),
    }
}

/// Replays canned analyses keyed by sentence
#[derive(Default)]
pub struct ScriptedTagger {
    analyses: HashMap<String, Vec<TaggedToken>>,
    pub calls: usize,
}

impl ScriptedTagger {
    pub fn with(mut self, sentence: &str, tokens: &[(&str, &str)]) -> Self {
        self.analyses.insert(
            sentence.to_string(),
            tokens
                .iter()
                .map(|(surface, features)| TaggedToken::new(*surface, *features))
                .collect(),
        );
        self
    }
}

impl Tagger for ScriptedTagger {
    fn tokenize(&mut self, line: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        self.calls += 1;
        Ok(self.analyses.get(line).cloned().unwrap_or_default())
    }
}
