use std::collections::{BTreeMap, HashSet};

use shredder_types::Token;

/// First occurrence of every surface, for the flat per-file listing
#[derive(Debug, Default)]
pub struct Deduplicated<'a> {
    pub kept: Vec<&'a Token>,
    pub dropped_by_source: BTreeMap<&'a str, usize>,
}

impl Deduplicated<'_> {
    pub fn dropped(&self, source_id: &str) -> usize {
        self.dropped_by_source.get(source_id).copied().unwrap_or(0)
    }

    pub fn kept_in(&self, source_id: &str) -> impl Iterator<Item = &Token> {
        self.kept
            .iter()
            .copied()
            .filter(move |t| t.source_id == source_id)
    }
}

/// Keep the first token per surface; later repeats are charged to their own source
pub fn dedupe<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Deduplicated<'a> {
    let mut seen = HashSet::new();
    let mut result = Deduplicated::default();

    for token in tokens {
        if seen.insert(token.surface.as_str()) {
            result.kept.push(token);
        } else {
            *result
                .dropped_by_source
                .entry(token.source_id.as_str())
                .or_insert(0) += 1;
        }
    }

    result
}
