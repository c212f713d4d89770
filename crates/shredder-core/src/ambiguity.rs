use std::collections::HashSet;

use indexmap::IndexMap;
use shredder_types::{AmbiguousGroup, AmbiguousOccurrence, Token};

use crate::script::contains_kanji;

/// Pure kana surfaces grouped across the whole run.
///
/// A surface is ambiguous when its occurrences disagree on the potential
/// base. Ambiguity belongs to the surface, so every occurrence of an
/// ambiguous surface is set aside, including those that agree with the
/// majority.
#[derive(Debug, Default)]
pub struct AmbiguityReport<'a> {
    groups: IndexMap<&'a str, Vec<&'a Token>>,
    ambiguous: HashSet<&'a str>,
}

pub fn detect(tokens: &[Token]) -> AmbiguityReport<'_> {
    let mut groups: IndexMap<&str, Vec<&Token>> = IndexMap::new();
    for token in tokens.iter().filter(|t| !contains_kanji(&t.surface)) {
        groups.entry(token.surface.as_str()).or_default().push(token);
    }

    let ambiguous = groups
        .iter()
        .filter(|(_, members)| {
            let bases: HashSet<&str> = members.iter().map(|t| t.potential_base.as_str()).collect();
            bases.len() > 1
        })
        .map(|(surface, _)| *surface)
        .collect();

    AmbiguityReport { groups, ambiguous }
}

impl<'a> AmbiguityReport<'a> {
    /// Every kana group, ambiguous or not, in first-seen order
    pub fn groups(&self) -> &IndexMap<&'a str, Vec<&'a Token>> {
        &self.groups
    }

    pub fn is_ambiguous(&self, surface: &str) -> bool {
        self.ambiguous.contains(surface)
    }

    pub fn ambiguous_count(&self) -> usize {
        self.ambiguous.len()
    }

    /// Members of ambiguous groups, group by group
    pub fn ambiguous_tokens(&self) -> Vec<&'a Token> {
        self.groups
            .iter()
            .filter(|(surface, _)| self.is_ambiguous(surface))
            .flat_map(|(_, members)| members.iter().copied())
            .collect()
    }

    /// Tokens safe to aggregate, in encounter order
    pub fn non_ambiguous_tokens<'t>(&self, tokens: &'t [Token]) -> Vec<&'t Token> {
        tokens
            .iter()
            .filter(|t| !self.is_ambiguous(&t.surface))
            .collect()
    }

    /// Review listing sorted by surface
    pub fn review_groups(&self) -> Vec<AmbiguousGroup> {
        let mut surfaces: Vec<&str> = self.ambiguous.iter().copied().collect();
        surfaces.sort_unstable();

        surfaces
            .into_iter()
            .map(|surface| AmbiguousGroup {
                surface: surface.to_string(),
                occurrences: self.groups[surface]
                    .iter()
                    .map(|t| AmbiguousOccurrence {
                        potential_base: t.potential_base.clone(),
                        reading: t.surface_reading.clone(),
                        translation: t.translation.clone(),
                        sentence: t.sentence.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}
