use indexmap::IndexMap;
use shredder_types::Token;

/// Occurrence count per base form
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in tokens {
            *counts.entry(token.base.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, base: &str) -> usize {
        self.counts.get(base).copied().unwrap_or(0)
    }

    /// Most frequent first; equal counts stay in first-seen order
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(base, count)| (base.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Coarse bucket of a corpus count, used as a card tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyTier {
    VeryCommon,
    Common,
    Uncommon,
    Rare,
}

impl FrequencyTier {
    pub fn from_count(count: usize) -> Self {
        match count {
            50.. => FrequencyTier::VeryCommon,
            20.. => FrequencyTier::Common,
            10.. => FrequencyTier::Uncommon,
            _ => FrequencyTier::Rare,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            FrequencyTier::VeryCommon => "very_common",
            FrequencyTier::Common => "common",
            FrequencyTier::Uncommon => "uncommon",
            FrequencyTier::Rare => "rare",
        }
    }
}
