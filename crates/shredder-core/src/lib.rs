pub mod aggregate;
pub mod ambiguity;
pub mod dedupe;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod flashcard;
pub mod frequency;
pub mod language;
pub mod normalize;
pub mod pipeline;
pub mod script;

#[cfg(test)]
mod test_utils;

pub use dictionary::{Dictionary, DictionaryMetadata, Gloss, LoadError};
pub use error::PipelineError;
pub use language::{LineSource, SourceError, Tagger, TaggerError};
pub use normalize::{DeferredKanaNormalizer, NormalizationStrategy, Normalized};
pub use pipeline::{Pipeline, PipelineOutput, PipelineSettings, TokenCollection};
