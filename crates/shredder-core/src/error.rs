use crate::language::{SourceError, TaggerError};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Tagger(#[from] TaggerError),
}
