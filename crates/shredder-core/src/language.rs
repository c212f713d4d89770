use std::path::PathBuf;

use shredder_types::{SourceLine, TaggedToken};

/// Morphological analyzer splitting a sentence into tagged tokens
pub trait Tagger {
    /// Tokens in emission order
    fn tokenize(&mut self, line: &str) -> Result<Vec<TaggedToken>, TaggerError>;
}

/// Ordered supply of dialogue lines
pub trait LineSource {
    /// Human readable description for logs
    fn describe(&self) -> String;

    /// All lines, sources in file name order and lines in file order
    fn lines(&self) -> Result<Vec<SourceLine>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("Failed to start tagger `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Tagger pipe unavailable: {0}")]
    PipeUnavailable(&'static str),

    #[error("Tagger exited before finishing the sentence")]
    UnexpectedEof,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Input not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
