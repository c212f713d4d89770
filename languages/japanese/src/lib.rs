pub mod dictionary;
pub mod loader;
pub mod mecab;
pub mod source;
pub mod subtitle;

pub use dictionary::{JMdict, JMdictEntry};
pub use loader::JMdictLoader;
pub use mecab::{MecabTagger, parse_mecab_output};
pub use source::{DirectorySource, FileListSource};
pub use subtitle::SubtitleFormat;
