use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::dictionary::DictionaryConfig;
use self::input::InputConfig;
use self::tagger::TaggerConfig;

pub mod anki;
pub mod dictionary;
pub mod input;
pub mod tagger;

type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_flashcard_threshold() -> usize {
    5
}

fn default_max_examples() -> usize {
    5
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub dictionary: DictionaryConfig,
    pub tagger: TaggerConfig,
    pub anki: AnkiConfig,

    /// Report directory, created when missing
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Minimum corpus frequency for a flashcard
    #[serde(default = "default_flashcard_threshold")]
    pub flashcard_threshold: usize,
    /// Sentence cap per surface variant and per flashcard
    #[serde(default = "default_max_examples")]
    pub max_examples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            dictionary: DictionaryConfig::default(),
            tagger: TaggerConfig::default(),
            anki: AnkiConfig::default(),
            output_dir: default_output_dir(),
            flashcard_threshold: default_flashcard_threshold(),
            max_examples: default_max_examples(),
        }
    }
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Load a (possibly partial) JSON config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let output_dir = lookup("SHREDDER_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_output_dir);

        let flashcard_threshold = lookup("SHREDDER_FLASHCARD_THRESHOLD")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_flashcard_threshold);

        let max_examples = lookup("SHREDDER_MAX_EXAMPLES")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_examples);

        Config {
            input: InputConfig::from_lookup(lookup),
            dictionary: DictionaryConfig::from_lookup(lookup),
            tagger: TaggerConfig::from_lookup(lookup),
            anki: AnkiConfig::from_lookup(lookup),

            output_dir,
            flashcard_threshold,
            max_examples,
        }
    }
}
