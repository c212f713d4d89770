use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Lookup;

fn default_command() -> String {
    "mecab".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// MeCab executable
    #[serde(default = "default_command")]
    pub command: String,
    /// Passed as `-d`
    pub dicdir: Option<PathBuf>,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            dicdir: None,
        }
    }
}

impl TaggerConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        Self {
            command: lookup("MECAB_COMMAND").unwrap_or_else(default_command),
            dicdir: lookup("MECAB_DICDIR").map(PathBuf::from),
        }
    }
}
