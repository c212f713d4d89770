use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Lookup;

fn default_dir() -> PathBuf {
    PathBuf::from("scripts")
}

fn default_style() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Scanned when no files are given
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Explicit files, used instead of `dir` when not empty
    pub files: Vec<PathBuf>,
    /// `.ass` dialogue style to keep
    #[serde(default = "default_style")]
    pub style: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            files: vec![],
            style: default_style(),
        }
    }
}

impl InputConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        Self {
            dir: lookup("SHREDDER_INPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_dir),
            files: vec![],
            style: lookup("SHREDDER_ASS_STYLE").unwrap_or_else(default_style),
        }
    }
}
