use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Lookup;

fn default_path() -> PathBuf {
    PathBuf::from("dictionary.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// jmdict-simplified JSON file
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Merged after the primary, in order
    #[serde(default)]
    pub additional_paths: Vec<PathBuf>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            additional_paths: vec![],
        }
    }
}

impl DictionaryConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let path = lookup("SHREDDER_DICTIONARY")
            .map(PathBuf::from)
            .unwrap_or_else(default_path);

        let additional_paths = lookup("SHREDDER_DICTIONARY_EXTRA")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            path,
            additional_paths,
        }
    }
}
