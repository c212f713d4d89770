use std::path::{Path, PathBuf};

use shredder_core::dictionary::LoadError;

use crate::dictionary::JMdict;

pub struct JMdictLoader;

impl JMdictLoader {
    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<JMdict, LoadError> {
        if !path.is_file() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading JMdict from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = JMdict::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Load the primary dictionary and merge additional ones in order.
    /// Anything that fails to load is logged and left out.
    pub fn load_with_additional(primary: &Path, additional_paths: &[PathBuf]) -> JMdict {
        let mut dict = Self::load_from_file(primary).unwrap_or_else(|e| {
            match e {
                LoadError::FileNotFound(_) => tracing::warn!("Dictionary unavailable: {}", e),
                _ => tracing::error!("Failed to load dictionary: {}", e),
            }
            tracing::warn!("Starting with empty dictionary, every lookup will miss");
            JMdict::new()
        });

        for path in additional_paths {
            match Self::load_from_file(path) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path.display());
                    dict = Self::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path.display(), e);
                }
            }
        }

        dict
    }

    /// Merge two dictionaries (earlier glosses stay primary)
    pub fn merge(base: JMdict, additional: JMdict) -> JMdict {
        base.merge(additional)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use shredder_core::Dictionary;

    use super::*;

    fn write_dict(dir: &Path, name: &str, kana: &str, gloss: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "words": [ {{ "id": "1", "kana": [{{ "text": "{kana}" }}],
                "sense": [{{ "gloss": [{{ "lang": "eng", "text": "{gloss}" }}] }}] }} ] }}"#
        )
        .unwrap();
        path
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = JMdictLoader::load_from_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn missing_primary_degrades_to_extras_only() {
        let dir = tempfile::tempdir().unwrap();
        let extra = write_dict(dir.path(), "extra.json", "ねこ", "cat");

        let dict = JMdictLoader::load_with_additional(&dir.path().join("missing.json"), &[extra]);
        assert_eq!(dict.entry_count(), 1);
        assert_eq!(dict.lookup("ねこ").unwrap().translation, "cat");
    }

    #[test]
    fn extras_merge_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let primary = write_dict(dir.path(), "main.json", "いぬ", "dog");
        let first = write_dict(dir.path(), "a.json", "ねこ", "cat");
        let second = write_dict(dir.path(), "b.json", "ねこ", "kitty");

        let dict = JMdictLoader::load_with_additional(&primary, &[first, second]);
        assert_eq!(dict.entry_count(), 3);
        assert_eq!(dict.lookup("ねこ").unwrap().translation, "cat");
        assert_eq!(dict.lookup("いぬ").unwrap().translation, "dog");
    }

    #[test]
    fn broken_json_gives_empty_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ words: ").unwrap();

        let dict = JMdictLoader::load_with_additional(&path, &[]);
        assert_eq!(dict.entry_count(), 0);
    }
}
