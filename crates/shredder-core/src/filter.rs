use shredder_types::Features;

use crate::script::{is_all_punctuation, is_hiragana_named};

/// Parts of speech never worth studying on their own:
/// particle, auxiliary verb, symbol, conjunction, adnominal
pub const EXCLUDED_POS: [&str; 5] = ["助詞", "助動詞", "記号", "接続詞", "連体詞"];

/// Decide whether a tagged token should be dropped before normalization
pub fn is_unwanted(surface: &str, features: &Features<'_>) -> bool {
    if surface.trim().is_empty() {
        return true;
    }

    let mut chars = surface.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        if is_hiragana_named(only) {
            return true;
        }
    }

    if surface.is_ascii() || is_all_punctuation(surface) {
        return true;
    }

    EXCLUDED_POS.contains(&features.part_of_speech())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unwanted(surface: &str, features: &str) -> bool {
        is_unwanted(surface, &Features::parse(features))
    }

    #[test]
    fn rejects_blank_and_ascii() {
        assert!(unwanted("", "名詞"));
        assert!(unwanted("  ", "名詞"));
        assert!(unwanted("OK", "名詞"));
        assert!(unwanted("123", "名詞"));
    }

    #[test]
    fn rejects_single_hiragana_only() {
        assert!(unwanted("ね", "名詞"));
        assert!(!unwanted("ねこ", "名詞,一般,*,*,*,*,ねこ"));
        assert!(!unwanted("ネ", "名詞"));
        assert!(!unwanted("猫", "名詞"));
    }

    #[test]
    fn rejects_punctuation() {
        assert!(unwanted("。", "名詞"));
        assert!(unwanted("…", "名詞"));
        assert!(unwanted("！？", "名詞"));
    }

    #[test]
    fn rejects_excluded_parts_of_speech() {
        assert!(unwanted("から", "助詞,格助詞,一般,*,*,*,から"));
        assert!(unwanted("でした", "助動詞,*,*,*,特殊・デス,連用形,です"));
        assert!(unwanted("しかし", "接続詞,*,*,*,*,*,しかし"));
        assert!(unwanted("この", "連体詞,*,*,*,*,*,この"));
        assert!(!unwanted("食べ", "動詞,自立,*,*,一段,連用形,食べる"));
    }

    #[test]
    fn mixed_ascii_and_kana_is_kept() {
        assert!(!unwanted("Tシャツ", "名詞,一般,*,*,*,*,Tシャツ"));
    }
}
