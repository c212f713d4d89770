//! Code point classification for Japanese text.

/// Inclusive `(min, max)` code point range
pub type CodepointRange = (u32, u32);

pub const CJK_IDEOGRAPH_RANGES: [CodepointRange; 4] = [
    (0x4e00, 0x9fff),   // CJK unified ideographs
    (0x3400, 0x4dbf),   // Extension A
    (0xf900, 0xfaff),   // Compatibility ideographs
    (0x20000, 0x2fa1f), // Extensions B-F and compatibility supplement
];

/// Characters whose Unicode name contains "HIRAGANA"
const HIRAGANA_NAMED_RANGES: [CodepointRange; 10] = [
    (0x3041, 0x3096),   // Hiragana letters
    (0x3099, 0x309f),   // Voiced sound marks, iteration marks, digraph yori
    (0x30a0, 0x30a0),   // Katakana-hiragana double hyphen
    (0x30fc, 0x30fc),   // Katakana-hiragana prolonged sound mark
    (0xff70, 0xff70),   // Halfwidth prolonged sound mark
    (0x1b001, 0x1b001), // Archaic ye
    (0x1b11f, 0x1b11f), // Archaic wu
    (0x1b132, 0x1b132), // Small ko
    (0x1b150, 0x1b152), // Small wi/we/wo
    (0x1f200, 0x1f200), // Squared hiragana hoka
];

#[rustfmt::skip]
const PUNCTUATION_RANGES: [CodepointRange; 45] = [
    (0x21, 0x23), (0x25, 0x2a), (0x2c, 0x2f), (0x3a, 0x3b), (0x3f, 0x40),
    (0x5b, 0x5d), (0x5f, 0x5f), (0x7b, 0x7b), (0x7d, 0x7d),
    (0xa1, 0xa1), (0xa7, 0xa7), (0xab, 0xab), (0xb6, 0xb7), (0xbb, 0xbb), (0xbf, 0xbf),
    (0x2010, 0x2027), (0x2030, 0x2043), (0x2045, 0x2051), (0x2053, 0x205e),
    (0x2e00, 0x2e2e), (0x2e30, 0x2e4f),
    (0x3001, 0x3003), (0x3008, 0x3011), (0x3014, 0x301f), (0x3030, 0x3030),
    (0x303d, 0x303d), (0x30a0, 0x30a0), (0x30fb, 0x30fb),
    (0xfe10, 0xfe19), (0xfe30, 0xfe4f), (0xfe50, 0xfe52), (0xfe54, 0xfe61),
    (0xfe63, 0xfe63), (0xfe68, 0xfe68), (0xfe6a, 0xfe6b),
    (0xff01, 0xff03), (0xff05, 0xff0a), (0xff0c, 0xff0f), (0xff1a, 0xff1b),
    (0xff1f, 0xff20), (0xff3b, 0xff3d), (0xff3f, 0xff3f), (0xff5b, 0xff5b),
    (0xff5d, 0xff5d), (0xff5f, 0xff65),
];

pub fn is_code_point_in_ranges(code_point: u32, ranges: &[CodepointRange]) -> bool {
    ranges
        .iter()
        .any(|&(min, max)| code_point >= min && code_point <= max)
}

pub fn is_cjk_ideograph(c: char) -> bool {
    is_code_point_in_ranges(c as u32, &CJK_IDEOGRAPH_RANGES)
}

/// True when at least one character is a CJK ideograph
pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(is_cjk_ideograph)
}

pub fn is_hiragana_named(c: char) -> bool {
    is_code_point_in_ranges(c as u32, &HIRAGANA_NAMED_RANGES)
}

/// Unicode general category P*
pub fn is_punctuation(c: char) -> bool {
    is_code_point_in_ranges(c as u32, &PUNCTUATION_RANGES)
}

pub fn is_all_punctuation(text: &str) -> bool {
    text.chars().all(is_punctuation)
}
