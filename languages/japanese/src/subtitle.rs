use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

const EVENTS_HEADER: &str = "[events]";
const DIALOGUE_PREFIX: &str = "Dialogue:";
const ASS_FIELD_COUNT: usize = 10;
const ASS_STYLE_FIELD: usize = 3;
const ASS_TEXT_FIELD: usize = 9;
const SRT_TIMING_MARKER: &str = "-->";

static RE_OVERRIDE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());
static RE_HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Supported input formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Ass,
    Srt,
    Text,
}

impl SubtitleFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ass" | "ssa" => Some(Self::Ass),
            "srt" => Some(Self::Srt),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    /// Dialogue sentences in file order
    pub fn extract(self, content: &str, style: &str) -> Vec<String> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        match self {
            Self::Ass => extract_ass_dialogue(content, style),
            Self::Srt => extract_srt_cues(content),
            Self::Text => extract_plain_lines(content),
        }
    }
}

/// Text of `Dialogue:` events in the given style
pub fn extract_ass_dialogue(content: &str, style: &str) -> Vec<String> {
    let mut in_events = false;
    let mut sentences = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('[') && line.ends_with(']') {
            in_events = line.eq_ignore_ascii_case(EVENTS_HEADER);
            continue;
        }
        if !in_events {
            continue;
        }
        let Some(event) = line.strip_prefix(DIALOGUE_PREFIX) else {
            continue;
        };

        let fields: Vec<&str> = event.splitn(ASS_FIELD_COUNT, ',').collect();
        if fields.len() < ASS_FIELD_COUNT {
            tracing::debug!("Skipping malformed dialogue event: {}", line);
            continue;
        }
        if !fields[ASS_STYLE_FIELD].trim().eq_ignore_ascii_case(style) {
            continue;
        }

        let text = clean_ass_text(fields[ASS_TEXT_FIELD]);
        if !text.is_empty() {
            sentences.push(text);
        }
    }

    sentences
}

/// Drop `{...}` override blocks and turn line-break escapes into spaces
pub fn clean_ass_text(text: &str) -> String {
    RE_OVERRIDE_BLOCK
        .replace_all(text, "")
        .replace("\\N", " ")
        .replace("\\n", " ")
        .replace("\\h", " ")
        .trim()
        .to_string()
}

/// Cue texts of an `.srt` file, one sentence per cue
pub fn extract_srt_cues(content: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut cue: Vec<&str> = Vec::new();

    for line in content.lines().chain(std::iter::once("")) {
        let line = line.trim();
        if !line.is_empty() {
            cue.push(line);
            continue;
        }
        if cue.is_empty() {
            continue;
        }

        match cue.iter().position(|l| l.contains(SRT_TIMING_MARKER)) {
            Some(timing) => {
                let joined = cue[timing + 1..].join(" ");
                let text = RE_HTML_TAG.replace_all(&joined, "");
                let text = RE_OVERRIDE_BLOCK.replace_all(&text, "");
                let text = text.trim();
                if !text.is_empty() {
                    sentences.push(text.to_string());
                }
            }
            None => tracing::debug!("Skipping cue without timing line: {:?}", cue),
        }
        cue.clear();
    }

    sentences
}

pub fn extract_plain_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASS: &str = "\u{feff}[Script Info]\n\
        Title: test\n\
        Dialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,not events yet\n\
        \n\
        [Events]\n\
        Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n\
        Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,{\\i1}猫が{\\i0}鳴いた\n\
        Dialogue: 0,0:00:02.00,0:00:03.00,Signs,,0,0,0,,看板\n\
        Comment: 0,0:00:03.00,0:00:04.00,Default,,0,0,0,,コメント\n\
        Dialogue: 0,0:00:04.00,0:00:05.00, default ,,0,0,0,,行く\\Nよ, 本当に\n\
        Dialogue: 0,0:00:05.00,0:00:06.00,Default,,0,0,0,,{\\pos(1,1)}\n\
        Dialogue: 0,0:00:06.00,Default,broken\n";

    #[test]
    fn ass_keeps_default_style_dialogue_only() {
        let lines = SubtitleFormat::Ass.extract(ASS, "default");
        assert_eq!(lines, ["猫が鳴いた", "行く よ, 本当に"]);
    }

    #[test]
    fn override_blocks_do_not_nest() {
        assert_eq!(clean_ass_text("猫{が鳴いた"), "猫{が鳴いた");
        assert_eq!(clean_ass_text("{a{b}c}犬"), "c}犬");
        assert_eq!(clean_ass_text("{\\b1}猫{\\b0}だ"), "猫だ");
    }

    #[test]
    fn ass_style_is_configurable() {
        let lines = SubtitleFormat::Ass.extract(ASS, "signs");
        assert_eq!(lines, ["看板"]);
    }

    #[test]
    fn ass_events_end_at_next_section() {
        let content = "[Events]\n\
            Dialogue: 0,0,0,Default,,0,0,0,,一\n\
            [Fonts]\n\
            Dialogue: 0,0,0,Default,,0,0,0,,二\n";
        assert_eq!(extract_ass_dialogue(content, "Default"), ["一"]);
    }

    #[test]
    fn srt_cues_join_lines_and_strip_tags() {
        let content = "1\n\
            00:00:01,000 --> 00:00:02,000\n\
            <i>猫が</i>\n\
            鳴いた\n\
            \n\
            2\n\
            no timing here\n\
            \n\
            3\n\
            00:00:03,000 --> 00:00:04,000\n\
            {\\an8}犬";
        assert_eq!(extract_srt_cues(content), ["猫が 鳴いた", "犬"]);
    }

    #[test]
    fn plain_text_skips_blank_lines() {
        let lines = SubtitleFormat::Text.extract("  一行目 \n\n\t\n二行目\n", "default");
        assert_eq!(lines, ["一行目", "二行目"]);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(SubtitleFormat::from_path(Path::new("a/ep01.ASS")), Some(SubtitleFormat::Ass));
        assert_eq!(SubtitleFormat::from_path(Path::new("ep01.srt")), Some(SubtitleFormat::Srt));
        assert_eq!(SubtitleFormat::from_path(Path::new("notes.txt")), Some(SubtitleFormat::Text));
        assert_eq!(SubtitleFormat::from_path(Path::new("video.mkv")), None);
        assert_eq!(SubtitleFormat::from_path(Path::new("README")), None);
    }
}
