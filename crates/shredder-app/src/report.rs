use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use shredder_core::PipelineOutput;
use shredder_types::{AmbiguousGroup, FrequencyRow, ScrapSection, SourceListing};

pub const OUTPUT_FILE: &str = "output.txt";
pub const FREQUENCY_FILE: &str = "frequency_output.txt";
pub const SCRAP_FILE: &str = "scrap.txt";
pub const VOCABULARY_JSON_FILE: &str = "output_data.json";
pub const AMBIGUOUS_JSON_FILE: &str = "ambiguous_entries.json";
pub const AMBIGUOUS_TEXT_FILE: &str = "ambiguous_entries.txt";
pub const FLASHCARDS_FILE: &str = "flashcards.json";

const COLUMNS: &str = "Token\tReading\tEng-reading\tSentence";

// Each report is a list of lines joined by "\n"; headers carry their own
// trailing newline and every section ends with a "\n" entry.

pub fn render_listing(listing: &[SourceListing]) -> String {
    let mut lines = vec!["Final Vocabulary List (grouped by file):\n".to_string()];
    for source in listing {
        let stats = &source.stats;
        lines.push(format!("=== {} ===", source.source_id));
        lines.push(format!(
            "Kept initially: {}, Duplicates dropped: {}, Final kept: {}",
            stats.kept_initial, stats.duplicates_dropped, stats.final_kept
        ));
        lines.push(COLUMNS.to_string());
        lines.push("-".repeat(80));
        for row in &source.rows {
            lines.push(format!(
                "{}\t{}\t{}\t{}",
                row.surface, row.reading, row.translation, row.sentence
            ));
        }
        lines.push("\n".to_string());
    }
    lines.join("\n")
}

pub fn render_frequency(rows: &[FrequencyRow]) -> String {
    let mut lines = vec!["Final Vocabulary Grouped by Frequency (descending):\n".to_string()];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{}\t{}\t{}\tFrequency: {}\tSample: {}",
            row.base, row.reading, row.translation, row.frequency, row.sample_sentence
        )
    }));
    lines.join("\n")
}

pub fn render_scrap(sections: &[ScrapSection]) -> String {
    let mut lines = vec!["Scrap (Unidentified) Tokens (grouped by file):\n".to_string()];
    for section in sections {
        lines.push(format!("=== {} ===", section.source_id));
        lines.push(COLUMNS.to_string());
        lines.push("-".repeat(60));
        for row in &section.rows {
            lines.push(format!(
                "{}\t{}\t{}\t{}",
                row.surface, row.reading, row.translation, row.sentence
            ));
        }
        lines.push("\n".to_string());
    }
    lines.join("\n")
}

pub fn render_ambiguous_review(groups: &[AmbiguousGroup]) -> String {
    let mut lines = vec!["Ambiguous Entries for Manual Review:\n".to_string()];
    for group in groups {
        lines.push(format!("Surface: {}", group.surface));
        for occurrence in &group.occurrences {
            lines.push(format!(
                "  Potential Base: {}, Reading: {}, Translation: {}, Sentence: {}",
                occurrence.potential_base,
                occurrence.reading,
                occurrence.translation,
                occurrence.sentence
            ));
        }
        lines.push("\n".to_string());
    }
    lines.join("\n")
}

/// Pretty JSON with two-space indent, non-ASCII left as is
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize report")
}

/// Write every report into `dir`, creating it when missing
pub fn write_outputs(dir: &Path, output: &PipelineOutput) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let files = [
        (OUTPUT_FILE, render_listing(&output.listing)),
        (FREQUENCY_FILE, render_frequency(&output.frequency)),
        (SCRAP_FILE, render_scrap(&output.scrap)),
        (VOCABULARY_JSON_FILE, to_pretty_json(&output.vocabulary)?),
        (AMBIGUOUS_JSON_FILE, to_pretty_json(&output.ambiguous_vocabulary)?),
        (AMBIGUOUS_TEXT_FILE, render_ambiguous_review(&output.ambiguous_review)),
        (FLASHCARDS_FILE, to_pretty_json(&output.flashcards)?),
    ];

    for (name, content) in files {
        let path = dir.join(name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}
