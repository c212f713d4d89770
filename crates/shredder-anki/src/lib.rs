mod client;
mod template;

pub use client::AnkiConnectClient;
pub use template::NoteModel;

use anyhow::{Context, Result};
use serde_json::json;
use shredder_core::frequency::FrequencyTier;
use shredder_types::FlashcardEntry;

/// Outcome of one export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    pub added: usize,
    /// Already in the collection, never sent to `addNotes`
    pub duplicates: usize,
    pub rejected: usize,
}

/// Keep the notes `canAddNotes` accepted, returning them with the skipped count
pub fn split_addable(
    notes: Vec<serde_json::Value>,
    addable: &[bool],
) -> (Vec<serde_json::Value>, usize) {
    let total = notes.len();
    let kept: Vec<_> = notes
        .into_iter()
        .zip(addable.iter().copied().chain(std::iter::repeat(false)))
        .filter_map(|(note, ok)| ok.then_some(note))
        .collect();
    let skipped = total - kept.len();
    (kept, skipped)
}

/// `addNotes` entry for one flashcard
pub fn build_note(deck: &str, model: &str, card: &FlashcardEntry) -> Result<serde_json::Value> {
    let sentences =
        serde_json::to_string(&card.sentences).context("Failed to encode example sentences")?;

    Ok(json!({
        "deckName": deck,
        "modelName": model,
        "fields": {
            "Word": card.word,
            "Sentences": sentences,
            "Reading": card.reading,
            "Translation": card.translation,
        },
        "tags": [FrequencyTier::from_count(card.frequency).as_tag()],
        "options": { "allowDuplicate": false }
    }))
}

/// Push flashcards into `deck`, creating the deck and note model as needed
pub async fn export_flashcards(
    client: &AnkiConnectClient,
    deck: &str,
    model: &NoteModel,
    cards: &[FlashcardEntry],
) -> Result<ExportSummary> {
    if cards.is_empty() {
        tracing::info!("No flashcards met the threshold, skipping Anki export");
        return Ok(ExportSummary::default());
    }

    let version = client
        .check_connection()
        .await
        .context("AnkiConnect is not reachable")?;
    tracing::debug!("AnkiConnect version {}", version);

    client.create_deck(deck).await?;

    let models = client.model_names().await?;
    if !models.iter().any(|name| name == &model.name) {
        tracing::info!("Creating note model '{}'", model.name);
        client.create_model(model).await?;
    }

    let notes = cards
        .iter()
        .map(|card| build_note(deck, &model.name, card))
        .collect::<Result<Vec<_>>>()?;

    // addNotes errors out on the whole batch when any note is a duplicate
    let addable = client.can_add_notes(&notes).await?;
    let (notes, duplicates) = split_addable(notes, &addable);

    let results = if notes.is_empty() {
        Vec::new()
    } else {
        client.add_notes(notes).await?
    };
    let added = results.iter().filter(|id| id.is_some()).count();
    let summary = ExportSummary {
        added,
        duplicates,
        rejected: results.len() - added,
    };

    tracing::info!(
        "Anki export to '{}': {} added, {} already present, {} rejected",
        deck,
        summary.added,
        summary.duplicates,
        summary.rejected
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(frequency: usize) -> FlashcardEntry {
        FlashcardEntry {
            word: "食べる".to_string(),
            reading: "たべる".to_string(),
            translation: "to eat".to_string(),
            sentences: vec!["パンを食べる".to_string(), "\"食べ\"た".to_string()],
            frequency,
        }
    }

    #[test]
    fn note_fields_and_tag() {
        let note = build_note("deck", "Custom Flashcard Model", &card(23)).unwrap();
        assert_eq!(note["deckName"], "deck");
        assert_eq!(note["fields"]["Word"], "食べる");
        assert_eq!(note["fields"]["Reading"], "たべる");
        assert_eq!(note["fields"]["Translation"], "to eat");
        assert_eq!(note["tags"], json!(["common"]));

        let sentences: Vec<String> =
            serde_json::from_str(note["fields"]["Sentences"].as_str().unwrap()).unwrap();
        assert_eq!(sentences, card(23).sentences);
    }

    #[test]
    fn tags_follow_frequency_tiers() {
        let tag = |n| build_note("d", "m", &card(n)).unwrap()["tags"][0].clone();
        assert_eq!(tag(50), "very_common");
        assert_eq!(tag(10), "uncommon");
        assert_eq!(tag(5), "rare");
    }

    #[test]
    fn duplicates_are_filtered_before_adding() {
        let notes: Vec<_> = [5, 20, 50]
            .into_iter()
            .map(|n| build_note("d", "m", &card(n)).unwrap())
            .collect();

        let (kept, skipped) = split_addable(notes, &[true, false, true]);
        assert_eq!(skipped, 1);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0]["tags"][0], "rare");
        assert_eq!(kept[1]["tags"][0], "very_common");
    }

    #[test]
    fn short_can_add_answer_skips_the_rest() {
        let notes = vec![build_note("d", "m", &card(5)).unwrap(); 3];
        let (kept, skipped) = split_addable(notes, &[true]);
        assert_eq!((kept.len(), skipped), (1, 2));
    }

    #[tokio::test]
    async fn nothing_to_export_skips_connection() {
        let client = AnkiConnectClient::new("http://127.0.0.1:9");
        let model = NoteModel::flashcard("Custom Flashcard Model");
        let summary = export_flashcards(&client, "deck", &model, &[]).await.unwrap();
        assert_eq!(summary, ExportSummary::default());
    }
}
