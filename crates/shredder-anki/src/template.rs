use serde::{Deserialize, Serialize};
use serde_json::json;

pub const FIELD_WORD: &str = "Word";
/// JSON array of example sentences, stored as a string
pub const FIELD_SENTENCES: &str = "Sentences";
pub const FIELD_READING: &str = "Reading";
pub const FIELD_TRANSLATION: &str = "Translation";

const FRONT_TEMPLATE: &str = r#"<div id="front" style="text-align: center; margin-top: 20px;">
  <span id="word" style="font-size: 24px; font-weight: bold;">{{Word}}</span>
  <span id="sentences" style="display: none;">{{Sentences}}</span>
  <p id="sentence-display" style="font-size: 20px; margin-top: 20px;"></p>
  <script>
    var word = document.getElementById("word").innerHTML.trim();
    var sentences = JSON.parse(document.getElementById("sentences").innerHTML.trim());
    var chosen = sentences[Math.floor(Math.random() * sentences.length)] || "";
    var escaped = word.replace(/[-\/\\^$*+?.()|[\]{}]/g, '\\$&');
    document.getElementById("sentence-display").innerHTML =
      chosen.replace(new RegExp(escaped, "g"), "<span style='color: yellow;'>" + word + "</span>");
  </script>
</div>"#;

const BACK_TEMPLATE: &str = r#"<div id="back" style="text-align: center; margin-top: 20px;">
  <span id="word" style="font-size: 24px; font-weight: bold;">{{Word}}</span>
  <p style="font-size: 20px; margin-top: 20px;">{{Reading}} - {{Translation}}</p>
</div>"#;

/// Note type the exported cards use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteModel {
    pub name: String,
    pub fields: Vec<String>,
    pub card_name: String,
    pub front_template: String,
    pub back_template: String,
}

impl NoteModel {
    /// Word card showing a random example sentence with the word highlighted
    pub fn flashcard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: [FIELD_WORD, FIELD_SENTENCES, FIELD_READING, FIELD_TRANSLATION]
                .map(String::from)
                .to_vec(),
            card_name: "Card 1".to_string(),
            front_template: FRONT_TEMPLATE.to_string(),
            back_template: BACK_TEMPLATE.to_string(),
        }
    }

    /// `createModel` parameters
    pub fn to_params(&self) -> serde_json::Value {
        json!({
            "modelName": self.name,
            "inOrderFields": self.fields,
            "cardTemplates": [{
                "Name": self.card_name,
                "Front": self.front_template,
                "Back": self.back_template,
            }]
        })
    }
}
