use crate::core::composer::capitalize;
use crate::domain::model::{GeneratedPassword, WordEntry};
use serde::{Deserialize, Serialize};

pub const GENERATION_FAILED: &str = "Failed to generate password";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<WordsPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsPayload {
    pub adjective: WordEntry,
    pub noun: WordEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GenerateResponse {
    pub fn new(generated: GeneratedPassword, include_words: bool) -> Self {
        let words = include_words.then(|| WordsPayload {
            adjective: display_entry(&generated.adjective),
            noun: display_entry(&generated.noun),
        });
        Self {
            password: generated.password,
            words,
        }
    }
}

fn display_entry(entry: &WordEntry) -> WordEntry {
    WordEntry {
        word: capitalize(&entry.word),
        definition: entry.definition.clone(),
    }
}
