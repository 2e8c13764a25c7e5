use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFINITION_NOT_AVAILABLE: &str = "Definition not available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Adjective,
    Noun,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Adjective, Category::Noun];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Adjective => "adjective",
            Category::Noun => "noun",
        }
    }

    /// File name used by the on-disk word cache.
    pub fn cache_file(&self) -> &'static str {
        match self {
            Category::Adjective => "adjectives.json",
            Category::Noun => "nouns.json",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default = "default_definition")]
    pub definition: String,
}

fn default_definition() -> String {
    DEFINITION_NOT_AVAILABLE.to_string()
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: default_definition(),
        }
    }

    pub fn with_definition(word: impl Into<String>, definition: Option<String>) -> Self {
        let definition = definition
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(default_definition);
        Self {
            word: word.into(),
            definition,
        }
    }

    /// A single whole word: no whitespace, underscores or hyphens.
    pub fn is_single_word(word: &str) -> bool {
        !word.is_empty()
            && !word
                .chars()
                .any(|c| c.is_whitespace() || c == '_' || c == '-')
    }
}

/// Where the words of a generated password came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Wordlist,
    Fallback,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Wordlist => f.write_str("wordlist"),
            Origin::Fallback => f.write_str("fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub password: String,
    pub adjective: WordEntry,
    pub noun: WordEntry,
    pub origin: Origin,
}

impl GeneratedPassword {
    /// Masked form for logs.
    pub fn obscured(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}
