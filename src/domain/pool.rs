use crate::core::entropy::Entropy;
use crate::domain::model::{Category, WordEntry};
use crate::utils::error::{PassError, Result};

/// Candidate words per category. Built once per load and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    adjectives: Vec<WordEntry>,
    nouns: Vec<WordEntry>,
}

impl WordPool {
    /// Builds a pool from raw word lists, dropping blank and multi-word entries.
    pub fn from_words(adjectives: Vec<String>, nouns: Vec<String>) -> Self {
        Self {
            adjectives: normalize(adjectives),
            nouns: normalize(nouns),
        }
    }

    pub fn entries(&self, category: Category) -> &[WordEntry] {
        match category {
            Category::Adjective => &self.adjectives,
            Category::Noun => &self.nouns,
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.entries(category).len()
    }

    /// Fails with `InsufficientPool` for the first category below `minimum`.
    pub fn ensure_min_size(&self, minimum: usize) -> Result<()> {
        for category in Category::ALL {
            let found = self.len(category);
            if found < minimum {
                return Err(PassError::InsufficientPool {
                    category,
                    found,
                    minimum,
                });
            }
        }
        Ok(())
    }

    /// Uniform draw with replacement.
    pub fn draw<E: Entropy + ?Sized>(&self, category: Category, entropy: &mut E) -> Result<WordEntry> {
        let entries = self.entries(category);
        if entries.is_empty() {
            return Err(PassError::InsufficientPool {
                category,
                found: 0,
                minimum: 1,
            });
        }
        Ok(entries[entropy.pick(entries.len())].clone())
    }
}

fn normalize(words: Vec<String>) -> Vec<WordEntry> {
    words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| WordEntry::is_single_word(w))
        .map(WordEntry::new)
        .collect()
}
