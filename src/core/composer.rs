use crate::core::entropy::Entropy;
use crate::domain::model::{GeneratedPassword, Origin, WordEntry};
use serde::{Deserialize, Serialize};

pub const DIGIT_COUNT: usize = 3;

pub const DEFAULT_SYMBOLS: &[&str] = &[
    "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "-", "_", "+", "=", "{", "}", "[", "]", "|",
    "\\", ":", ";", "<", ">", ",", ".", "?", "/",
];

pub const MEMORABLE_TOKENS: &[&str] = &[
    "!", "@", "#", "$", "%", "^", "&", "*", "?", "!!", "!!!", "@@", "@@@", "##", "###", "$$",
    "$$$", "%%", "^^", "&&", "&&&",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialMode {
    /// `count` single characters from the alphabet.
    #[default]
    Symbols,
    /// One short repeated-symbol token such as `!!` or `###`.
    Memorable,
}

/// Assembles `Adjective + Noun + ddd + specials`.
#[derive(Debug, Clone)]
pub struct PasswordComposer {
    mode: SpecialMode,
    special_count: usize,
    alphabet: Vec<String>,
}

impl PasswordComposer {
    pub fn new(mode: SpecialMode, special_count: usize, alphabet: Vec<String>) -> Self {
        Self {
            mode,
            special_count,
            alphabet,
        }
    }

    pub fn symbols(special_count: usize) -> Self {
        Self::new(
            SpecialMode::Symbols,
            special_count,
            DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn memorable() -> Self {
        Self::new(
            SpecialMode::Memorable,
            1,
            MEMORABLE_TOKENS.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn mode(&self) -> SpecialMode {
        self.mode
    }

    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    pub fn compose<E: Entropy + ?Sized>(
        &self,
        adjective: WordEntry,
        noun: WordEntry,
        origin: Origin,
        entropy: &mut E,
    ) -> GeneratedPassword {
        let mut password = capitalize(&adjective.word);
        password.push_str(&capitalize(&noun.word));
        password.push_str(&self.digits(entropy));
        password.push_str(&self.specials(entropy));

        GeneratedPassword {
            password,
            adjective,
            noun,
            origin,
        }
    }

    fn digits<E: Entropy + ?Sized>(&self, entropy: &mut E) -> String {
        (0..DIGIT_COUNT)
            .map(|_| char::from(b'0' + entropy.digit() % 10))
            .collect()
    }

    fn specials<E: Entropy + ?Sized>(&self, entropy: &mut E) -> String {
        if self.alphabet.is_empty() {
            return String::new();
        }
        let draws = match self.mode {
            SpecialMode::Symbols => self.special_count,
            SpecialMode::Memorable => 1,
        };
        (0..draws)
            .map(|_| self.alphabet[entropy.pick(self.alphabet.len())].as_str())
            .collect()
    }
}

impl Default for PasswordComposer {
    fn default() -> Self {
        Self::symbols(1)
    }
}

/// Upper-cases the first character, leaves the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
