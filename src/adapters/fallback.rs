use crate::core::entropy::Entropy;
use crate::domain::model::{Category, WordEntry};
use crate::domain::pool::WordPool;
use crate::domain::ports::WordSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, OnceLock};

const FALLBACK_ADJECTIVES: &[&str] = &[
    "happy", "brave", "calm", "clever", "eager", "gentle", "jolly", "kind", "lively", "proud",
    "silly", "witty", "bright", "swift", "quiet", "bold", "cosy", "fancy", "golden", "humble",
    "lucky", "mighty", "noble", "rapid", "sunny", "tidy", "vivid", "warm", "zesty", "curious",
];

const FALLBACK_NOUNS: &[&str] = &[
    "tiger", "river", "mountain", "garden", "rocket", "castle", "forest", "island", "dragon",
    "falcon", "meadow", "harbor", "lantern", "compass", "comet", "canyon", "otter", "penguin",
    "violin", "anchor", "pebble", "thunder", "willow", "panda", "glacier", "orchard", "beacon",
    "walrus", "maple", "galaxy",
];

static FALLBACK_POOL: OnceLock<Arc<WordPool>> = OnceLock::new();

fn fallback_pool() -> Arc<WordPool> {
    Arc::clone(FALLBACK_POOL.get_or_init(|| {
        let to_words = |list: &[&str]| -> Vec<String> { list.iter().map(|w| w.to_string()).collect() };
        Arc::new(WordPool::from_words(
            to_words(FALLBACK_ADJECTIVES),
            to_words(FALLBACK_NOUNS),
        ))
    }))
}

/// The embedded word list. Never fails and never touches the network.
#[derive(Debug, Clone)]
pub struct StaticFallback {
    pool: Arc<WordPool>,
}

impl StaticFallback {
    pub fn new() -> Self {
        Self {
            pool: fallback_pool(),
        }
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    pub fn contains(&self, category: Category, word: &str) -> bool {
        self.pool.entries(category).iter().any(|e| e.word == word)
    }

    pub fn draw<E: Entropy + ?Sized>(&self, category: Category, entropy: &mut E) -> Result<WordEntry> {
        self.pool.draw(category, entropy)
    }
}

impl Default for StaticFallback {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordSource for StaticFallback {
    fn name(&self) -> &'static str {
        "static_fallback"
    }

    async fn fetch_category(&self, category: Category) -> Result<WordEntry> {
        self.draw(category, &mut rand::thread_rng())
    }
}
