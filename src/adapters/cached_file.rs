use crate::adapters::parse_word_list;
use crate::domain::model::Category;
use crate::domain::pool::WordPool;
use crate::domain::ports::{PoolLoader, Storage};
use crate::utils::error::{PassError, Result};
use async_trait::async_trait;

/// Reads `adjectives.json` and `nouns.json` from the word cache.
pub struct CachedFileLoader<S: Storage> {
    storage: S,
    min_pool_size: usize,
}

impl<S: Storage> CachedFileLoader<S> {
    pub fn new(storage: S, min_pool_size: usize) -> Self {
        Self {
            storage,
            min_pool_size,
        }
    }

    async fn read_category(&self, category: Category) -> Result<Vec<String>> {
        let data = match self.storage.read_file(category.cache_file()).await {
            Ok(data) => data,
            Err(PassError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::error!("❌ Word cache file {} is missing", category.cache_file());
                return Err(PassError::InsufficientPool {
                    category,
                    found: 0,
                    minimum: self.min_pool_size,
                });
            }
            Err(e) => return Err(e),
        };
        parse_word_list(category, &data)
    }
}

#[async_trait]
impl<S: Storage> PoolLoader for CachedFileLoader<S> {
    fn name(&self) -> &'static str {
        "cached_file"
    }

    async fn load(&self) -> Result<WordPool> {
        let adjectives = self.read_category(Category::Adjective).await?;
        let nouns = self.read_category(Category::Noun).await?;

        let pool = WordPool::from_words(adjectives, nouns);
        pool.ensure_min_size(self.min_pool_size)?;

        tracing::info!(
            "📚 Loaded word cache: {} adjectives, {} nouns",
            pool.len(Category::Adjective),
            pool.len(Category::Noun)
        );
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_words(&self, path: &str, count: usize, prefix: &str) {
            let words: Vec<String> = (0..count).map(|i| format!("{}{}", prefix, i)).collect();
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), serde_json::to_vec(&words).unwrap());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PassError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_full_cache() {
        let storage = MockStorage::new();
        storage.put_words("adjectives.json", 12, "adj").await;
        storage.put_words("nouns.json", 15, "noun").await;

        let pool = CachedFileLoader::new(storage, 10).load().await.unwrap();
        assert_eq!(pool.len(Category::Adjective), 12);
        assert_eq!(pool.len(Category::Noun), 15);
    }

    #[tokio::test]
    async fn test_short_noun_list_is_insufficient() {
        let storage = MockStorage::new();
        storage.put_words("adjectives.json", 12, "adj").await;
        storage.put_words("nouns.json", 9, "noun").await;

        let result = CachedFileLoader::new(storage, 10).load().await;
        assert!(matches!(
            result,
            Err(PassError::InsufficientPool {
                category: Category::Noun,
                found: 9,
                minimum: 10
            })
        ));
    }

    #[tokio::test]
    async fn test_missing_cache_is_insufficient() {
        let result = CachedFileLoader::new(MockStorage::new(), 10).load().await;
        assert!(matches!(
            result,
            Err(PassError::InsufficientPool {
                category: Category::Adjective,
                found: 0,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_malformed_cache_is_invalid_response() {
        let storage = MockStorage::new();
        storage
            .write_file("adjectives.json", br#"{"words": "nope"}"#)
            .await
            .unwrap();

        let result = CachedFileLoader::new(storage, 10).load().await;
        assert!(matches!(result, Err(PassError::InvalidResponse { .. })));
    }
}
