use crate::adapters::{parse_word_list, unavailable};
use crate::domain::model::Category;
use crate::domain::pool::WordPool;
use crate::domain::ports::{PoolLoader, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ADJECTIVES_URL: &str =
    "https://raw.githubusercontent.com/InevitableMarble249/dictionaries/refs/heads/main/adjectives.json";
pub const DEFAULT_NOUNS_URL: &str =
    "https://raw.githubusercontent.com/InevitableMarble249/dictionaries/refs/heads/main/nouns.json";

/// Downloads both dictionaries as flat JSON arrays and optionally mirrors
/// them into the word cache.
pub struct RemoteListLoader<S: Storage> {
    client: Client,
    adjectives_url: String,
    nouns_url: String,
    min_pool_size: usize,
    write_through: Option<S>,
}

impl<S: Storage> RemoteListLoader<S> {
    pub fn new(
        client: Client,
        adjectives_url: impl Into<String>,
        nouns_url: impl Into<String>,
        min_pool_size: usize,
        write_through: Option<S>,
    ) -> Self {
        Self {
            client,
            adjectives_url: adjectives_url.into(),
            nouns_url: nouns_url.into(),
            min_pool_size,
            write_through,
        }
    }

    fn url_for(&self, category: Category) -> &str {
        match category {
            Category::Adjective => &self.adjectives_url,
            Category::Noun => &self.nouns_url,
        }
    }

    async fn fetch_list(&self, category: Category) -> Result<Vec<String>> {
        let url = self.url_for(category);
        tracing::debug!("Fetching {} list from: {}", category, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| unavailable(category, e))?;

        tracing::debug!("{} list response status: {}", category, response.status());
        if !response.status().is_success() {
            return Err(unavailable(
                category,
                format!("{} returned status {}", url, response.status()),
            ));
        }

        let body = response.bytes().await.map_err(|e| unavailable(category, e))?;
        let words = parse_word_list(category, &body)?;

        if let Some(storage) = &self.write_through {
            // 快取寫入失敗不影響本次請求
            if let Err(e) = storage.write_file(category.cache_file(), &body).await {
                tracing::warn!("⚠️ Could not write {} to word cache: {}", category.cache_file(), e);
            }
        }

        Ok(words)
    }
}

#[async_trait]
impl<S: Storage> PoolLoader for RemoteListLoader<S> {
    fn name(&self) -> &'static str {
        "remote_fetch"
    }

    async fn load(&self) -> Result<WordPool> {
        let (adjectives, nouns) = tokio::try_join!(
            self.fetch_list(Category::Adjective),
            self.fetch_list(Category::Noun)
        )?;

        let pool = WordPool::from_words(adjectives, nouns);
        pool.ensure_min_size(self.min_pool_size)?;

        tracing::info!(
            "🌐 Fetched dictionaries: {} adjectives, {} nouns",
            pool.len(Category::Adjective),
            pool.len(Category::Noun)
        );
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::utils::error::PassError;
    use crate::adapters::build_http_client;
    use httpmock::prelude::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn words(prefix: &str, count: usize) -> serde_json::Value {
        serde_json::json!((0..count).map(|i| format!("{}{}", prefix, i)).collect::<Vec<_>>())
    }

    fn loader(server: &MockServer, write_through: Option<LocalStorage>) -> RemoteListLoader<LocalStorage> {
        RemoteListLoader::new(
            Client::new(),
            server.url("/adjectives.json"),
            server.url("/nouns.json"),
            10,
            write_through,
        )
    }

    #[tokio::test]
    async fn test_load_both_lists() {
        let server = MockServer::start();
        let adjectives_mock = server.mock(|when, then| {
            when.method(GET).path("/adjectives.json");
            then.status(200).json_body(words("adj", 11));
        });
        let nouns_mock = server.mock(|when, then| {
            when.method(GET).path("/nouns.json");
            then.status(200).json_body(words("noun", 20));
        });

        let pool = loader(&server, None).load().await.unwrap();

        adjectives_mock.assert();
        nouns_mock.assert();
        assert_eq!(pool.len(Category::Adjective), 11);
        assert_eq!(pool.len(Category::Noun), 20);
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/adjectives.json");
            then.status(503);
        });
        server.mock(|when, then| {
            when.method(GET).path("/nouns.json");
            then.status(200).json_body(words("noun", 20));
        });

        let result = loader(&server, None).load().await;
        assert!(matches!(result, Err(PassError::SourceUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_slow_list_times_out_as_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/adjectives.json");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(words("adj", 11));
        });
        server.mock(|when, then| {
            when.method(GET).path("/nouns.json");
            then.status(200).json_body(words("noun", 20));
        });

        let client = build_http_client(Duration::from_millis(200)).unwrap();
        let loader: RemoteListLoader<LocalStorage> = RemoteListLoader::new(
            client,
            server.url("/adjectives.json"),
            server.url("/nouns.json"),
            10,
            None,
        );

        let result = loader.load().await;
        assert!(matches!(result, Err(PassError::SourceUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_non_array_body_is_invalid_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/adjectives.json");
            then.status(200).body("<html>not json</html>");
        });
        server.mock(|when, then| {
            when.method(GET).path("/nouns.json");
            then.status(200).json_body(words("noun", 20));
        });

        let result = loader(&server, None).load().await;
        assert!(matches!(result, Err(PassError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn test_write_through_mirrors_lists() {
        let temp_dir = TempDir::new().unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/adjectives.json");
            then.status(200).json_body(words("adj", 10));
        });
        server.mock(|when, then| {
            when.method(GET).path("/nouns.json");
            then.status(200).json_body(words("noun", 10));
        });

        loader(&server, Some(LocalStorage::new(temp_dir.path())))
            .load()
            .await
            .unwrap();

        let cached = std::fs::read(temp_dir.path().join("nouns.json")).unwrap();
        let cached: Vec<String> = serde_json::from_slice(&cached).unwrap();
        assert_eq!(cached.len(), 10);
        assert!(temp_dir.path().join("adjectives.json").exists());
    }
}
