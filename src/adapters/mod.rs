// Adapters layer: concrete word sources (cache files, remote lists, companion
// service, embedded fallback) and the local storage they read from.

pub mod cached_file;
pub mod companion;
pub mod fallback;
pub mod pooled;
pub mod remote;
pub mod storage;

use crate::config::{Backend, SourceConfig};
use crate::domain::model::Category;
use crate::domain::ports::WordSource;
use crate::utils::error::{PassError, Result};
use cached_file::CachedFileLoader;
use companion::CompanionSource;
use fallback::StaticFallback;
use pooled::PooledSource;
use remote::RemoteListLoader;
use reqwest::Client;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use storage::LocalStorage;

/// Builds the word source selected by `source.backend`.
pub fn build_source(config: &SourceConfig) -> Result<Arc<dyn WordSource>> {
    let source: Arc<dyn WordSource> = match config.backend {
        Backend::CachedFile => {
            let dir = config.cache_dir.as_deref().ok_or_else(|| PassError::MissingConfigError {
                field: "source.cache_dir".to_string(),
            })?;
            Arc::new(PooledSource::new(CachedFileLoader::new(
                LocalStorage::new(dir),
                config.min_pool_size,
            )))
        }
        Backend::RemoteFetch => Arc::new(PooledSource::new(RemoteListLoader::new(
            build_http_client(config.timeout())?,
            config.adjectives_url.clone(),
            config.nouns_url.clone(),
            config.min_pool_size,
            config.cache_dir.as_deref().map(LocalStorage::new),
        ))),
        Backend::CompanionService => {
            let base_url =
                config
                    .companion_url
                    .as_deref()
                    .ok_or_else(|| PassError::MissingConfigError {
                        field: "source.companion_url".to_string(),
                    })?;
            Arc::new(CompanionSource::new(
                build_http_client(config.timeout())?,
                base_url,
            ))
        }
        Backend::StaticFallback => Arc::new(StaticFallback::new()),
    };

    tracing::info!("📖 Word source: {}", source.name());
    Ok(source)
}

pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| PassError::ConfigValidationError {
            field: "source.timeout_seconds".to_string(),
            message: format!("HTTP client setup failed: {}", e),
        })
}

/// Parses a flat JSON array of words.
pub(crate) fn parse_word_list(category: Category, data: &[u8]) -> Result<Vec<String>> {
    serde_json::from_slice::<Vec<String>>(data)
        .map_err(|e| invalid(category, format!("expected a JSON array of words: {}", e)))
}

pub(crate) fn unavailable(category: Category, cause: impl Display) -> PassError {
    PassError::SourceUnavailable {
        category,
        message: cause.to_string(),
    }
}

pub(crate) fn invalid(category: Category, cause: impl Display) -> PassError {
    PassError::InvalidResponse {
        category,
        message: cause.to_string(),
    }
}
