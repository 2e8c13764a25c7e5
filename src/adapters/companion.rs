use crate::adapters::{invalid, unavailable};
use crate::domain::model::{Category, WordEntry};
use crate::domain::ports::WordSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    word: Option<String>,
    definition: Option<String>,
    error: Option<String>,
}

/// Asks a companion lookup service for one word per request,
/// e.g. `GET {base}/api/random/noun`. Definitions are passed through.
pub struct CompanionSource {
    client: Client,
    base_url: String,
}

impl CompanionSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, category: Category) -> String {
        format!("{}/api/random/{}", self.base_url, category)
    }
}

#[async_trait]
impl WordSource for CompanionSource {
    fn name(&self) -> &'static str {
        "companion_service"
    }

    async fn fetch_category(&self, category: Category) -> Result<WordEntry> {
        let url = self.endpoint(category);
        tracing::debug!("Requesting random {} from: {}", category, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(category, e))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(unavailable(category, format!("{} returned status {}", url, status)));
        }

        // 讀取 body 中途逾時屬於連線問題，不是格式錯誤
        let body = response.bytes().await.map_err(|e| unavailable(category, e))?;
        let body: LookupResponse =
            serde_json::from_slice(&body).map_err(|e| invalid(category, e))?;
        if !status.is_success() {
            let reason = body.error.unwrap_or_else(|| format!("status {}", status));
            return Err(invalid(category, reason));
        }

        let word = body.word.map(|w| w.trim().to_string()).unwrap_or_default();
        if word.is_empty() {
            return Err(invalid(category, "response has no word"));
        }
        if !WordEntry::is_single_word(&word) {
            return Err(invalid(category, format!("'{}' is not a single word", word)));
        }

        Ok(WordEntry::with_definition(word, body.definition))
    }
}
