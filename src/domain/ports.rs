use crate::domain::model::{Category, WordEntry};
use crate::domain::pool::WordPool;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Supplies one adjective or noun per call, whatever the backend.
#[async_trait]
pub trait WordSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_category(&self, category: Category) -> Result<WordEntry>;

    /// Eagerly loads whatever the backend caches. No-op for per-request backends.
    async fn preload(&self) -> Result<()> {
        Ok(())
    }

    async fn refresh(&self) -> Result<()> {
        Ok(())
    }
}

/// Loads a complete word pool in one go, for backends that cache their lists.
#[async_trait]
pub trait PoolLoader: Send + Sync {
    fn name(&self) -> &'static str;

    async fn load(&self) -> Result<WordPool>;
}
