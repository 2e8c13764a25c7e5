use crate::core::cache::PoolCache;
use crate::domain::model::{Category, WordEntry};
use crate::domain::ports::{PoolLoader, WordSource};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A word source backed by a fully loaded, cached pool.
pub struct PooledSource<L: PoolLoader> {
    loader: L,
    cache: PoolCache,
}

impl<L: PoolLoader> PooledSource<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            cache: PoolCache::new(),
        }
    }

    pub fn cache(&self) -> &PoolCache {
        &self.cache
    }
}

#[async_trait]
impl<L: PoolLoader> WordSource for PooledSource<L> {
    fn name(&self) -> &'static str {
        self.loader.name()
    }

    async fn fetch_category(&self, category: Category) -> Result<WordEntry> {
        let pool = self.cache.get_or_load(|| self.loader.load()).await?;
        pool.draw(category, &mut rand::thread_rng())
    }

    async fn preload(&self) -> Result<()> {
        self.cache.get_or_load(|| self.loader.load()).await?;
        Ok(())
    }

    async fn refresh(&self) -> Result<()> {
        tracing::info!("🔄 Refreshing {} word pool", self.loader.name());
        self.cache.refresh(|| self.loader.load()).await?;
        Ok(())
    }
}
