use crate::domain::pool::WordPool;
use crate::utils::error::{PassError, Result};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Default)]
struct LoadState {
    last_failure: Option<PassError>,
}

/// Process-wide word pool slot.
///
/// Reads take the fast path once a pool is stored. Loads and refreshes are
/// serialized behind `load_lock`, so concurrent first requests wait on the
/// same in-flight load instead of starting their own. When that load fails,
/// everyone who was waiting on it gets the same error; the next caller after
/// that tries again. A failed load leaves the slot untouched.
#[derive(Debug, Default)]
pub struct PoolCache {
    current: RwLock<Option<Arc<WordPool>>>,
    load_lock: Mutex<LoadState>,
    finished: AtomicU64,
}

impl PoolCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<Arc<WordPool>> {
        self.current.read().await.clone()
    }

    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<WordPool>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<WordPool>>,
    {
        if let Some(pool) = self.get().await {
            return Ok(pool);
        }

        let observed = self.finished.load(Ordering::SeqCst);
        let mut state = self.load_lock.lock().await;
        // 等待期間可能已經有人載入完成
        if let Some(pool) = self.get().await {
            return Ok(pool);
        }
        // 等到的那次載入失敗了，直接回報同一個錯誤
        if self.finished.load(Ordering::SeqCst) != observed {
            if let Some(failure) = &state.last_failure {
                return Err(failure.duplicate());
            }
        }

        self.load_into(&mut state, load).await
    }

    /// Replaces the stored pool. On failure the previous pool is kept.
    pub async fn refresh<F, Fut>(&self, load: F) -> Result<Arc<WordPool>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<WordPool>>,
    {
        let mut state = self.load_lock.lock().await;
        self.load_into(&mut state, load).await
    }

    async fn load_into<F, Fut>(&self, state: &mut LoadState, load: F) -> Result<Arc<WordPool>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<WordPool>>,
    {
        let loaded = load().await;
        let result = match loaded {
            Ok(pool) => {
                let pool = Arc::new(pool);
                *self.current.write().await = Some(Arc::clone(&pool));
                state.last_failure = None;
                Ok(pool)
            }
            Err(e) => {
                state.last_failure = Some(e.duplicate());
                Err(e)
            }
        };
        self.finished.fetch_add(1, Ordering::SeqCst);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;
    use crate::utils::error::PassError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn pool(adjective: &str) -> WordPool {
        WordPool::from_words(vec![adjective.to_string()], vec!["fox".to_string()])
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_in_flight_load() {
        let cache = Arc::new(PoolCache::new());
        let loads = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let loads = Arc::clone(&loads);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_load(|| async move {
                        loads.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok(pool("quick"))
                    })
                    .await
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_slot_empty() {
        let cache = PoolCache::new();
        let result = cache
            .get_or_load(|| async {
                Err(PassError::SourceUnavailable {
                    category: Category::Adjective,
                    message: "offline".to_string(),
                })
            })
            .await;

        assert!(result.is_err());
        assert!(cache.get().await.is_none());

        let loaded = cache.get_or_load(|| async { Ok(pool("lazy")) }).await.unwrap();
        assert_eq!(loaded.entries(Category::Adjective)[0].word, "lazy");
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_pool() {
        let cache = PoolCache::new();
        cache.get_or_load(|| async { Ok(pool("quick")) }).await.unwrap();

        let refreshed = cache
            .refresh(|| async {
                Err(PassError::InsufficientPool {
                    category: Category::Noun,
                    found: 0,
                    minimum: 10,
                })
            })
            .await;
        assert!(refreshed.is_err());

        let current = cache.get().await.unwrap();
        assert_eq!(current.entries(Category::Adjective)[0].word, "quick");

        cache.refresh(|| async { Ok(pool("brave")) }).await.unwrap();
        let current = cache.get().await.unwrap();
        assert_eq!(current.entries(Category::Adjective)[0].word, "brave");
    }

    #[tokio::test]
    async fn test_waiters_share_a_failed_load() {
        let cache = Arc::new(PoolCache::new());
        let loads = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let loads = Arc::clone(&loads);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_load(|| async move {
                        loads.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Err(PassError::SourceUnavailable {
                            category: Category::Noun,
                            message: "timed out".to_string(),
                        })
                    })
                    .await
            }));
        }

        for handle in handles {
            let result = handle.await.unwrap();
            assert!(matches!(result, Err(PassError::SourceUnavailable { .. })));
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(cache.get().await.is_none());

        // 之後的請求會重新載入
        let loaded = cache
            .get_or_load(|| async {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok(pool("calm"))
            })
            .await
            .unwrap();
        assert_eq!(loaded.entries(Category::Adjective)[0].word, "calm");
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }
}
