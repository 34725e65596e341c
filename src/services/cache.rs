use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-memory cache for raw store reads
///
/// Values are stored as JSON bytes with a fixed TTL. Only viewer-independent
/// data (raw profile rows) goes in here, never compatibility scores.
pub struct CacheManager {
    cache: moka::future::Cache<String, Vec<u8>>,
}

impl CacheManager {
    /// Create a new cache manager
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Get a value from cache
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        match self.cache.get(key).await {
            Some(bytes) => {
                tracing::trace!("Cache hit: {}", key);
                Ok(serde_json::from_slice(&bytes)?)
            }
            None => {
                tracing::trace!("Cache miss: {}", key);
                Err(CacheError::CacheMiss(key.to_string()))
            }
        }
    }

    /// Set a value in cache
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.cache.insert(key.to_string(), bytes).await;

        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    /// Delete a value
    pub async fn delete(&self, key: &str) {
        self.cache.invalidate(key).await;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for the full profile list
    pub fn profiles() -> String {
        "profiles:all".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = CacheManager::new(100, 60);

        let key = "test_key";
        let value = vec!["a".to_string(), "b".to_string()];

        // Set and get
        cache.set(key, &value).await.unwrap();
        let result: Vec<String> = cache.get(key).await.unwrap();
        assert_eq!(result, value);

        // Delete
        cache.delete(key).await;
        assert!(matches!(cache.get::<Vec<String>>(key).await, Err(CacheError::CacheMiss(_))));
    }

    #[tokio::test]
    async fn test_cache_stats_count_entries() {
        let cache = CacheManager::new(100, 60);
        assert_eq!(cache.stats().entries, 0);

        cache.set("a", &1u8).await.unwrap();
        cache.set("b", &2u8).await.unwrap();
        cache.cache.run_pending_tasks().await;

        assert_eq!(cache.stats().entries, 2);
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::profiles(), "profiles:all");
    }
}
