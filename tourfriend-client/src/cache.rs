use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// The two listings the client knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKey {
    Destinations,
    Packages,
}

impl ListingKey {
    pub fn path(&self) -> &'static str {
        match self {
            ListingKey::Destinations => "/api/destinations",
            ListingKey::Packages => "/api/packages/top-selling",
        }
    }
}

struct CacheEntry {
    fetched_at: Instant,
    payload: Value,
}

/// Successful listing payloads keyed by listing. Failures are never stored.
pub struct QueryCache {
    entries: RwLock<HashMap<ListingKey, CacheEntry>>,
    stale_time: Duration,
    cache_time: Duration,
}

impl QueryCache {
    pub fn new(stale_time: Duration, cache_time: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stale_time,
            cache_time,
        }
    }

    /// Payload for `key` if it is younger than both the stale time and the
    /// cache time. An entry past the cache time is evicted here.
    pub async fn fresh(&self, key: ListingKey) -> Option<Value> {
        let mut entries = self.entries.write().await;
        let age = entries.get(&key)?.fetched_at.elapsed();
        if age >= self.cache_time {
            entries.remove(&key);
            return None;
        }
        if age >= self.stale_time {
            return None;
        }
        entries.get(&key).map(|entry| entry.payload.clone())
    }

    pub async fn store(&self, key: ListingKey, payload: Value) {
        let mut entries = self.entries.write().await;
        let cache_time = self.cache_time;
        entries.retain(|_, entry| entry.fetched_at.elapsed() < cache_time);
        entries.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                payload,
            },
        );
    }

    pub async fn invalidate(&self, key: ListingKey) {
        self.entries.write().await.remove(&key);
    }

    /// Number of entries still inside the cache time.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries
            .values()
            .filter(|entry| entry.fetched_at.elapsed() < self.cache_time)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
