//! Process-local status cache backed by `DashMap`.
//!
//! Entries carry an absolute expiry computed from the injected clock. Reads
//! treat expired entries as absent and evict them; [`purge_expired`] sweeps
//! the whole map and [`spawn_janitor`] runs that sweep periodically.
//!
//! [`purge_expired`]: InMemoryStatusCache::purge_expired
//! [`spawn_janitor`]: InMemoryStatusCache::spawn_janitor

use std::sync::{Arc, Weak};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use mockable::Clock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::StatusSnapshot;
use crate::domain::ports::{StatusCache, StatusCacheError, StatusCacheKey};

use super::{decode, effective_ttl, encode};

#[derive(Debug, Clone)]
struct Entry {
    payload: String,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// In-process [`StatusCache`] implementation.
pub struct InMemoryStatusCache {
    entries: DashMap<String, Entry>,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl InMemoryStatusCache {
    /// Create an empty cache.
    pub fn new(default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
            clock,
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evict every expired entry, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.utc();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live(now));
        before.saturating_sub(self.entries.len())
    }

    /// Run [`Self::purge_expired`] every `interval` until the cache is
    /// dropped. Intervals below one second are raised to one second.
    pub fn spawn_janitor(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let cache: Weak<Self> = Arc::downgrade(self);
        let period = interval.max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(cache) = cache.upgrade() else {
                    break;
                };
                let evicted = cache.purge_expired();
                if evicted > 0 {
                    debug!(evicted, "purged expired status cache entries");
                }
            }
        })
    }

    fn expiry(&self, ttl: Duration) -> DateTime<Utc> {
        let now = self.clock.utc();
        chrono::Duration::from_std(effective_ttl(ttl, self.default_ttl))
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

#[async_trait]
impl StatusCache for InMemoryStatusCache {
    async fn get(
        &self,
        key: &StatusCacheKey,
    ) -> Result<Option<StatusSnapshot>, StatusCacheError> {
        let now = self.clock.utc();
        // The read guard must be released before evicting from the same shard.
        let lookup = self
            .entries
            .get(key.as_str())
            .map(|entry| entry.is_live(now).then(|| entry.payload.clone()));
        match lookup {
            Some(Some(payload)) => decode(&payload).map(Some),
            Some(None) => {
                self.entries
                    .remove_if(key.as_str(), |_, entry| !entry.is_live(now));
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(
        &self,
        key: &StatusCacheKey,
        snapshot: &StatusSnapshot,
        ttl: Duration,
    ) -> Result<(), StatusCacheError> {
        let entry = Entry {
            payload: encode(snapshot)?,
            expires_at: self.expiry(ttl),
        };
        self.entries.insert(key.as_str().to_owned(), entry);
        Ok(())
    }

    async fn delete(&self, key: &StatusCacheKey) -> Result<(), StatusCacheError> {
        self.entries.remove(key.as_str());
        Ok(())
    }
}
