use crate::domain::CachedPurchases;
use crate::ports::CacheStore;
use chrono::{DateTime, Utc};
use shared::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Cache gateway for the purchases collection.
///
/// Reads serve the stored snapshot only while it is fresh; writes replace
/// the snapshot with a delete-then-insert sequence against the store.
#[derive(Clone)]
pub struct LocalPurchases<P> {
    store: Arc<dyn CacheStore<P>>,
    timestamp: DateTime<Utc>,
}

impl<P> LocalPurchases<P>
where
    P: Send + Sync + 'static,
{
    /// The single key this gateway uses against the store.
    pub const KEY: &'static str = "purchases";

    /// `timestamp` is the wall-clock "now" used by every freshness decision
    /// and stamped on every saved snapshot. It is injected here so the
    /// decision never reads a live clock.
    pub fn new(store: Arc<dyn CacheStore<P>>, timestamp: DateTime<Utc>) -> Self {
        Self { store, timestamp }
    }

    /// Returns the cached purchases, or an empty list when no fresh
    /// snapshot is available. Stale and unreadable entries are evicted on
    /// the way out; an eviction failure never fails the read.
    pub async fn load_all(&self) -> Vec<P> {
        match self.store.fetch(Self::KEY).await {
            Ok(cached) if cached.is_fresh(self.timestamp) => cached.value,
            Ok(_) => {
                debug!(key = Self::KEY, "cached snapshot is stale, evicting");
                self.evict().await;
                Vec::new()
            }
            Err(err) => {
                debug!(key = Self::KEY, %err, "cache fetch failed, evicting");
                self.evict().await;
                Vec::new()
            }
        }
    }

    /// Replaces the cached snapshot with `purchases`, stamped with the
    /// construction-time timestamp. Delete must fully succeed before insert
    /// is attempted; a failure in either phase is returned unchanged. After
    /// a failed insert the cache is left empty, not rolled back.
    pub async fn save(&self, purchases: Vec<P>) -> Result<()> {
        self.store.delete(Self::KEY).await?;
        self.store
            .insert(Self::KEY, CachedPurchases::new(self.timestamp, purchases))
            .await
    }

    /// Best-effort removal used by the read path.
    async fn evict(&self) {
        if let Err(err) = self.store.delete(Self::KEY).await {
            warn!(key = Self::KEY, %err, "failed to evict cache entry");
        }
    }
}
