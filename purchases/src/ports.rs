use crate::domain::CachedPurchases;
use async_trait::async_trait;
use shared::Result;

// Ports are the pluggable extension points for underlying storage backends

/// Port for snapshot storage (e.g. Moka, Sled).
///
/// The store guarantees nothing about ordering or atomicity across the
/// three operations; callers sequence them.
#[async_trait]
pub trait CacheStore<P>: Send + Sync + 'static {
    /// Returns the stored snapshot, or `Error::Fetch` when no entry
    /// exists or the backend cannot read it.
    async fn fetch(&self, key: &str) -> Result<CachedPurchases<P>>;

    /// Removes the entry. Removing an absent entry is a success.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Writes the snapshot, replacing any existing entry.
    async fn insert(&self, key: &str, cached: CachedPurchases<P>) -> Result<()>;
}
