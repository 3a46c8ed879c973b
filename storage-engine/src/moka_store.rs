use async_trait::async_trait;
use moka::future::Cache;
use purchases::domain::CachedPurchases;
use purchases::ports::CacheStore;
use shared::{Error, Result};
use std::fmt::Debug;

/// Moka-based in-memory snapshot store.
/// Snapshots live only as long as the process.
pub struct MokaStore<P>
where
    P: Debug + Send + Sync + Clone + 'static,
{
    cache: Cache<String, CachedPurchases<P>>,
}

impl<P> MokaStore<P>
where
    P: Debug + Send + Sync + Clone + 'static,
{
    /// Create a new unbounded Moka store
    pub fn new_unbounded() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }

    /// Create a new bounded Moka store with a max entry count
    pub fn new_bounded(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }
}

#[async_trait]
impl<P> CacheStore<P> for MokaStore<P>
where
    P: Debug + Send + Sync + Clone + 'static,
{
    async fn fetch(&self, key: &str) -> Result<CachedPurchases<P>> {
        self.cache
            .get(key)
            .await
            .ok_or_else(|| Error::Fetch(format!("no cache entry for key '{key}'")))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        // Removing an absent entry is a success
        self.cache.remove(key).await;
        Ok(())
    }

    async fn insert(&self, key: &str, cached: CachedPurchases<P>) -> Result<()> {
        self.cache.insert(key.to_string(), cached).await;
        Ok(())
    }
}

impl<P> Debug for MokaStore<P>
where
    P: Debug + Send + Sync + Clone + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaStore")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fake::{Fake, Faker};
    use purchases::domain::Purchase;

    fn mock_snapshot() -> CachedPurchases<Purchase> {
        CachedPurchases::new(Utc::now(), (0..3).map(|_| Faker.fake()).collect())
    }

    #[tokio::test]
    async fn test_moka_store_insert_and_fetch() {
        let store = MokaStore::new_unbounded();
        let cached = mock_snapshot();

        store.insert("purchases", cached.clone()).await.unwrap();

        let fetched = store.fetch("purchases").await.unwrap();
        assert_eq!(fetched, cached);
    }

    #[tokio::test]
    async fn test_moka_store_bounded_insert_and_fetch() {
        let store = MokaStore::new_bounded(8);
        let cached = mock_snapshot();

        store.insert("purchases", cached.clone()).await.unwrap();

        let fetched = store.fetch("purchases").await.unwrap();
        assert_eq!(fetched, cached);
    }

    #[tokio::test]
    async fn test_moka_store_fetch_missing_key() {
        let store: MokaStore<Purchase> = MokaStore::new_unbounded();

        let result = store.fetch("purchases").await;
        assert!(matches!(result.unwrap_err(), Error::Fetch(_)));
    }

    #[tokio::test]
    async fn test_moka_store_insert_overwrites() {
        let store = MokaStore::new_unbounded();
        let first = mock_snapshot();
        let second = mock_snapshot();

        store.insert("purchases", first).await.unwrap();
        store.insert("purchases", second.clone()).await.unwrap();

        let fetched = store.fetch("purchases").await.unwrap();
        assert_eq!(fetched, second);
    }

    #[tokio::test]
    async fn test_moka_store_delete_removes_entry() {
        let store = MokaStore::new_unbounded();
        store.insert("purchases", mock_snapshot()).await.unwrap();

        store.delete("purchases").await.unwrap();

        let result = store.fetch("purchases").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_moka_store_delete_absent_entry_succeeds() {
        let store: MokaStore<Purchase> = MokaStore::new_unbounded();

        assert!(store.delete("purchases").await.is_ok());
    }
}
