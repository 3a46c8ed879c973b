use async_trait::async_trait;
use purchases::domain::CachedPurchases;
use purchases::ports::CacheStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{Error, Result};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::path::Path;

/// Sled-based snapshot store, snapshots encoded as JSON.
/// Every write is flushed so snapshots survive a crash.
pub struct SledStore<P> {
    db: sled::Db,
    _records: PhantomData<fn() -> P>,
}

impl<P> SledStore<P> {
    /// Open (or create) the database at `path`.
    /// Creates the parent directory if it doesn't exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Internal(format!("failed to create directory: {e}")))?;
        }

        let db = sled::open(path)
            .map_err(|e| Error::Internal(format!("failed to open sled database: {e}")))?;

        Ok(Self {
            db,
            _records: PhantomData,
        })
    }
}

#[async_trait]
impl<P> CacheStore<P> for SledStore<P>
where
    P: Debug + Send + Sync + Clone + Serialize + DeserializeOwned + 'static,
{
    async fn fetch(&self, key: &str) -> Result<CachedPurchases<P>> {
        let bytes = self
            .db
            .get(key.as_bytes())
            .map_err(|e| Error::Fetch(format!("failed to read key '{key}': {e}")))?
            .ok_or_else(|| Error::Fetch(format!("no cache entry for key '{key}'")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Fetch(format!("failed to decode snapshot for key '{key}': {e}")))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        // Removing an absent entry is a success
        self.db
            .remove(key.as_bytes())
            .map_err(|e| Error::Delete(format!("failed to delete key '{key}': {e}")))?;

        self.db
            .flush_async()
            .await
            .map_err(|e| Error::Delete(format!("failed to flush database: {e}")))?;

        Ok(())
    }

    async fn insert(&self, key: &str, cached: CachedPurchases<P>) -> Result<()> {
        let value = serde_json::to_vec(&cached)
            .map_err(|e| Error::Insert(format!("failed to encode snapshot for key '{key}': {e}")))?;

        self.db
            .insert(key.as_bytes(), value)
            .map_err(|e| Error::Insert(format!("failed to write key '{key}': {e}")))?;

        self.db
            .flush_async()
            .await
            .map_err(|e| Error::Insert(format!("failed to flush database: {e}")))?;

        Ok(())
    }
}
