// Public API
pub mod moka_store;
pub mod sled_store;

// Re-export commonly used types
pub use moka_store::MokaStore;
pub use sled_store::SledStore;

use purchases::ports::CacheStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::config::Config;
use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Build a store from configuration: file-backed when a data dir is
/// configured, memory-only otherwise.
pub fn store_from_config<P>(config: &Config) -> shared::Result<Arc<dyn CacheStore<P>>>
where
    P: Debug + Send + Sync + Clone + Serialize + DeserializeOwned + 'static,
{
    match &config.data_dir {
        Some(dir) => {
            debug!(data_dir = %dir, "using sled-backed snapshot store");
            let path = Path::new(dir).join("purchases.sled");
            Ok(Arc::new(SledStore::new(path)?))
        }
        None => {
            debug!("using in-memory snapshot store");
            Ok(Arc::new(MokaStore::new_unbounded()))
        }
    }
}
