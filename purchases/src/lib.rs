// Public API
pub mod domain;
pub mod ports;
pub mod usecases;

// Re-export commonly used types
pub use domain::{CachedPurchases, MAX_AGE_DAYS, Purchase};
pub use ports::CacheStore;
pub use usecases::LocalPurchases;
