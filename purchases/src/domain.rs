use chrono::{DateTime, Duration, Utc};
use fake::Dummy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum age in days a cached snapshot stays servable.
pub const MAX_AGE_DAYS: i64 = 3;

/// A single purchase as the outer layers hand it to the gateway.
/// The cache core never inspects these fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Dummy)]
pub struct Purchase {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    #[dummy(faker = "1.0..10_000.0")]
    pub value: f64,
}

/// One stored snapshot: the records plus the moment they were written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CachedPurchases<P> {
    pub timestamp: DateTime<Utc>,
    pub value: Vec<P>,
}

impl<P> CachedPurchases<P> {
    pub fn new(timestamp: DateTime<Utc>, value: Vec<P>) -> Self {
        Self { timestamp, value }
    }

    /// A snapshot is servable strictly under `MAX_AGE_DAYS` of age.
    /// A snapshot exactly `MAX_AGE_DAYS` old is already stale.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.timestamp) < Duration::days(MAX_AGE_DAYS)
    }
}
