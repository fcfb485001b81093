//! Simulated cache and store tiers.

use async_trait::async_trait;
use cascade_core::{Context, Key, Tier, TierResult};
use tokio::time::Duration;

use crate::task;
use crate::tuning;

/// Simulated cache tier: usually fast, sometimes slow or missing.
///
/// Stands in for a fast, possibly-stale first backend such as an in-memory
/// or network cache. Behavior is driven by a fixed key-range tuning table;
/// the time unit for delayed rows is configurable so tests can compress time.
#[derive(Debug, Clone)]
pub struct SimCache {
    unit: Duration,
}

impl SimCache {
    /// Cache tier with the default one-second time unit.
    pub fn new() -> Self {
        Self::with_unit(tuning::DEFAULT_UNIT)
    }

    /// Cache tier with a custom time unit for delayed rows.
    pub fn with_unit(unit: Duration) -> Self {
        SimCache { unit }
    }
}

impl Default for SimCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tier for SimCache {
    #[tracing::instrument(skip(self, ctx), level = "trace")]
    async fn query(&self, ctx: &Context, key: Key) -> TierResult {
        task::run(ctx, self.label(), tuning::cache_plan(key, self.unit)).await
    }

    fn label(&self) -> &str {
        "sim-cache"
    }
}

/// Simulated store tier: authoritative, slower, and failure-prone.
///
/// Stands in for the source-of-record consulted after a cache miss. Unlike
/// the cache, a negative answer here is reported as a backend failure — for
/// some keys with the rendered value echoed alongside it.
#[derive(Debug, Clone)]
pub struct SimStore {
    unit: Duration,
}

impl SimStore {
    /// Store tier with the default one-second time unit.
    pub fn new() -> Self {
        Self::with_unit(tuning::DEFAULT_UNIT)
    }

    /// Store tier with a custom time unit for delayed rows.
    pub fn with_unit(unit: Duration) -> Self {
        SimStore { unit }
    }
}

impl Default for SimStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tier for SimStore {
    #[tracing::instrument(skip(self, ctx), level = "trace")]
    async fn query(&self, ctx: &Context, key: Key) -> TierResult {
        task::run(ctx, self.label(), tuning::store_plan(key, self.unit)).await
    }

    fn label(&self) -> &str {
        "sim-store"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::{QueryError, TierOutcome, Value};

    #[tokio::test(start_paused = true)]
    async fn cache_hits_its_fast_range() {
        let cache = SimCache::new();
        let (ctx, _guard) = Context::background().with_timeout(Duration::from_millis(100));
        let outcome = cache.query(&ctx, Key::new(2)).await.unwrap();
        assert_eq!(outcome, TierOutcome::Hit(Value::new("cache record 2")));
    }

    #[tokio::test(start_paused = true)]
    async fn cache_misses_cleanly_after_its_delay() {
        let cache = SimCache::new();
        let (ctx, _guard) = Context::background().with_timeout(Duration::from_secs(5));
        let outcome = cache.query(&ctx, Key::new(10)).await.unwrap();
        assert_eq!(outcome, TierOutcome::Miss);
    }

    #[tokio::test(start_paused = true)]
    async fn store_failure_echoes_the_value() {
        let store = SimStore::new();
        let (ctx, _guard) = Context::background().with_timeout(Duration::from_secs(5));
        let err = store.query(&ctx, Key::new(10)).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.partial_value(), Some(&Value::new("store record 10")));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_tier_times_out_under_a_short_deadline() {
        let store = SimStore::with_unit(Duration::from_secs(1));
        let (ctx, _guard) = Context::background().with_timeout(Duration::from_millis(200));
        let err = store.query(&ctx, Key::new(7)).await.unwrap_err();
        assert!(matches!(err, QueryError::Timeout(_)));
    }
}
