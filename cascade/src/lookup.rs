//! Two-tier read-through lookup orchestration.

use cascade_core::{Context, Key, Tier, TierOutcome, Value};
use tracing::{trace, warn};

use crate::error::LookupError;

/// Two-tier read-through lookup.
///
/// Queries the cache tier first; on a clean miss falls through to the store
/// tier. Within one call the tiers are strictly sequential — the store is
/// never raced against the cache.
///
/// Error policy:
/// - a cache-tier error aborts the lookup without consulting the store;
/// - a store-tier error propagates with any partial value intact;
/// - a clean miss in both tiers becomes [`LookupError::NotFound`].
#[derive(Debug, Clone)]
pub struct Lookup<C, S> {
    cache: C,
    store: S,
}

/// Marker type for builder slots that have not been set yet.
///
/// When `NotSet` shows up in a compiler error, the corresponding
/// [`LookupBuilder`] method has not been called.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotSet;

impl Lookup<NotSet, NotSet> {
    /// Creates a new [`LookupBuilder`].
    pub fn builder() -> LookupBuilder<NotSet, NotSet> {
        LookupBuilder::new()
    }
}

impl<C, S> Lookup<C, S>
where
    C: Tier,
    S: Tier,
{
    /// Composes a lookup directly from two tiers.
    pub fn new(cache: C, store: S) -> Self {
        Lookup { cache, store }
    }

    /// Resolves `key` through the tiers, bounded by `ctx`.
    #[tracing::instrument(skip(self, ctx), level = "debug")]
    pub async fn lookup(&self, ctx: &Context, key: Key) -> Result<Value, LookupError> {
        match self.cache.query(ctx, key).await {
            Ok(TierOutcome::Hit(value)) => {
                trace!(tier = self.cache.label(), "hit");
                return Ok(value);
            }
            Ok(TierOutcome::Miss) => {
                trace!(tier = self.cache.label(), "miss, falling through");
            }
            Err(source) => {
                // the store is not a fallback for a broken cache
                warn!(tier = self.cache.label(), error = %source, "tier failed");
                return Err(LookupError::Cache(source));
            }
        }

        match self.store.query(ctx, key).await {
            Ok(TierOutcome::Hit(value)) => {
                trace!(tier = self.store.label(), "hit");
                Ok(value)
            }
            Ok(TierOutcome::Miss) => {
                trace!(tier = self.store.label(), "clean miss");
                Err(LookupError::NotFound(key))
            }
            Err(source) => {
                warn!(tier = self.store.label(), error = %source, "tier failed");
                Err(LookupError::Store(source))
            }
        }
    }
}

/// Builder for [`Lookup`].
///
/// Both tiers must be provided before [`build`](LookupBuilder::build) becomes
/// available; any [`Tier`] implementation can be substituted for either slot.
#[derive(Debug)]
pub struct LookupBuilder<C, S> {
    cache: C,
    store: S,
}

impl LookupBuilder<NotSet, NotSet> {
    /// Creates a builder with no tiers set.
    pub fn new() -> Self {
        LookupBuilder {
            cache: NotSet,
            store: NotSet,
        }
    }
}

impl Default for LookupBuilder<NotSet, NotSet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, S> LookupBuilder<C, S> {
    /// Sets the cache tier.
    pub fn cache<NewC>(self, cache: NewC) -> LookupBuilder<NewC, S> {
        LookupBuilder {
            cache,
            store: self.store,
        }
    }

    /// Sets the store tier.
    pub fn store<NewS>(self, store: NewS) -> LookupBuilder<C, NewS> {
        LookupBuilder {
            cache: self.cache,
            store,
        }
    }
}

impl<C, S> LookupBuilder<C, S>
where
    C: Tier,
    S: Tier,
{
    /// Builds the [`Lookup`].
    pub fn build(self) -> Lookup<C, S> {
        Lookup {
            cache: self.cache,
            store: self.store,
        }
    }
}
