//! The tier capability trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Context, Key, QueryError, Value};

/// Result of one tier query.
pub type TierResult = Result<TierOutcome, QueryError>;

/// Successful tier query outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierOutcome {
    /// The tier holds a value for the key.
    Hit(Value),
    /// Clean miss — consult the next tier.
    Miss,
}

/// A queryable lookup tier.
///
/// This is the composition seam: anything honoring the contract can stand in
/// for the cache or store tier. An `Ok(TierOutcome::Miss)` is a clean miss
/// and invites the next tier; an `Err(_)` means the tier itself failed and
/// must propagate, not be treated as a miss.
///
/// Implementations are expected to race their round-trip against `ctx` and
/// surface [`QueryError::Timeout`] when the deadline wins.
#[async_trait]
pub trait Tier: Send + Sync {
    /// Queries this tier for `key`, bounded by `ctx`.
    async fn query(&self, ctx: &Context, key: Key) -> TierResult;

    /// Label identifying this tier in spans and events.
    fn label(&self) -> &str {
        "tier"
    }
}

#[async_trait]
impl Tier for Box<dyn Tier> {
    async fn query(&self, ctx: &Context, key: Key) -> TierResult {
        (**self).query(ctx, key).await
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

#[async_trait]
impl Tier for Arc<dyn Tier> {
    async fn query(&self, ctx: &Context, key: Key) -> TierResult {
        (**self).query(ctx, key).await
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}
