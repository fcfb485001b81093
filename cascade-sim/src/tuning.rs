//! Key-range tuning tables for the simulated tiers.

use cascade_core::{FailureKind, Key, Outcome, Value};
use tokio::time::Duration;

use crate::task::QueryPlan;

/// Default simulated time unit: one second per delayed round-trip.
pub const DEFAULT_UNIT: Duration = Duration::from_secs(1);

/// Renders the mock payload a tier returns for a key.
pub(crate) fn render(source: &str, key: Key) -> Value {
    Value::new(format!("{source} record {key}"))
}

/// Cache tier behavior: keys 1–5 hit immediately, 6–7 hit after one unit,
/// 8–10 miss after one unit, everything else misses immediately.
pub(crate) fn cache_plan(key: Key, unit: Duration) -> QueryPlan {
    match key.get() {
        1..=5 => QueryPlan {
            delay: None,
            outcome: Outcome::Found(render("cache", key)),
        },
        6..=7 => QueryPlan {
            delay: Some(unit),
            outcome: Outcome::Found(render("cache", key)),
        },
        8..=10 => QueryPlan {
            delay: Some(unit),
            outcome: Outcome::NotFound,
        },
        _ => QueryPlan {
            delay: None,
            outcome: Outcome::NotFound,
        },
    }
}

/// Store tier behavior: keys 1–5 hit immediately, 6–8 hit after one unit,
/// 9–10 fail with "not found" after one unit (the rendered value is echoed
/// alongside the failure), everything else fails immediately with no value.
pub(crate) fn store_plan(key: Key, unit: Duration) -> QueryPlan {
    match key.get() {
        1..=5 => QueryPlan {
            delay: None,
            outcome: Outcome::Found(render("store", key)),
        },
        6..=8 => QueryPlan {
            delay: Some(unit),
            outcome: Outcome::Found(render("store", key)),
        },
        9..=10 => QueryPlan {
            delay: Some(unit),
            outcome: Outcome::Failed {
                kind: FailureKind::NotFound,
                value: Some(render("store", key)),
            },
        },
        _ => QueryPlan {
            delay: None,
            outcome: Outcome::Failed {
                kind: FailureKind::NotFound,
                value: None,
            },
        },
    }
}
