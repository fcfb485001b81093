//! One simulated backend round-trip, raced against the call context.

use cascade_core::{CancelCause, Context, DeadlineExceeded, Outcome, QueryError, TierResult};
use tokio::sync::oneshot;
use tokio::time::Duration;
use tracing::trace;

/// Tuning-table row resolved for one key: how long the simulated round-trip
/// takes and what it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryPlan {
    pub delay: Option<Duration>,
    pub outcome: Outcome,
}

enum Race {
    Signalled(CancelCause),
    Ready(Result<Outcome, oneshot::error::RecvError>),
}

/// Runs one simulated backend round-trip.
///
/// The producer is spawned as its own task and reports through a single-slot
/// channel, so it can always complete its send and exit even when the caller
/// stopped listening after a timeout. The producer holds the guard of a
/// sub-context derived from `ctx`, releasing it when the round-trip ends on
/// every path.
///
/// Deadline expiry aborts the wait immediately. Explicit cancellation does
/// not: the call still waits for the simulated result. The asymmetry is
/// intentional and part of the contract, not an oversight.
pub(crate) async fn run(ctx: &Context, label: &str, plan: QueryPlan) -> TierResult {
    let (_sub, guard) = ctx.with_cancel();
    let (outcome_tx, mut outcome_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _guard = guard; // releases the sub-context when the round-trip ends
        if let Some(delay) = plan.delay {
            tokio::time::sleep(delay).await;
        }
        // the receiver may be gone after a timeout; a single-slot send
        // completes either way
        let _ = outcome_tx.send(plan.outcome);
    });

    let race = tokio::select! {
        cause = ctx.done() => Race::Signalled(cause),
        outcome = &mut outcome_rx => Race::Ready(outcome),
    };
    match race {
        Race::Signalled(CancelCause::Expired) => {
            trace!(label, "deadline exceeded");
            Err(QueryError::Timeout(DeadlineExceeded))
        }
        Race::Signalled(CancelCause::Cancelled) => {
            // soft signal: the round-trip still runs to completion
            trace!(label, "cancelled, awaiting the in-flight outcome");
            deliver(outcome_rx.await)
        }
        Race::Ready(outcome) => deliver(outcome),
    }
}

fn deliver(outcome: Result<Outcome, oneshot::error::RecvError>) -> TierResult {
    match outcome {
        Ok(outcome) => outcome.into_result(),
        Err(_) => Err(QueryError::Dropped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::{FailureKind, TierOutcome, Value};
    use tokio::time::Instant;

    fn found(value: &str) -> Outcome {
        Outcome::Found(Value::new(value))
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_outcome_beats_the_deadline() {
        let (ctx, _guard) = Context::background().with_timeout(Duration::from_secs(5));
        let plan = QueryPlan {
            delay: None,
            outcome: found("v"),
        };
        let result = run(&ctx, "test", plan).await;
        assert_eq!(result, Ok(TierOutcome::Hit(Value::new("v"))));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_beats_a_delayed_outcome() {
        let (ctx, _guard) = Context::background().with_timeout(Duration::from_millis(500));
        let plan = QueryPlan {
            delay: Some(Duration::from_secs(1)),
            outcome: found("late"),
        };
        let started = Instant::now();
        let result = run(&ctx, "test", plan).await;
        assert_eq!(result, Err(QueryError::Timeout(DeadlineExceeded)));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_producer_still_exits() {
        let metrics = tokio::runtime::Handle::current().metrics();
        let baseline = metrics.num_alive_tasks();

        let (ctx, _guard) = Context::background().with_timeout(Duration::from_millis(100));
        let plan = QueryPlan {
            delay: Some(Duration::from_secs(1)),
            outcome: found("late"),
        };
        let result = run(&ctx, "test", plan).await;
        assert!(result.is_err());

        // let the simulated delay elapse; the producer completes its send
        // into the single-slot channel and exits without a listener
        tokio::time::sleep(Duration::from_secs(2)).await;
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }
        assert_eq!(metrics.num_alive_tasks(), baseline);
    }

    #[tokio::test(start_paused = true)]
    async fn plain_cancellation_waits_for_the_outcome() {
        let (ctx, guard) = Context::background().with_cancel();
        guard.cancel();
        let plan = QueryPlan {
            delay: Some(Duration::from_secs(1)),
            outcome: found("eventual"),
        };
        let started = Instant::now();
        let result = run(&ctx, "test", plan).await;
        assert_eq!(result, Ok(TierOutcome::Hit(Value::new("eventual"))));
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn failure_keeps_the_partial_value() {
        let ctx = Context::background();
        let plan = QueryPlan {
            delay: None,
            outcome: Outcome::Failed {
                kind: FailureKind::NotFound,
                value: Some(Value::new("partial")),
            },
        };
        let result = run(&ctx, "test", plan).await;
        assert_eq!(
            result,
            Err(QueryError::Backend {
                kind: FailureKind::NotFound,
                value: Some(Value::new("partial")),
            })
        );
    }
}
