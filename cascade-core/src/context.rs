//! Per-call deadline/cancellation token.
//!
//! A [`Context`] bounds one lookup call in time. It carries two independent
//! trigger conditions — elapsed-time expiry and explicit cancellation — and
//! [`Context::done`] reports which one fired as a [`CancelCause`]. Callers
//! that need to distinguish "the time budget ran out" from "the caller
//! changed its mind" (tier queries do) branch on the cause.
//!
//! Contexts form a derivation chain: a child observes every ancestor's
//! cancellation signal and inherits the nearest deadline in the chain.
//! Derivation hands back a [`CancelGuard`]; dropping the guard cancels the
//! derived context, so holding it across an `.await` is the way to keep a
//! call alive.

use std::future::pending;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::watch;
use tokio::time::{Duration, Instant, sleep_until};

/// Which of the two independent triggers stopped a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    /// The per-call time budget ran out.
    Expired,
    /// The caller cancelled explicitly, or a [`CancelGuard`] was dropped.
    Cancelled,
}

/// Per-call deadline/cancellation token.
///
/// Cloning a context is cheap; all clones observe the same triggers.
///
/// # Example
///
/// ```no_run
/// use cascade_core::{CancelCause, Context};
/// use std::time::Duration;
///
/// # async fn demo() {
/// let (ctx, _guard) = Context::background().with_timeout(Duration::from_millis(500));
/// match ctx.done().await {
///     CancelCause::Expired => { /* time budget exhausted */ }
///     CancelCause::Cancelled => { /* caller walked away */ }
/// }
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    watchers: Vec<watch::Receiver<bool>>,
}

impl Context {
    /// Root context: no deadline, never cancelled.
    pub fn background() -> Self {
        Context::default()
    }

    /// Derives a context that expires `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> (Self, CancelGuard) {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derives a context that expires at `deadline`.
    ///
    /// If an ancestor carries an earlier deadline, that one stays in effect.
    pub fn with_deadline(&self, deadline: Instant) -> (Self, CancelGuard) {
        let (mut child, guard) = self.with_cancel();
        child.deadline = Some(match self.deadline {
            Some(inherited) => inherited.min(deadline),
            None => deadline,
        });
        (child, guard)
    }

    /// Derives a cancellable context that keeps the inherited deadline.
    pub fn with_cancel(&self) -> (Self, CancelGuard) {
        let (tx, rx) = watch::channel(false);
        let mut watchers = self.watchers.clone();
        watchers.push(rx);
        let child = Context {
            deadline: self.deadline,
            watchers,
        };
        (child, CancelGuard { tx })
    }

    /// The effective deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Resolves once either trigger fires, reporting which one.
    ///
    /// Never resolves on a [`background`](Context::background) context. Both
    /// triggers are one-shot: once fired they stay fired, so a later call
    /// resolves immediately. If both have already fired the reported cause is
    /// unspecified.
    pub async fn done(&self) -> CancelCause {
        let expiry = async {
            match self.deadline {
                Some(at) => sleep_until(at).await,
                None => pending().await,
            }
        };
        let cancelled = async {
            if self.watchers.is_empty() {
                pending::<()>().await;
            }
            let mut fired: FuturesUnordered<_> = self
                .watchers
                .iter()
                .cloned()
                .map(|mut rx| async move {
                    // a dropped guard reads the same as an explicit cancel
                    let _ = rx.wait_for(|cancelled| *cancelled).await;
                })
                .collect();
            fired.next().await;
        };
        tokio::select! {
            _ = expiry => CancelCause::Expired,
            _ = cancelled => CancelCause::Cancelled,
        }
    }
}

/// Owner side of a derived [`Context`].
///
/// Fires the cancellation trigger explicitly via [`cancel`](CancelGuard::cancel)
/// or implicitly when dropped.
#[derive(Debug)]
pub struct CancelGuard {
    tx: watch::Sender<bool>,
}

impl CancelGuard {
    /// Fires the cancellation trigger. Idempotent.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(true);
    }
}
