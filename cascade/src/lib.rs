#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Error types for lookup operations.
///
/// Defines [`LookupError`], which covers:
/// - cache-tier failures (lookup aborted, fail-fast)
/// - store-tier failures (partial value preserved)
/// - authoritative absence ([`LookupError::NotFound`])
pub mod error;

/// Two-tier read-through orchestration.
///
/// Provides [`Lookup`] — cache tier strictly first, store tier on a clean
/// miss — and the typestate [`LookupBuilder`] used to inject tier
/// implementations.
pub mod lookup;

pub use error::LookupError;
pub use lookup::{Lookup, LookupBuilder, NotSet};

pub use cascade_core::{
    CancelCause, CancelGuard, Context, DeadlineExceeded, FailureKind, Key, Outcome, QueryError,
    Tier, TierOutcome, TierResult, Value,
};

/// The `cascade` prelude.
///
/// Provides convenient access to the most commonly used types:
///
/// ```rust
/// use cascade::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Context, Key, Lookup, LookupError, Tier, Value};
}
