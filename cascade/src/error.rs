//! Error types for lookup operations.

use cascade_core::{Key, QueryError, Value};
use thiserror::Error;

/// Caller-facing error for [`Lookup::lookup`](crate::Lookup::lookup).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The cache tier failed. The lookup is aborted without consulting the
    /// store — fail-fast, not fallback — and the tier's error is preserved
    /// as the source.
    #[error("cache query failed")]
    Cache(#[source] QueryError),
    /// The store tier failed. A partial value the backend echoed alongside
    /// its failure stays reachable through
    /// [`partial_value`](Self::partial_value).
    #[error("store query failed")]
    Store(#[source] QueryError),
    /// Both tiers answered, and neither holds a record for the key.
    #[error("no record found for key {0}")]
    NotFound(Key),
}

impl LookupError {
    /// True when either tier lost the race against the call deadline.
    pub fn is_timeout(&self) -> bool {
        match self {
            LookupError::Cache(source) | LookupError::Store(source) => source.is_timeout(),
            LookupError::NotFound(_) => false,
        }
    }

    /// True for authoritative absence: a synthesized clean miss or a
    /// backend-reported "not found" failure.
    pub fn is_not_found(&self) -> bool {
        match self {
            LookupError::NotFound(_) => true,
            LookupError::Cache(source) | LookupError::Store(source) => source.is_not_found(),
        }
    }

    /// Value the failing store tier echoed alongside its error, if any.
    pub fn partial_value(&self) -> Option<&Value> {
        match self {
            LookupError::Store(source) => source.partial_value(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::{DeadlineExceeded, FailureKind};

    #[test]
    fn timeout_is_reported_from_either_tier() {
        assert!(LookupError::Cache(QueryError::Timeout(DeadlineExceeded)).is_timeout());
        assert!(LookupError::Store(QueryError::Timeout(DeadlineExceeded)).is_timeout());
        assert!(!LookupError::NotFound(Key::new(1)).is_timeout());
    }

    #[test]
    fn not_found_covers_clean_miss_and_backend_failure() {
        assert!(LookupError::NotFound(Key::new(11)).is_not_found());
        let failure = LookupError::Store(QueryError::Backend {
            kind: FailureKind::NotFound,
            value: None,
        });
        assert!(failure.is_not_found());
        assert!(!failure.is_timeout());
    }

    #[test]
    fn partial_value_only_surfaces_from_the_store() {
        let err = LookupError::Store(QueryError::Backend {
            kind: FailureKind::NotFound,
            value: Some(Value::new("echoed")),
        });
        assert_eq!(err.partial_value(), Some(&Value::new("echoed")));

        let err = LookupError::Cache(QueryError::Backend {
            kind: FailureKind::NotFound,
            value: Some(Value::new("echoed")),
        });
        assert_eq!(err.partial_value(), None);
    }
}
