//! Error types for tier queries.

use thiserror::Error;

use crate::Value;

/// Signal that a per-call time budget was exhausted.
///
/// Kept as a standalone type so timeouts remain identity-checkable through
/// [`std::error::Error::source`] chains after being wrapped by
/// [`QueryError::Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deadline exceeded")]
pub struct DeadlineExceeded;

/// Failure classes a backend can report.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// The backend answered authoritatively that no record exists.
    #[error("record not found")]
    NotFound,
}

/// Error produced by a single tier query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The deadline elapsed while awaiting the backend.
    #[error("query timeout")]
    Timeout(#[from] DeadlineExceeded),
    /// The backend itself failed. Some backends echo a partial value
    /// alongside their failure; it is preserved for the caller.
    #[error("backend failure: {kind}")]
    Backend {
        /// Failure class reported by the backend.
        kind: FailureKind,
        /// Partial value echoed alongside the failure, if any.
        value: Option<Value>,
    },
    /// The backend stopped without producing an outcome.
    #[error("backend dropped the query")]
    Dropped,
}

impl QueryError {
    /// True when the query lost the race against the call deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QueryError::Timeout(_))
    }

    /// True when the backend reported authoritative absence.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QueryError::Backend {
                kind: FailureKind::NotFound,
                ..
            }
        )
    }

    /// Value the backend echoed alongside the failure, if any.
    pub fn partial_value(&self) -> Option<&Value> {
        match self {
            QueryError::Backend { value, .. } => value.as_ref(),
            _ => None,
        }
    }
}
