//! Tagged result of one backend attempt.

use crate::error::QueryError;
use crate::tier::TierOutcome;
use crate::{FailureKind, Value};

/// Tagged result of one simulated backend attempt.
///
/// Every backend query produces exactly one `Outcome` before its background
/// work terminates, whichever way the race with the call deadline goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The backend holds a value for the key.
    Found(Value),
    /// Clean miss; the next tier should be consulted.
    NotFound,
    /// The backend failed. Distinct from [`Outcome::NotFound`]: a failure is
    /// a statement about the backend, a clean miss is a statement about the
    /// key.
    Failed {
        /// Failure class reported by the backend.
        kind: FailureKind,
        /// Partial value echoed alongside the failure, if any.
        value: Option<Value>,
    },
}

impl Outcome {
    /// Maps this outcome onto the tier query contract.
    pub fn into_result(self) -> Result<TierOutcome, QueryError> {
        match self {
            Outcome::Found(value) => Ok(TierOutcome::Hit(value)),
            Outcome::NotFound => Ok(TierOutcome::Miss),
            Outcome::Failed { kind, value } => Err(QueryError::Backend { kind, value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_becomes_hit() {
        let outcome = Outcome::Found(Value::new("v"));
        assert_eq!(outcome.into_result(), Ok(TierOutcome::Hit(Value::new("v"))));
    }

    #[test]
    fn not_found_becomes_clean_miss() {
        assert_eq!(Outcome::NotFound.into_result(), Ok(TierOutcome::Miss));
    }

    #[test]
    fn failure_becomes_backend_error() {
        let outcome = Outcome::Failed {
            kind: FailureKind::NotFound,
            value: None,
        };
        assert_eq!(
            outcome.into_result(),
            Err(QueryError::Backend {
                kind: FailureKind::NotFound,
                value: None,
            })
        );
    }
}
