//! Lookup key type.

use std::fmt;

/// Opaque identifier used to look up a value.
///
/// # Example
///
/// ```
/// use cascade_core::Key;
///
/// let key = Key::new(42);
/// assert_eq!(key.get(), 42);
/// assert_eq!(key.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(i64);

impl Key {
    /// Creates a key from its numeric identity.
    pub const fn new(id: i64) -> Self {
        Key(id)
    }

    /// Returns the numeric identity.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Key {
    fn from(id: i64) -> Self {
        Key(id)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
