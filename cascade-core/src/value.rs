//! Lookup value type.

use std::fmt;

use smol_str::SmolStr;

/// Opaque string-like payload returned by a successful lookup.
///
/// Backed by [`SmolStr`], so short payloads are stored inline and cloning is
/// cheap regardless of length.
///
/// # Example
///
/// ```
/// use cascade_core::Value;
///
/// let value = Value::new("cache record 3");
/// assert_eq!(value.as_str(), "cache record 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value(SmolStr);

impl Value {
    /// Creates a value from any string-like input.
    pub fn new(value: impl Into<SmolStr>) -> Self {
        Value(value.into())
    }

    /// Returns the payload as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::new(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::new(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
