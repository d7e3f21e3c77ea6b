//! Core type definitions for NestKV.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A stored value.
///
/// Values are opaque tokens compared by equality. An empty value is
/// treated as "no value": binding a key to it removes the binding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    /// Creates a value from anything string-like.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this value is empty-equivalent (absent).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the value, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl Borrow<str> for Value {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn display_is_raw_token() {
        let v = Value::new("42");
        assert_eq!(format!("{v}"), "42");
    }

    #[test]
    fn empty_value() {
        assert!(Value::default().is_empty());
        assert!(Value::from("").is_empty());
        assert!(!Value::from("x").is_empty());
    }

    #[test]
    fn lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Value::from("ten"), 10);
        assert_eq!(map.get("ten"), Some(&10));
    }

    #[test]
    fn compares_with_str() {
        let v = Value::from("abc");
        assert_eq!(v, "abc");
        assert_eq!(v.as_str(), "abc");
        assert_eq!(v.into_inner(), "abc".to_string());
    }
}
