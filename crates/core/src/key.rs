//! Normalized session keys
//!
//! Keys are case-insensitive: every key and group name is lowercased before
//! it is compared or stored, so `"Foo"` and `"FOO"` address the same entry.

use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::fmt;

/// A lowercased key or group name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    /// Normalize a raw key. Empty input yields an empty key.
    pub fn new(raw: &str) -> Self {
        Key(raw.to_lowercase())
    }

    /// Normalize a raw key, rejecting empty input
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::InvalidKey("key must not be empty".to_string()));
        }
        Ok(Self::new(raw))
    }

    /// Normalize an optional group name; absent and empty both mean "no group"
    pub fn group(raw: Option<&str>) -> Option<Self> {
        raw.filter(|g| !g.is_empty()).map(Self::new)
    }

    /// Borrow the normalized form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the key is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the normalized `String`
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(raw: &str) -> Self {
        Key::new(raw)
    }
}
