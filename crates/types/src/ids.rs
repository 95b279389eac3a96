//! Newtype wrapper for placement-region tags.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A tag naming the page region an object is routed to during composition.
///
/// The set is open: the well-known regions are provided as constants, and any
/// other name can be created with [`Zone::new`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Zone(Cow<'static, str>);

impl Zone {
    pub const HEADER: Zone = Zone(Cow::Borrowed("header"));
    pub const FOOTER: Zone = Zone(Cow::Borrowed("footer"));
    pub const CONTENT: Zone = Zone(Cow::Borrowed("content"));

    /// Creates a new Zone from a string
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the string representation of this zone
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Zone {
    fn default() -> Self {
        Zone::CONTENT
    }
}

impl From<String> for Zone {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl From<&'static str> for Zone {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl AsRef<str> for Zone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
