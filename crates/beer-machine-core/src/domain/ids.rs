//! Domain identifiers.
//!
//! A [`StyleId`] is opaque: callers may assign any string at creation time.
//! When they do not, [`crate::ports::IdGenerator`] mints one from a ULID with
//! the `style-` prefix, so generated ids sort by creation time.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use ulid::Ulid;

/// Prefix used for generated ids.
pub const GENERATED_PREFIX: &str = "style-";

/// Identifier of a beer style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(String);

impl StyleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build a generated id from a ULID (`style-<ULID>`).
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(format!("{GENERATED_PREFIX}{ulid}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for StyleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StyleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Borrow<str> for StyleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
