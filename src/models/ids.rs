//! Transaction identifiers
//!
//! A transaction's id is the millisecond Unix timestamp of its creation,
//! bumped forward when two records would otherwise share a millisecond.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Create an ID from a raw integer
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create an ID from a creation timestamp
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    /// Allocate an ID for a record created at `at`, strictly greater than
    /// every id in `existing`
    ///
    /// Returns `None` when the largest existing id is already `i64::MAX`.
    pub fn allocate<I>(at: DateTime<Utc>, existing: I) -> Option<Self>
    where
        I: IntoIterator<Item = TransactionId>,
    {
        let candidate = Self::from_timestamp(at);
        match existing.into_iter().max() {
            Some(max) if max >= candidate => max.0.checked_add(1).map(Self),
            _ => Some(candidate),
        }
    }

    /// Get the underlying integer
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
