//! Strongly-typed identifier value objects.
//!
//! Identifiers are assigned by the store (`BIGSERIAL`), so they wrap `i64`
//! rather than generating values themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a logged workout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutSessionId(i64);

impl WorkoutSessionId {
    /// Wraps a store-assigned identifier.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier for binding into queries.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for WorkoutSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkoutSessionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Unique identifier for a single logged set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetId(i64);

impl SetId {
    /// Wraps a store-assigned identifier.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
