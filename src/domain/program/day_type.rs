//! Day-type identifiers and the fixed A → B → C rotation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the three recurring workout days of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayType {
    A,
    B,
    C,
}

impl DayType {
    /// Rotation order. Workouts cycle through these days in sequence.
    pub const ROTATION: [DayType; 3] = [DayType::A, DayType::B, DayType::C];

    /// Returns the day that follows the most recently logged one.
    ///
    /// Only the single most recent session matters: skipped days, calendar
    /// gaps and adherence are ignored. With no history the program starts
    /// at `A`; after `C` it wraps back to `A`.
    pub fn next_after(last: Option<DayType>) -> DayType {
        let next_index = match last {
            Some(day) => day.rotation_index() + 1,
            None => 0,
        };
        Self::ROTATION[next_index % Self::ROTATION.len()]
    }

    /// Position of this day within [`DayType::ROTATION`].
    pub fn rotation_index(&self) -> usize {
        match self {
            DayType::A => 0,
            DayType::B => 1,
            DayType::C => 2,
        }
    }

    /// Storage and display form ("A", "B", "C").
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::A => "A",
            DayType::B => "B",
            DayType::C => "C",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(DayType::A),
            "B" | "b" => Ok(DayType::B),
            "C" | "c" => Ok(DayType::C),
            other => Err(ValidationError::invalid_format(
                "day_type",
                format!("expected one of A, B, C, got '{}'", other),
            )),
        }
    }
}
