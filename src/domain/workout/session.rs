//! Workout session records.
//!
//! A session is one training occurrence tagged with the program day it
//! followed and the program week the lifter attributes it to. The week is
//! supplied by the caller and never derived from the calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError, WorkoutSessionId};
use crate::domain::program::DayType;

/// Lowest and highest accepted energy-level ratings.
pub const ENERGY_LEVEL_RANGE: (u8, u8) = (1, 5);

/// Maximum length for free-text session notes.
pub const MAX_NOTES_LENGTH: usize = 2000;

/// A persisted workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: WorkoutSessionId,
    pub date: NaiveDate,
    pub day_type: DayType,
    /// Program week (1-based). Rows written before the week was tracked
    /// may lack it.
    pub week_number: Option<u32>,
    pub energy_level: Option<u8>,
    pub notes: Option<String>,
    /// When the session was logged.
    pub started_at: Timestamp,
}

/// Input for logging a new session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub week_number: u32,
    #[serde(default)]
    pub energy_level: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewSession {
    /// Checks the session invariants before it reaches the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.week_number == 0 {
            return Err(ValidationError::out_of_range(
                "week_number",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }

        if let Some(level) = self.energy_level {
            let (min, max) = ENERGY_LEVEL_RANGE;
            if !(min..=max).contains(&level) {
                return Err(ValidationError::out_of_range(
                    "energy_level",
                    i64::from(min),
                    i64::from(max),
                    i64::from(level),
                ));
            }
        }

        if let Some(notes) = &self.notes {
            if notes.chars().count() > MAX_NOTES_LENGTH {
                return Err(ValidationError::invalid_format(
                    "notes",
                    format!("must be at most {} characters", MAX_NOTES_LENGTH),
                ));
            }
        }

        Ok(())
    }
}

/// Anything that can be bucketed by program week.
pub trait WeekNumbered {
    /// Raw week number as stored, if any.
    fn week_number(&self) -> Option<u32>;
}

impl WeekNumbered for WorkoutSession {
    fn week_number(&self) -> Option<u32> {
        self.week_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_session() -> NewSession {
        NewSession {
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            day_type: DayType::A,
            week_number: 1,
            energy_level: Some(4),
            notes: None,
        }
    }

    #[test]
    fn valid_session_passes() {
        assert!(new_session().validate().is_ok());
    }

    #[test]
    fn week_zero_is_rejected() {
        let session = NewSession {
            week_number: 0,
            ..new_session()
        };
        let err = session.validate().unwrap_err();
        assert_eq!(err.field(), "week_number");
    }

    #[test]
    fn energy_level_must_be_in_range() {
        let session = NewSession {
            energy_level: Some(9),
            ..new_session()
        };
        assert!(session.validate().is_err());

        let session = NewSession {
            energy_level: Some(0),
            ..new_session()
        };
        assert!(session.validate().is_err());
    }

    #[test]
    fn deserializes_camel_case_request() {
        let json = r#"{"date":"2025-01-06","dayType":"B","weekNumber":2}"#;
        let session: NewSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.day_type, DayType::B);
        assert_eq!(session.week_number, 2);
        assert!(session.energy_level.is_none());
    }
}
