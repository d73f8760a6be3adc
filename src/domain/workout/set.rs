//! Workout set records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SetId, Timestamp, ValidationError, WorkoutSessionId};

/// Upper bound on reps accepted at ingestion.
pub const MAX_REPS: u32 = 1000;

/// Accepted RPE scale.
pub const RPE_RANGE: (f64, f64) = (1.0, 10.0);

/// A persisted set, owned by exactly one session.
///
/// Weight and reps are optional on read so that rows written outside the
/// validated ingestion path still aggregate; missing values count as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub id: SetId,
    pub session_id: WorkoutSessionId,
    pub exercise: String,
    /// 1-based position within (session, exercise), in entry order.
    pub set_number: u32,
    pub weight_kg: Option<f64>,
    pub reps: Option<u32>,
    pub rpe: Option<f64>,
    pub created_at: Timestamp,
}

impl WorkoutSet {
    /// Weight × reps for this set.
    pub fn volume(&self) -> f64 {
        set_volume(self.weight_kg, self.reps)
    }
}

/// Weight × reps with missing values treated as zero.
///
/// A NaN weight is not masked and yields NaN.
pub fn set_volume(weight_kg: Option<f64>, reps: Option<u32>) -> f64 {
    weight_kg.unwrap_or(0.0) * f64::from(reps.unwrap_or(0))
}

/// Input for logging a set against an existing session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSet {
    pub exercise: String,
    pub weight_kg: f64,
    pub reps: u32,
    #[serde(default)]
    pub rpe: Option<f64>,
}

impl NewSet {
    /// Rejects values that would otherwise contaminate aggregates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exercise.trim().is_empty() {
            return Err(ValidationError::empty_field("exercise"));
        }

        if !self.weight_kg.is_finite() || self.weight_kg < 0.0 {
            return Err(ValidationError::invalid_format(
                "weight_kg",
                "must be a finite, non-negative number",
            ));
        }

        if self.reps > MAX_REPS {
            return Err(ValidationError::out_of_range(
                "reps",
                0,
                i64::from(MAX_REPS),
                i64::from(self.reps),
            ));
        }

        if let Some(rpe) = self.rpe {
            let (min, max) = RPE_RANGE;
            if !rpe.is_finite() || rpe < min || rpe > max {
                return Err(ValidationError::invalid_format(
                    "rpe",
                    format!("must be between {} and {}", min, max),
                ));
            }
        }

        Ok(())
    }
}

/// One set joined with its session's date and week, as shown on an
/// exercise's progress page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgressEntry {
    pub date: NaiveDate,
    pub week_number: Option<u32>,
    pub exercise: String,
    pub set_number: u32,
    pub weight_kg: Option<f64>,
    pub reps: Option<u32>,
    pub rpe: Option<f64>,
    pub set_volume: f64,
}

/// Lifetime aggregates for one distinct exercise name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummary {
    pub exercise: String,
    pub total_sets: u64,
    pub max_weight: Option<f64>,
    pub max_reps: Option<u32>,
}
