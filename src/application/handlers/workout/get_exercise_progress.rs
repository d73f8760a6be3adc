//! GetExerciseProgressHandler - Query handler for one exercise over time.
//!
//! Rows are matched by case-insensitive substring, so "press" pulls in
//! every pressing movement. Per-date buckets use the session date as stored.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::stats::{group_by_exercise_date, peak_weight, total_volume, DateBucket};
use crate::domain::workout::{ExerciseProgressEntry, WorkoutError};
use crate::ports::WorkoutLogReader;

/// Query for an exercise's progress.
#[derive(Debug, Clone)]
pub struct GetExerciseProgressQuery {
    pub exercise: String,
}

/// Progress of one exercise across sessions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgressView {
    pub exercise: String,
    pub entries: Vec<ExerciseProgressEntry>,
    pub by_date: Vec<DateBucket>,
    /// Heaviest weight ever logged, absent without history.
    pub max_weight: Option<f64>,
    pub total_volume: f64,
}

/// Result of the exercise progress query.
pub type GetExerciseProgressResult = ExerciseProgressView;

/// Handler for the exercise progress query.
pub struct GetExerciseProgressHandler {
    reader: Arc<dyn WorkoutLogReader>,
}

impl GetExerciseProgressHandler {
    pub fn new(reader: Arc<dyn WorkoutLogReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetExerciseProgressQuery,
    ) -> Result<GetExerciseProgressResult, WorkoutError> {
        let exercise = query.exercise.trim();
        if exercise.is_empty() {
            return Err(WorkoutError::validation("exercise", "must not be empty"));
        }

        let entries = self.reader.list_exercise_progress(exercise).await?;

        Ok(ExerciseProgressView {
            exercise: exercise.to_string(),
            by_date: group_by_exercise_date(&entries),
            max_weight: peak_weight(&entries),
            total_volume: total_volume(&entries),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutLog;
    use crate::domain::program::DayType;
    use crate::domain::workout::{NewSession, NewSet};
    use crate::ports::WorkoutLogWriter;
    use chrono::NaiveDate;

    async fn seeded_log() -> Arc<InMemoryWorkoutLog> {
        let log = Arc::new(InMemoryWorkoutLog::new());
        for (day, sets) in [(6, vec![(50.0, 10), (55.0, 8)]), (9, vec![(57.5, 8)])] {
            let session = log
                .record_session(&NewSession {
                    date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
                    day_type: DayType::A,
                    week_number: 1,
                    energy_level: None,
                    notes: None,
                })
                .await
                .unwrap();
            for (weight_kg, reps) in sets {
                let set = NewSet {
                    exercise: "Chest Press Machine".to_string(),
                    weight_kg,
                    reps,
                    rpe: Some(8.0),
                };
                log.record_set(session.id, &set).await.unwrap();
            }
        }
        log
    }

    #[tokio::test]
    async fn buckets_by_date_with_overall_figures() {
        let handler = GetExerciseProgressHandler::new(seeded_log().await);

        let view = handler
            .handle(GetExerciseProgressQuery {
                exercise: "chest press".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(view.entries.len(), 3);
        assert_eq!(view.by_date.len(), 2);
        assert_eq!(view.by_date[0].max_weight, 55.0);
        assert_eq!(view.by_date[0].total_reps, 18);
        assert_eq!(view.by_date[1].set_count, 1);
        assert_eq!(view.max_weight, Some(57.5));
        assert_eq!(view.total_volume, 500.0 + 440.0 + 460.0);
    }

    #[tokio::test]
    async fn unknown_exercise_has_empty_progress() {
        let handler = GetExerciseProgressHandler::new(seeded_log().await);

        let view = handler
            .handle(GetExerciseProgressQuery {
                exercise: "Deadlift".to_string(),
            })
            .await
            .unwrap();

        assert!(view.entries.is_empty());
        assert!(view.by_date.is_empty());
        assert_eq!(view.max_weight, None);
        assert_eq!(view.total_volume, 0.0);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let handler = GetExerciseProgressHandler::new(seeded_log().await);

        let err = handler
            .handle(GetExerciseProgressQuery {
                exercise: "  ".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, WorkoutError::ValidationFailed { .. }));
    }
}
