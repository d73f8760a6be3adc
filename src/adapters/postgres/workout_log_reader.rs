//! PostgreSQL implementation of WorkoutLogReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::rows::{
    like_pattern, row_to_exercise_summary, row_to_progress_entry, row_to_session,
    row_to_session_summary, row_to_set, SESSION_COLUMNS, SET_COLUMNS,
};
use crate::domain::foundation::{DomainError, WorkoutSessionId};
use crate::domain::stats::{SessionSummary, StoreCounts};
use crate::domain::workout::{ExerciseProgressEntry, ExerciseSummary, WorkoutSession, WorkoutSet};
use crate::ports::WorkoutLogReader;

/// PostgreSQL implementation of WorkoutLogReader.
#[derive(Clone)]
pub struct PostgresWorkoutLogReader {
    pool: PgPool,
}

impl PostgresWorkoutLogReader {
    /// Creates a new PostgresWorkoutLogReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutLogReader for PostgresWorkoutLogReader {
    async fn list_sessions_with_totals(&self) -> Result<Vec<SessionSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.date, s.day_type, s.week_number, s.energy_level,
                   s.notes, s.started_at,
                   COUNT(ws.id) AS set_count,
                   COALESCE(SUM(ws.reps), 0)::BIGINT AS total_reps,
                   COALESCE(SUM(COALESCE(ws.weight_kg, 0) * COALESCE(ws.reps, 0)), 0)::FLOAT8
                       AS total_volume
            FROM workout_sessions s
            LEFT JOIN workout_sets ws ON ws.session_id = s.id
            GROUP BY s.id
            ORDER BY s.date DESC, s.started_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list sessions", e))?;

        rows.iter().map(row_to_session_summary).collect()
    }

    async fn get_session(
        &self,
        id: WorkoutSessionId,
    ) -> Result<Option<WorkoutSession>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM workout_sessions WHERE id = $1",
            SESSION_COLUMNS
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn list_sets_for_session(
        &self,
        id: WorkoutSessionId,
    ) -> Result<Vec<WorkoutSet>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM workout_sets WHERE session_id = $1 ORDER BY created_at, id",
            SET_COLUMNS
        ))
        .bind(id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list sets", e))?;

        rows.iter().map(row_to_set).collect()
    }

    async fn list_exercise_progress(
        &self,
        name: &str,
    ) -> Result<Vec<ExerciseProgressEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT s.date, s.week_number, ws.exercise, ws.set_number,
                   ws.weight_kg, ws.reps, ws.rpe,
                   (COALESCE(ws.weight_kg, 0) * COALESCE(ws.reps, 0))::FLOAT8 AS set_volume
            FROM workout_sets ws
            JOIN workout_sessions s ON s.id = ws.session_id
            WHERE ws.exercise ILIKE $1
            ORDER BY s.date ASC, ws.set_number ASC
            "#,
        )
        .bind(like_pattern(name))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch exercise progress", e))?;

        rows.iter().map(row_to_progress_entry).collect()
    }

    async fn list_exercises(&self) -> Result<Vec<ExerciseSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT exercise,
                   COUNT(*) AS total_sets,
                   MAX(weight_kg) AS max_weight,
                   MAX(reps) AS max_reps
            FROM workout_sets
            GROUP BY exercise
            ORDER BY exercise
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list exercises", e))?;

        rows.iter().map(row_to_exercise_summary).collect()
    }

    async fn global_counts(&self) -> Result<StoreCounts, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM workout_sessions) AS session_count,
                (SELECT COUNT(*) FROM workout_sets) AS set_count,
                (SELECT SUM(reps) FROM workout_sets)::BIGINT AS rep_sum,
                (SELECT SUM(COALESCE(weight_kg, 0) * COALESCE(reps, 0)) FROM workout_sets)::FLOAT8
                    AS volume_sum,
                (SELECT MAX(week_number) FROM workout_sessions) AS max_week
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch stats", e))?;

        let decode = |e: sqlx::Error| DomainError::database("Failed to decode stats", e);
        let session_count: i64 = row.try_get("session_count").map_err(decode)?;
        let set_count: i64 = row.try_get("set_count").map_err(decode)?;
        let rep_sum: Option<i64> = row.try_get("rep_sum").map_err(decode)?;
        let volume_sum: Option<f64> = row.try_get("volume_sum").map_err(decode)?;
        let max_week: Option<i32> = row.try_get("max_week").map_err(decode)?;

        Ok(StoreCounts {
            session_count: session_count.max(0) as u64,
            set_count: set_count.max(0) as u64,
            rep_sum: rep_sum.map(|r| r.max(0) as u64),
            volume_sum,
            max_week: max_week.and_then(|w| u32::try_from(w).ok()),
        })
    }
}
