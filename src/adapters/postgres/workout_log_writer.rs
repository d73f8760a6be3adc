//! PostgreSQL implementation of WorkoutLogWriter.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{row_to_session, row_to_set, SESSION_COLUMNS, SET_COLUMNS};
use crate::domain::foundation::{DomainError, ValidationError, WorkoutSessionId};
use crate::domain::workout::{NewSession, NewSet, WorkoutSession, WorkoutSet};
use crate::ports::WorkoutLogWriter;

/// PostgreSQL implementation of WorkoutLogWriter.
#[derive(Clone)]
pub struct PostgresWorkoutLogWriter {
    pool: PgPool,
}

impl PostgresWorkoutLogWriter {
    /// Creates a new PostgresWorkoutLogWriter.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutLogWriter for PostgresWorkoutLogWriter {
    async fn record_session(&self, session: &NewSession) -> Result<WorkoutSession, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO workout_sessions (date, day_type, week_number, energy_level, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            SESSION_COLUMNS
        ))
        .bind(session.date)
        .bind(session.day_type.as_str())
        .bind(to_int4(session.week_number, "week_number")?)
        .bind(session.energy_level.map(i16::from))
        .bind(session.notes.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        row_to_session(&row)
    }

    async fn record_set(
        &self,
        session_id: WorkoutSessionId,
        set: &NewSet,
    ) -> Result<Option<WorkoutSet>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to start transaction", e))?;

        // Lock the session row so concurrent inserts cannot pick the same set number.
        let exists = sqlx::query("SELECT id FROM workout_sessions WHERE id = $1 FOR UPDATE")
            .bind(session_id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to lock session", e))?;

        if exists.is_none() {
            return Ok(None);
        }

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO workout_sets (session_id, exercise, set_number, weight_kg, reps, rpe)
            SELECT $1, $2, COALESCE(MAX(set_number), 0) + 1, $3, $4, $5
            FROM workout_sets
            WHERE session_id = $1 AND exercise = $2
            RETURNING {}
            "#,
            SET_COLUMNS
        ))
        .bind(session_id.value())
        .bind(&set.exercise)
        .bind(set.weight_kg)
        .bind(to_int4(set.reps, "reps")?)
        .bind(set.rpe)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert set", e))?;

        let recorded = row_to_set(&row)?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(Some(recorded))
    }

    async fn delete_session(&self, id: WorkoutSessionId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM workout_sessions WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete session", e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Narrows a count to the `INTEGER` column type.
fn to_int4(value: u32, field: &str) -> Result<i32, DomainError> {
    i32::try_from(value).map_err(|_| {
        ValidationError::out_of_range(field, 0, i64::from(i32::MAX), i64::from(value)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn int4_narrowing_accepts_small_values() {
        assert_eq!(to_int4(12, "week_number").unwrap(), 12);
    }

    #[test]
    fn int4_narrowing_rejects_overflow() {
        let err = to_int4(u32::MAX, "week_number").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field").map(String::as_str), Some("week_number"));
    }
}
