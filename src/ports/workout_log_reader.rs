//! Workout log reader port (read side).
//!
//! The query contract of the persisted log store. Every view the API serves
//! is assembled from these reads plus the pure aggregation functions in
//! `domain::stats`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, WorkoutSessionId};
use crate::domain::stats::{SessionSummary, StoreCounts};
use crate::domain::workout::{ExerciseProgressEntry, ExerciseSummary, WorkoutSession, WorkoutSet};

/// Reader port for workout log queries.
#[async_trait]
pub trait WorkoutLogReader: Send + Sync {
    /// Every session with its set count, rep sum and volume.
    ///
    /// Ordered by date descending, then by `started_at` descending.
    async fn list_sessions_with_totals(&self) -> Result<Vec<SessionSummary>, DomainError>;

    /// Get a session by ID.
    ///
    /// Returns `None` if not found.
    async fn get_session(
        &self,
        id: WorkoutSessionId,
    ) -> Result<Option<WorkoutSession>, DomainError>;

    /// Sets of one session, oldest first.
    async fn list_sets_for_session(
        &self,
        id: WorkoutSessionId,
    ) -> Result<Vec<WorkoutSet>, DomainError>;

    /// Sets whose exercise name contains `name`, ignoring case.
    ///
    /// Each row carries its session's date and week. Ordered by date, then
    /// by set number.
    async fn list_exercise_progress(
        &self,
        name: &str,
    ) -> Result<Vec<ExerciseProgressEntry>, DomainError>;

    /// Distinct exercise names with lifetime aggregates, ordered by name.
    async fn list_exercises(&self) -> Result<Vec<ExerciseSummary>, DomainError>;

    /// Store-wide counts feeding the lifetime statistics.
    async fn global_counts(&self) -> Result<StoreCounts, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_log_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn WorkoutLogReader) {}
    }
}
