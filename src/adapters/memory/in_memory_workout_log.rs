//! In-memory workout log.
//!
//! Implements both log ports over plain vectors behind one lock. Ordering
//! and matching rules follow the PostgreSQL adapter so the two can be
//! swapped in tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SetId, Timestamp, WorkoutSessionId};
use crate::domain::stats::{
    compute_session_totals, max_propagating_nan, SessionSummary, StoreCounts,
};
use crate::domain::workout::{
    set_volume, ExerciseProgressEntry, ExerciseSummary, NewSession, NewSet, WorkoutSession,
    WorkoutSet,
};
use crate::ports::{WorkoutLogReader, WorkoutLogWriter};

#[derive(Debug, Default)]
struct LogState {
    sessions: Vec<WorkoutSession>,
    sets: Vec<WorkoutSet>,
    last_session_id: i64,
    last_set_id: i64,
}

impl LogState {
    fn session(&self, id: WorkoutSessionId) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    fn sets_for(&self, id: WorkoutSessionId) -> impl Iterator<Item = &WorkoutSet> {
        self.sets.iter().filter(move |s| s.session_id == id)
    }
}

/// Workout log held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkoutLog {
    state: Arc<RwLock<LogState>>,
}

impl InMemoryWorkoutLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }

    /// Number of stored sets.
    pub async fn set_count(&self) -> usize {
        self.state.read().await.sets.len()
    }
}

#[async_trait]
impl WorkoutLogReader for InMemoryWorkoutLog {
    async fn list_sessions_with_totals(&self) -> Result<Vec<SessionSummary>, DomainError> {
        let state = self.state.read().await;
        let mut sessions = state.sessions.clone();
        sessions.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.started_at.cmp(&a.started_at))
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(sessions
            .into_iter()
            .map(|session| {
                let sets: Vec<WorkoutSet> = state.sets_for(session.id).cloned().collect();
                SessionSummary {
                    totals: compute_session_totals(&sets),
                    session,
                }
            })
            .collect())
    }

    async fn get_session(
        &self,
        id: WorkoutSessionId,
    ) -> Result<Option<WorkoutSession>, DomainError> {
        Ok(self.state.read().await.session(id).cloned())
    }

    async fn list_sets_for_session(
        &self,
        id: WorkoutSessionId,
    ) -> Result<Vec<WorkoutSet>, DomainError> {
        let state = self.state.read().await;
        let mut sets: Vec<WorkoutSet> = state.sets_for(id).cloned().collect();
        sets.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(sets)
    }

    async fn list_exercise_progress(
        &self,
        name: &str,
    ) -> Result<Vec<ExerciseProgressEntry>, DomainError> {
        let needle = name.to_lowercase();
        let state = self.state.read().await;

        let mut rows: Vec<ExerciseProgressEntry> = state
            .sets
            .iter()
            .filter(|set| set.exercise.to_lowercase().contains(&needle))
            .filter_map(|set| {
                state.session(set.session_id).map(|session| ExerciseProgressEntry {
                    date: session.date,
                    week_number: session.week_number,
                    exercise: set.exercise.clone(),
                    set_number: set.set_number,
                    weight_kg: set.weight_kg,
                    reps: set.reps,
                    rpe: set.rpe,
                    set_volume: set_volume(set.weight_kg, set.reps),
                })
            })
            .collect();

        rows.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.set_number.cmp(&b.set_number)));
        Ok(rows)
    }

    async fn list_exercises(&self) -> Result<Vec<ExerciseSummary>, DomainError> {
        let state = self.state.read().await;
        let mut by_name: BTreeMap<&str, ExerciseSummary> = BTreeMap::new();

        for set in &state.sets {
            let summary = by_name
                .entry(set.exercise.as_str())
                .or_insert_with(|| ExerciseSummary {
                    exercise: set.exercise.clone(),
                    total_sets: 0,
                    max_weight: None,
                    max_reps: None,
                });
            summary.total_sets += 1;
            summary.max_weight =
                max_present(summary.max_weight, set.weight_kg, max_propagating_nan);
            summary.max_reps = max_present(summary.max_reps, set.reps, u32::max);
        }

        Ok(by_name.into_values().collect())
    }

    async fn global_counts(&self) -> Result<StoreCounts, DomainError> {
        let state = self.state.read().await;
        let has_sets = !state.sets.is_empty();

        Ok(StoreCounts {
            session_count: state.sessions.len() as u64,
            set_count: state.sets.len() as u64,
            rep_sum: has_sets.then(|| {
                state
                    .sets
                    .iter()
                    .map(|s| u64::from(s.reps.unwrap_or(0)))
                    .sum()
            }),
            volume_sum: has_sets.then(|| state.sets.iter().fold(0.0, |acc, s| acc + s.volume())),
            max_week: state.sessions.iter().filter_map(|s| s.week_number).max(),
        })
    }
}

#[async_trait]
impl WorkoutLogWriter for InMemoryWorkoutLog {
    async fn record_session(&self, session: &NewSession) -> Result<WorkoutSession, DomainError> {
        let mut state = self.state.write().await;
        state.last_session_id += 1;

        let recorded = WorkoutSession {
            id: WorkoutSessionId::new(state.last_session_id),
            date: session.date,
            day_type: session.day_type,
            week_number: Some(session.week_number),
            energy_level: session.energy_level,
            notes: session.notes.clone(),
            started_at: Timestamp::now(),
        };
        state.sessions.push(recorded.clone());
        Ok(recorded)
    }

    async fn record_set(
        &self,
        session_id: WorkoutSessionId,
        set: &NewSet,
    ) -> Result<Option<WorkoutSet>, DomainError> {
        let mut state = self.state.write().await;
        if state.session(session_id).is_none() {
            return Ok(None);
        }

        let set_number = state
            .sets_for(session_id)
            .filter(|s| s.exercise == set.exercise)
            .map(|s| s.set_number)
            .max()
            .unwrap_or(0)
            + 1;
        state.last_set_id += 1;

        let recorded = WorkoutSet {
            id: SetId::new(state.last_set_id),
            session_id,
            exercise: set.exercise.clone(),
            set_number,
            weight_kg: Some(set.weight_kg),
            reps: Some(set.reps),
            rpe: set.rpe,
            created_at: Timestamp::now(),
        };
        state.sets.push(recorded.clone());
        Ok(Some(recorded))
    }

    async fn delete_session(&self, id: WorkoutSessionId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let before = state.sessions.len();
        state.sessions.retain(|s| s.id != id);
        if state.sessions.len() == before {
            return Ok(false);
        }
        state.sets.retain(|s| s.session_id != id);
        Ok(true)
    }
}

/// Maximum over present values, like SQL `MAX` skipping NULLs.
fn max_present<T: Copy>(current: Option<T>, next: Option<T>, max: fn(T, T) -> T) -> Option<T> {
    match (current, next) {
        (Some(a), Some(b)) => Some(max(a, b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::program::DayType;
    use chrono::NaiveDate;

    fn new_session(day: u32, day_type: DayType, week: u32) -> NewSession {
        NewSession {
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            day_type,
            week_number: week,
            energy_level: None,
            notes: None,
        }
    }

    fn new_set(exercise: &str, weight_kg: f64, reps: u32) -> NewSet {
        NewSet {
            exercise: exercise.to_string(),
            weight_kg,
            reps,
            rpe: None,
        }
    }

    #[tokio::test]
    async fn set_numbers_count_up_per_exercise() {
        let log = InMemoryWorkoutLog::new();
        let session = log.record_session(&new_session(6, DayType::A, 1)).await.unwrap();

        let mut numbers = Vec::new();
        for exercise in ["Leg Press", "Leg Press", "Squat", "Leg Press"] {
            let set = log
                .record_set(session.id, &new_set(exercise, 100.0, 10))
                .await
                .unwrap()
                .unwrap();
            numbers.push((exercise, set.set_number));
        }

        assert_eq!(
            numbers,
            vec![("Leg Press", 1), ("Leg Press", 2), ("Squat", 1), ("Leg Press", 3)]
        );
    }

    #[tokio::test]
    async fn set_for_unknown_session_is_not_recorded() {
        let log = InMemoryWorkoutLog::new();
        let result = log
            .record_set(WorkoutSessionId::new(42), &new_set("Squat", 60.0, 5))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(log.set_count().await, 0);
    }

    #[tokio::test]
    async fn deleting_a_session_removes_its_sets() {
        let log = InMemoryWorkoutLog::new();
        let keep = log.record_session(&new_session(6, DayType::A, 1)).await.unwrap();
        let dropped = log.record_session(&new_session(8, DayType::B, 1)).await.unwrap();
        log.record_set(keep.id, &new_set("Squat", 60.0, 5)).await.unwrap();
        log.record_set(dropped.id, &new_set("Pull-Ups", 0.0, 8)).await.unwrap();
        log.record_set(dropped.id, &new_set("Pull-Ups", 0.0, 7)).await.unwrap();

        assert!(log.delete_session(dropped.id).await.unwrap());
        assert!(!log.delete_session(dropped.id).await.unwrap());
        assert_eq!(log.session_count().await, 1);
        assert_eq!(log.set_count().await, 1);
        assert!(log.list_sets_for_session(dropped.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sessions_listed_most_recent_first_with_totals() {
        let log = InMemoryWorkoutLog::new();
        let older = log.record_session(&new_session(6, DayType::A, 1)).await.unwrap();
        let newer = log.record_session(&new_session(8, DayType::B, 1)).await.unwrap();
        log.record_set(older.id, &new_set("Chest Press Machine", 10.0, 5)).await.unwrap();
        log.record_set(older.id, &new_set("Chest Press Machine", 12.0, 3)).await.unwrap();

        let summaries = log.list_sessions_with_totals().await.unwrap();
        assert_eq!(summaries[0].session.id, newer.id);
        assert_eq!(summaries[0].totals.count, 0);
        assert_eq!(summaries[1].totals.count, 2);
        assert_eq!(summaries[1].totals.total_reps, 8);
        assert_eq!(summaries[1].totals.total_volume, 86.0);
    }

    #[tokio::test]
    async fn exercise_progress_matches_substring_ignoring_case() {
        let log = InMemoryWorkoutLog::new();
        let later = log.record_session(&new_session(9, DayType::A, 2)).await.unwrap();
        let earlier = log.record_session(&new_session(6, DayType::A, 1)).await.unwrap();
        log.record_set(later.id, &new_set("Leg Press", 110.0, 8)).await.unwrap();
        log.record_set(earlier.id, &new_set("leg press", 100.0, 10)).await.unwrap();
        log.record_set(earlier.id, &new_set("Squat", 60.0, 5)).await.unwrap();

        let rows = log.list_exercise_progress("LEG").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(rows[0].week_number, Some(1));
        assert_eq!(rows[1].set_volume, 880.0);
    }

    #[tokio::test]
    async fn exercises_listed_by_name_with_maxima() {
        let log = InMemoryWorkoutLog::new();
        let session = log.record_session(&new_session(6, DayType::B, 1)).await.unwrap();
        log.record_set(session.id, &new_set("Hammer Curl", 10.0, 12)).await.unwrap();
        log.record_set(session.id, &new_set("EZ-Bar Curl", 18.0, 10)).await.unwrap();
        log.record_set(session.id, &new_set("Hammer Curl", 12.0, 9)).await.unwrap();

        let exercises = log.list_exercises().await.unwrap();
        let names: Vec<&str> = exercises.iter().map(|e| e.exercise.as_str()).collect();
        assert_eq!(names, vec!["EZ-Bar Curl", "Hammer Curl"]);
        assert_eq!(exercises[1].total_sets, 2);
        assert_eq!(exercises[1].max_weight, Some(12.0));
        assert_eq!(exercises[1].max_reps, Some(12));
    }

    #[tokio::test]
    async fn exercise_max_weight_keeps_nan_from_stored_rows() {
        let log = InMemoryWorkoutLog::new();
        let session = log.record_session(&new_session(6, DayType::C, 1)).await.unwrap();
        log.record_set(session.id, &new_set("Leg Press", 120.0, 10)).await.unwrap();
        log.record_set(session.id, &new_set("Leg Press", 140.0, 8)).await.unwrap();
        log.state.write().await.sets[1].weight_kg = Some(f64::NAN);

        let exercises = log.list_exercises().await.unwrap();
        assert_eq!(exercises[0].total_sets, 2);
        assert!(exercises[0].max_weight.unwrap().is_nan());
    }

    #[tokio::test]
    async fn global_counts_are_empty_for_new_log() {
        let counts = InMemoryWorkoutLog::new().global_counts().await.unwrap();
        assert_eq!(counts, StoreCounts::default());
    }

    #[tokio::test]
    async fn global_counts_track_max_week() {
        let log = InMemoryWorkoutLog::new();
        log.record_session(&new_session(6, DayType::A, 3)).await.unwrap();
        log.record_session(&new_session(8, DayType::B, 2)).await.unwrap();

        let counts = log.global_counts().await.unwrap();
        assert_eq!(counts.session_count, 2);
        assert_eq!(counts.max_week, Some(3));
        assert_eq!(counts.rep_sum, None);
    }
}
