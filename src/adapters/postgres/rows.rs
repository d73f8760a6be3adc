//! Row decoding shared by the workout log adapters.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::{DomainError, SetId, Timestamp, WorkoutSessionId};
use crate::domain::program::DayType;
use crate::domain::stats::{SessionSummary, SessionTotals};
use crate::domain::workout::{ExerciseProgressEntry, ExerciseSummary, WorkoutSession, WorkoutSet};

/// Columns selected whenever a full session row is read.
pub(super) const SESSION_COLUMNS: &str =
    "id, date, day_type, week_number, energy_level, notes, started_at";

/// Columns selected whenever a full set row is read.
pub(super) const SET_COLUMNS: &str =
    "id, session_id, exercise, set_number, weight_kg, reps, rpe, created_at";

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn unsigned<T, U>(value: T, name: &str) -> Result<U, DomainError>
where
    U: TryFrom<T>,
    T: std::fmt::Display + Copy,
{
    U::try_from(value)
        .map_err(|_| DomainError::database(&format!("Invalid {}", name), value))
}

fn optional_unsigned<T, U>(value: Option<T>, name: &str) -> Result<Option<U>, DomainError>
where
    U: TryFrom<T>,
    T: std::fmt::Display + Copy,
{
    value.map(|v| unsigned(v, name)).transpose()
}

pub(super) fn row_to_session(row: &PgRow) -> Result<WorkoutSession, DomainError> {
    let id: i64 = column(row, "id")?;
    let date: NaiveDate = column(row, "date")?;
    let day_type: String = column(row, "day_type")?;
    let week_number: Option<i32> = column(row, "week_number")?;
    let energy_level: Option<i16> = column(row, "energy_level")?;
    let notes: Option<String> = column(row, "notes")?;
    let started_at: DateTime<Utc> = column(row, "started_at")?;

    Ok(WorkoutSession {
        id: WorkoutSessionId::new(id),
        date,
        day_type: day_type
            .parse::<DayType>()
            .map_err(|e| DomainError::database("Invalid day_type", e))?,
        week_number: optional_unsigned(week_number, "week_number")?,
        energy_level: optional_unsigned(energy_level, "energy_level")?,
        notes,
        started_at: Timestamp::from_datetime(started_at),
    })
}

pub(super) fn row_to_session_summary(row: &PgRow) -> Result<SessionSummary, DomainError> {
    let set_count: i64 = column(row, "set_count")?;
    let total_reps: i64 = column(row, "total_reps")?;
    let total_volume: f64 = column(row, "total_volume")?;

    Ok(SessionSummary {
        session: row_to_session(row)?,
        totals: SessionTotals {
            count: unsigned(set_count, "set_count")?,
            total_reps: unsigned(total_reps, "total_reps")?,
            total_volume,
        },
    })
}

pub(super) fn row_to_set(row: &PgRow) -> Result<WorkoutSet, DomainError> {
    let id: i64 = column(row, "id")?;
    let session_id: i64 = column(row, "session_id")?;
    let exercise: String = column(row, "exercise")?;
    let set_number: i32 = column(row, "set_number")?;
    let weight_kg: Option<f64> = column(row, "weight_kg")?;
    let reps: Option<i32> = column(row, "reps")?;
    let rpe: Option<f64> = column(row, "rpe")?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;

    Ok(WorkoutSet {
        id: SetId::new(id),
        session_id: WorkoutSessionId::new(session_id),
        exercise,
        set_number: unsigned(set_number, "set_number")?,
        weight_kg,
        reps: optional_unsigned(reps, "reps")?,
        rpe,
        created_at: Timestamp::from_datetime(created_at),
    })
}

pub(super) fn row_to_progress_entry(row: &PgRow) -> Result<ExerciseProgressEntry, DomainError> {
    let date: NaiveDate = column(row, "date")?;
    let week_number: Option<i32> = column(row, "week_number")?;
    let exercise: String = column(row, "exercise")?;
    let set_number: i32 = column(row, "set_number")?;
    let weight_kg: Option<f64> = column(row, "weight_kg")?;
    let reps: Option<i32> = column(row, "reps")?;
    let rpe: Option<f64> = column(row, "rpe")?;
    let set_volume: f64 = column(row, "set_volume")?;

    Ok(ExerciseProgressEntry {
        date,
        week_number: optional_unsigned(week_number, "week_number")?,
        exercise,
        set_number: unsigned(set_number, "set_number")?,
        weight_kg,
        reps: optional_unsigned(reps, "reps")?,
        rpe,
        set_volume,
    })
}

pub(super) fn row_to_exercise_summary(row: &PgRow) -> Result<ExerciseSummary, DomainError> {
    let exercise: String = column(row, "exercise")?;
    let total_sets: i64 = column(row, "total_sets")?;
    let max_weight: Option<f64> = column(row, "max_weight")?;
    let max_reps: Option<i32> = column(row, "max_reps")?;

    Ok(ExerciseSummary {
        exercise,
        total_sets: unsigned(total_sets, "total_sets")?,
        max_weight,
        max_reps: optional_unsigned(max_reps, "max_reps")?,
    })
}

/// Escapes `LIKE` wildcards so a name is matched literally.
pub(super) fn like_pattern(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len() + 2);
    escaped.push('%');
    for c in name.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
