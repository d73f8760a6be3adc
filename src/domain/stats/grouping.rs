use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::domain::workout::{ExerciseProgressEntry, WeekNumbered, WorkoutSet};

/// Week a session is filed under when it carries no week number.
pub const FALLBACK_WEEK: u32 = 1;

/// Per-day aggregate of one exercise's sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateBucket {
    pub date: NaiveDate,
    pub max_weight: f64,
    pub total_reps: u64,
    pub set_count: u64,
}

/// Sets of one session that share an exercise name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGroup {
    pub exercise: String,
    pub sets: Vec<WorkoutSet>,
}

impl ExerciseGroup {
    /// Heaviest weight lifted in this group.
    pub fn best_weight(&self) -> f64 {
        self.sets
            .iter()
            .map(|s| s.weight_kg.unwrap_or(0.0))
            .fold(0.0, max_propagating_nan)
    }

    /// Reps summed over this group.
    pub fn total_reps(&self) -> u64 {
        self.sets.iter().map(|s| u64::from(s.reps.unwrap_or(0))).sum()
    }
}

/// Sessions filed under one program week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGroup<T> {
    pub week: u32,
    pub sessions: Vec<T>,
}

/// Buckets progress rows by calendar date.
///
/// The row's date is used as-is; callers normalize to the display timezone
/// beforehand. Buckets come out in the order their date is first seen, so
/// input sorted chronologically gives chronological buckets.
pub fn group_by_exercise_date(rows: &[ExerciseProgressEntry]) -> Vec<DateBucket> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut buckets: Vec<DateBucket> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.date).or_insert_with(|| {
            buckets.push(DateBucket {
                date: row.date,
                max_weight: 0.0,
                total_reps: 0,
                set_count: 0,
            });
            buckets.len() - 1
        });

        let bucket = &mut buckets[slot];
        bucket.max_weight = max_propagating_nan(bucket.max_weight, row.weight_kg.unwrap_or(0.0));
        bucket.total_reps += u64::from(row.reps.unwrap_or(0));
        bucket.set_count += 1;
    }

    buckets
}

/// Groups a session's sets by exercise name.
///
/// Names are compared verbatim, so "Leg Press" and "leg press" form two
/// groups even though exercise lookups in the store ignore case. Groups
/// follow first-seen order and keep input order within each group.
pub fn group_by_exercise(sets: &[WorkoutSet]) -> Vec<ExerciseGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ExerciseGroup> = Vec::new();

    for set in sets {
        match index.get(set.exercise.as_str()) {
            Some(&slot) => groups[slot].sets.push(set.clone()),
            None => {
                index.insert(set.exercise.as_str(), groups.len());
                groups.push(ExerciseGroup {
                    exercise: set.exercise.clone(),
                    sets: vec![set.clone()],
                });
            }
        }
    }

    groups
}

/// Files sessions under their week number, defaulting to week 1.
///
/// Input order is kept within each week.
pub fn group_by_week<T: WeekNumbered + Clone>(items: &[T]) -> BTreeMap<u32, Vec<T>> {
    let mut weeks: BTreeMap<u32, Vec<T>> = BTreeMap::new();
    for item in items {
        let week = item.week_number().unwrap_or(FALLBACK_WEEK);
        weeks.entry(week).or_default().push(item.clone());
    }
    weeks
}

/// Orders grouped weeks with the most recent week first.
pub fn weeks_most_recent_first<T>(weeks: BTreeMap<u32, Vec<T>>) -> Vec<WeekGroup<T>> {
    weeks
        .into_iter()
        .rev()
        .map(|(week, sessions)| WeekGroup { week, sessions })
        .collect()
}

/// Heaviest weight over all rows, `None` for an empty history.
pub fn peak_weight(rows: &[ExerciseProgressEntry]) -> Option<f64> {
    rows.iter()
        .map(|r| r.weight_kg.unwrap_or(0.0))
        .reduce(max_propagating_nan)
}

/// Volume summed over all rows.
pub fn total_volume(rows: &[ExerciseProgressEntry]) -> f64 {
    rows.iter().fold(0.0, |acc, r| acc + r.set_volume)
}

/// Like `f64::max`, except a NaN on either side wins, as in PostgreSQL `MAX`.
pub fn max_propagating_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
#[path = "grouping_test.rs"]
mod grouping_test;
