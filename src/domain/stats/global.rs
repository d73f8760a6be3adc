use serde::{Deserialize, Serialize};

use crate::domain::workout::{WorkoutSession, WorkoutSet};

/// Week reported when no session carries a week number.
///
/// Progress against the 12-week program is never shown as zero or undefined.
pub const DEFAULT_CURRENT_WEEK: u32 = 1;

/// Lifetime statistics over the whole log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_sessions: u64,
    pub total_sets: u64,
    pub total_reps: u64,
    /// Sum of weight × reps over every set, rounded half-up to a whole kg.
    pub total_volume: f64,
    /// Highest week number logged so far.
    pub current_week: u32,
}

/// Raw aggregates as returned by the store's counting queries.
///
/// Sums and maxima are `None` when the underlying tables are empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StoreCounts {
    pub session_count: u64,
    pub set_count: u64,
    pub rep_sum: Option<u64>,
    pub volume_sum: Option<f64>,
    pub max_week: Option<u32>,
}

impl GlobalStats {
    /// Applies rounding and the week floor to store-side aggregates.
    pub fn from_counts(counts: StoreCounts) -> Self {
        Self {
            total_sessions: counts.session_count,
            total_sets: counts.set_count,
            total_reps: counts.rep_sum.unwrap_or(0),
            total_volume: round_half_up(counts.volume_sum.unwrap_or(0.0)),
            current_week: counts.max_week.unwrap_or(DEFAULT_CURRENT_WEEK),
        }
    }
}

/// Computes lifetime statistics from fully materialized sessions and sets.
pub fn compute_global_stats(sessions: &[WorkoutSession], sets: &[WorkoutSet]) -> GlobalStats {
    GlobalStats::from_counts(StoreCounts {
        session_count: sessions.len() as u64,
        set_count: sets.len() as u64,
        rep_sum: Some(sets.iter().map(|s| u64::from(s.reps.unwrap_or(0))).sum()),
        volume_sum: Some(sets.iter().fold(0.0, |acc, s| acc + s.volume())),
        max_week: sessions.iter().filter_map(|s| s.week_number).max(),
    })
}

/// Rounds to the nearest whole unit, halves toward positive infinity.
///
/// The sum is accumulated in floating point first, so values that should
/// land exactly on `.5` may drift to either side.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
#[path = "global_test.rs"]
mod global_test;
