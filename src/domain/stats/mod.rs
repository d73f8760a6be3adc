//! Aggregation engine.
//!
//! Pure functions that turn raw session and set records into derived
//! views: per-session totals, lifetime statistics, and groupings by date,
//! exercise and week. Nothing here performs I/O or raises domain errors;
//! a NaN weight flows through sums and maxima rather than being masked.

mod global;
mod grouping;
mod totals;

pub use global::{
    compute_global_stats, round_half_up, GlobalStats, StoreCounts, DEFAULT_CURRENT_WEEK,
};
pub use grouping::{
    group_by_exercise, group_by_exercise_date, group_by_week, max_propagating_nan, peak_weight,
    total_volume, weeks_most_recent_first, DateBucket, ExerciseGroup, WeekGroup, FALLBACK_WEEK,
};
pub use totals::{compute_session_totals, SessionSummary, SessionTotals};
