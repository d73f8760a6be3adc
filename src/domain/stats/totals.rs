use serde::{Deserialize, Serialize};

use crate::domain::workout::{WeekNumbered, WorkoutSession, WorkoutSet};

/// Per-session totals derived from its sets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTotals {
    /// Number of sets
    pub count: u64,
    pub total_reps: u64,
    /// Sum of weight × reps, unrounded
    pub total_volume: f64,
}

/// Computes totals for the sets of one session, in any order.
///
/// Missing reps or weight count as zero. Volume is left unrounded here;
/// only lifetime statistics round.
pub fn compute_session_totals(sets: &[WorkoutSet]) -> SessionTotals {
    sets.iter().fold(SessionTotals::default(), |acc, set| SessionTotals {
        count: acc.count + 1,
        total_reps: acc.total_reps + u64::from(set.reps.unwrap_or(0)),
        total_volume: acc.total_volume + set.volume(),
    })
}

/// A session joined with its totals, as listed on the dashboard and history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    #[serde(flatten)]
    pub session: WorkoutSession,
    #[serde(flatten)]
    pub totals: SessionTotals,
}

impl WeekNumbered for SessionSummary {
    fn week_number(&self) -> Option<u32> {
        self.session.week_number
    }
}

#[cfg(test)]
#[path = "totals_test.rs"]
mod totals_test;
