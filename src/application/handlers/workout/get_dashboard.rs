//! GetDashboardHandler - Query handler for the dashboard view.
//!
//! Combines lifetime statistics, progress through the program, the next
//! day in the rotation with its plan, and the most recent sessions.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::program::{week_progress_percent, DayPlan, DayType, ProgramCatalog};
use crate::domain::stats::{GlobalStats, SessionSummary};
use crate::domain::workout::WorkoutError;
use crate::ports::WorkoutLogReader;

/// Number of recent sessions shown by default.
pub const DEFAULT_RECENT_SESSIONS: usize = 5;

/// Query for the dashboard.
#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub recent_limit: usize,
}

impl Default for GetDashboardQuery {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_SESSIONS,
        }
    }
}

/// Dashboard view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: GlobalStats,
    pub total_weeks: u32,
    pub week_progress_percent: f64,
    pub next_day: DayType,
    pub next_workout: DayPlan,
    pub recent_sessions: Vec<SessionSummary>,
}

/// Result of the dashboard query.
pub type GetDashboardResult = DashboardView;

/// Handler for the dashboard query.
pub struct GetDashboardHandler {
    reader: Arc<dyn WorkoutLogReader>,
    catalog: Arc<ProgramCatalog>,
}

impl GetDashboardHandler {
    pub fn new(reader: Arc<dyn WorkoutLogReader>, catalog: Arc<ProgramCatalog>) -> Self {
        Self { reader, catalog }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<GetDashboardResult, WorkoutError> {
        let stats = GlobalStats::from_counts(self.reader.global_counts().await?);
        let mut sessions = self.reader.list_sessions_with_totals().await?;

        // Sessions arrive most recent first.
        let next_day = DayType::next_after(sessions.first().map(|s| s.session.day_type));
        sessions.truncate(query.recent_limit);

        let total_weeks = self.catalog.total_weeks();
        Ok(DashboardView {
            stats,
            total_weeks,
            week_progress_percent: week_progress_percent(stats.current_week, total_weeks),
            next_day,
            next_workout: self.catalog.day(next_day).clone(),
            recent_sessions: sessions,
        })
    }
}
