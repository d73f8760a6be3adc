//! GetHistoryHandler - Query handler for sessions grouped by program week.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::stats::{group_by_week, weeks_most_recent_first, SessionSummary, WeekGroup};
use crate::domain::workout::WorkoutError;
use crate::ports::WorkoutLogReader;

/// Query for the history view.
#[derive(Debug, Clone, Default)]
pub struct GetHistoryQuery;

/// Sessions filed by week, most recent week first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub total_sessions: usize,
    pub weeks: Vec<WeekGroup<SessionSummary>>,
}

/// Result of the history query.
pub type GetHistoryResult = HistoryView;

/// Handler for the history view.
pub struct GetHistoryHandler {
    reader: Arc<dyn WorkoutLogReader>,
}

impl GetHistoryHandler {
    pub fn new(reader: Arc<dyn WorkoutLogReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: GetHistoryQuery) -> Result<GetHistoryResult, WorkoutError> {
        let sessions = self.reader.list_sessions_with_totals().await?;
        let weeks = weeks_most_recent_first(group_by_week(&sessions));

        Ok(HistoryView {
            total_sessions: sessions.len(),
            weeks,
        })
    }
}
