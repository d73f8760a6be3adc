//! ListSessionsHandler - Query handler for every session with its totals.

use std::sync::Arc;

use crate::domain::stats::SessionSummary;
use crate::domain::workout::WorkoutError;
use crate::ports::WorkoutLogReader;

/// Query for the session list.
#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery {
    /// Maximum number of sessions to return, all when unset.
    pub limit: Option<usize>,
}

/// Result of the session list query, most recent first.
pub type ListSessionsResult = Vec<SessionSummary>;

/// Handler for listing sessions.
pub struct ListSessionsHandler {
    reader: Arc<dyn WorkoutLogReader>,
}

impl ListSessionsHandler {
    pub fn new(reader: Arc<dyn WorkoutLogReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListSessionsQuery) -> Result<ListSessionsResult, WorkoutError> {
        let mut sessions = self.reader.list_sessions_with_totals().await?;
        if let Some(limit) = query.limit {
            sessions.truncate(limit);
        }
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutLog;
    use crate::domain::program::DayType;
    use crate::domain::workout::NewSession;
    use crate::ports::WorkoutLogWriter;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn limit_keeps_most_recent_sessions() {
        let log = Arc::new(InMemoryWorkoutLog::new());
        for day in 1..=4 {
            let session = NewSession {
                date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
                day_type: DayType::A,
                week_number: 1,
                energy_level: None,
                notes: None,
            };
            log.record_session(&session).await.unwrap();
        }
        let handler = ListSessionsHandler::new(log);

        let all = handler.handle(ListSessionsQuery::default()).await.unwrap();
        let two = handler.handle(ListSessionsQuery { limit: Some(2) }).await.unwrap();

        assert_eq!(all.len(), 4);
        assert_eq!(two.len(), 2);
        assert_eq!(two[0].session.date, NaiveDate::from_ymd_opt(2025, 4, 4).unwrap());
    }
}
