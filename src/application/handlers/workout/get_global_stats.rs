//! GetGlobalStatsHandler - Query handler for lifetime statistics.

use std::sync::Arc;

use crate::domain::stats::GlobalStats;
use crate::domain::workout::WorkoutError;
use crate::ports::WorkoutLogReader;

/// Query for lifetime statistics.
#[derive(Debug, Clone, Default)]
pub struct GetGlobalStatsQuery;

/// Result of the statistics query.
pub type GetGlobalStatsResult = GlobalStats;

/// Handler for lifetime statistics.
pub struct GetGlobalStatsHandler {
    reader: Arc<dyn WorkoutLogReader>,
}

impl GetGlobalStatsHandler {
    pub fn new(reader: Arc<dyn WorkoutLogReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetGlobalStatsQuery,
    ) -> Result<GetGlobalStatsResult, WorkoutError> {
        let counts = self.reader.global_counts().await?;
        Ok(GlobalStats::from_counts(counts))
    }
}
