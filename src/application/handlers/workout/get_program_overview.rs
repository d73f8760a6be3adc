//! GetProgramOverviewHandler - Query handler for the program and progress.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::program::{week_progress_percent, DayPlan, DayType, ProgramCatalog, ProgramInfo};
use crate::domain::stats::GlobalStats;
use crate::domain::workout::WorkoutError;
use crate::ports::WorkoutLogReader;

/// Query for the program overview.
#[derive(Debug, Clone, Default)]
pub struct GetProgramOverviewQuery;

/// One day of the rotation with its plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOverview {
    pub day_type: DayType,
    #[serde(flatten)]
    pub plan: DayPlan,
}

/// The program with the lifter's position in it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramOverview {
    pub program: ProgramInfo,
    pub days: Vec<DayOverview>,
    pub current_week: u32,
    pub week_progress_percent: f64,
}

/// Result of the program overview query.
pub type GetProgramOverviewResult = ProgramOverview;

/// Handler for the program overview.
pub struct GetProgramOverviewHandler {
    reader: Arc<dyn WorkoutLogReader>,
    catalog: Arc<ProgramCatalog>,
}

impl GetProgramOverviewHandler {
    pub fn new(reader: Arc<dyn WorkoutLogReader>, catalog: Arc<ProgramCatalog>) -> Self {
        Self { reader, catalog }
    }

    pub async fn handle(
        &self,
        _query: GetProgramOverviewQuery,
    ) -> Result<GetProgramOverviewResult, WorkoutError> {
        let stats = GlobalStats::from_counts(self.reader.global_counts().await?);

        Ok(ProgramOverview {
            program: self.catalog.program.clone(),
            days: self
                .catalog
                .days_in_rotation()
                .map(|(day_type, plan)| DayOverview {
                    day_type,
                    plan: plan.clone(),
                })
                .collect(),
            current_week: stats.current_week,
            week_progress_percent: week_progress_percent(
                stats.current_week,
                self.catalog.total_weeks(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutLog;
    use crate::domain::workout::NewSession;
    use crate::ports::WorkoutLogWriter;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn lists_days_in_rotation_order() {
        let handler = GetProgramOverviewHandler::new(
            Arc::new(InMemoryWorkoutLog::new()),
            Arc::new(ProgramCatalog::builtin().unwrap()),
        );

        let overview = handler.handle(GetProgramOverviewQuery).await.unwrap();

        let days: Vec<DayType> = overview.days.iter().map(|d| d.day_type).collect();
        assert_eq!(days, vec![DayType::A, DayType::B, DayType::C]);
        assert_eq!(overview.program.duration_weeks, 12);
        assert_eq!(overview.current_week, 1);
    }

    #[tokio::test]
    async fn progress_is_not_clamped_past_the_last_week() {
        let log = Arc::new(InMemoryWorkoutLog::new());
        log.record_session(&NewSession {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            day_type: DayType::A,
            week_number: 15,
            energy_level: None,
            notes: None,
        })
        .await
        .unwrap();
        let handler =
            GetProgramOverviewHandler::new(log, Arc::new(ProgramCatalog::builtin().unwrap()));

        let overview = handler.handle(GetProgramOverviewQuery).await.unwrap();

        assert_eq!(overview.current_week, 15);
        assert_eq!(overview.week_progress_percent, 125.0);
    }
}
