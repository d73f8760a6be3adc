//! GetSessionDetailHandler - Query handler for one session and its sets.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::WorkoutSessionId;
use crate::domain::stats::{compute_session_totals, group_by_exercise, SessionTotals};
use crate::domain::workout::{WorkoutError, WorkoutSession, WorkoutSet};
use crate::ports::WorkoutLogReader;

/// Query for a single session.
#[derive(Debug, Clone)]
pub struct GetSessionDetailQuery {
    pub session_id: WorkoutSessionId,
}

/// Sets of one exercise within the session, with best weight and reps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseBreakdown {
    pub exercise: String,
    pub best_weight: f64,
    pub total_reps: u64,
    pub sets: Vec<WorkoutSet>,
}

/// Session detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetailView {
    pub session: WorkoutSession,
    pub totals: SessionTotals,
    pub exercises: Vec<ExerciseBreakdown>,
}

/// Result of the session detail query.
pub type GetSessionDetailResult = SessionDetailView;

/// Handler for the session detail query.
pub struct GetSessionDetailHandler {
    reader: Arc<dyn WorkoutLogReader>,
}

impl GetSessionDetailHandler {
    pub fn new(reader: Arc<dyn WorkoutLogReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetSessionDetailQuery,
    ) -> Result<GetSessionDetailResult, WorkoutError> {
        let session = self
            .reader
            .get_session(query.session_id)
            .await?
            .ok_or(WorkoutError::NotFound(query.session_id))?;

        let sets = self.reader.list_sets_for_session(query.session_id).await?;
        let totals = compute_session_totals(&sets);
        let exercises = group_by_exercise(&sets)
            .into_iter()
            .map(|group| ExerciseBreakdown {
                best_weight: group.best_weight(),
                total_reps: group.total_reps(),
                exercise: group.exercise,
                sets: group.sets,
            })
            .collect();

        Ok(SessionDetailView {
            session,
            totals,
            exercises,
        })
    }
}
