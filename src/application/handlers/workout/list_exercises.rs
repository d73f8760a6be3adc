//! ListExercisesHandler - Query handler for distinct logged exercises.

use std::sync::Arc;

use crate::domain::workout::{ExerciseSummary, WorkoutError};
use crate::ports::WorkoutLogReader;

/// Query for the exercise list.
#[derive(Debug, Clone, Default)]
pub struct ListExercisesQuery;

/// Result of the exercise list query, ordered by name.
pub type ListExercisesResult = Vec<ExerciseSummary>;

/// Handler for listing exercises.
pub struct ListExercisesHandler {
    reader: Arc<dyn WorkoutLogReader>,
}

impl ListExercisesHandler {
    pub fn new(reader: Arc<dyn WorkoutLogReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: ListExercisesQuery,
    ) -> Result<ListExercisesResult, WorkoutError> {
        Ok(self.reader.list_exercises().await?)
    }
}
