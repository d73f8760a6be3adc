//! RecordSetHandler - Command handler for logging a set against a session.

use std::sync::Arc;

use crate::domain::foundation::WorkoutSessionId;
use crate::domain::workout::{NewSet, WorkoutError, WorkoutSet};
use crate::ports::WorkoutLogWriter;

/// Command to log a set.
#[derive(Debug, Clone)]
pub struct RecordSetCommand {
    pub session_id: WorkoutSessionId,
    pub set: NewSet,
}

/// Result of logging a set.
pub type RecordSetResult = WorkoutSet;

/// Handler for logging sets.
pub struct RecordSetHandler {
    writer: Arc<dyn WorkoutLogWriter>,
}

impl RecordSetHandler {
    pub fn new(writer: Arc<dyn WorkoutLogWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, cmd: RecordSetCommand) -> Result<RecordSetResult, WorkoutError> {
        let mut set = cmd.set;
        set.exercise = set.exercise.trim().to_string();
        set.validate()?;

        let recorded = self
            .writer
            .record_set(cmd.session_id, &set)
            .await?
            .ok_or(WorkoutError::NotFound(cmd.session_id))?;

        tracing::debug!(
            session_id = %cmd.session_id,
            exercise = %recorded.exercise,
            set_number = recorded.set_number,
            "Set recorded"
        );
        Ok(recorded)
    }
}
