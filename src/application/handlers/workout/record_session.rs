//! RecordSessionHandler - Command handler for logging a workout session.

use std::sync::Arc;

use crate::domain::workout::{NewSession, WorkoutError, WorkoutSession};
use crate::ports::WorkoutLogWriter;

/// Command to log a new session.
#[derive(Debug, Clone)]
pub struct RecordSessionCommand {
    pub session: NewSession,
}

/// Result of logging a session.
pub type RecordSessionResult = WorkoutSession;

/// Handler for logging sessions.
pub struct RecordSessionHandler {
    writer: Arc<dyn WorkoutLogWriter>,
}

impl RecordSessionHandler {
    pub fn new(writer: Arc<dyn WorkoutLogWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, cmd: RecordSessionCommand) -> Result<RecordSessionResult, WorkoutError> {
        let mut session = cmd.session;
        session.notes = session
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        session.validate()?;

        let recorded = self.writer.record_session(&session).await?;
        tracing::info!(
            session_id = %recorded.id,
            day_type = %recorded.day_type,
            week = session.week_number,
            "Workout session recorded"
        );
        Ok(recorded)
    }
}
