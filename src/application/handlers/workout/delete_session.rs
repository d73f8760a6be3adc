//! DeleteSessionHandler - Command handler for removing a session and its sets.

use std::sync::Arc;

use crate::domain::foundation::WorkoutSessionId;
use crate::domain::workout::WorkoutError;
use crate::ports::WorkoutLogWriter;

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: WorkoutSessionId,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    writer: Arc<dyn WorkoutLogWriter>,
}

impl DeleteSessionHandler {
    pub fn new(writer: Arc<dyn WorkoutLogWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), WorkoutError> {
        if !self.writer.delete_session(cmd.session_id).await? {
            return Err(WorkoutError::NotFound(cmd.session_id));
        }
        tracing::info!(session_id = %cmd.session_id, "Workout session deleted");
        Ok(())
    }
}
