//! Workout log writer port (write side).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, WorkoutSessionId};
use crate::domain::workout::{NewSession, NewSet, WorkoutSession, WorkoutSet};

/// Writer port for logging sessions and sets.
///
/// Inputs are validated by the caller; implementations only persist.
#[async_trait]
pub trait WorkoutLogWriter: Send + Sync {
    /// Persists a new session and returns it with its assigned ID.
    async fn record_session(&self, session: &NewSession) -> Result<WorkoutSession, DomainError>;

    /// Appends a set to an existing session.
    ///
    /// The set number is the next one for the (session, exercise) pair,
    /// starting at 1. Returns `None` if the session does not exist.
    async fn record_set(
        &self,
        session_id: WorkoutSessionId,
        set: &NewSet,
    ) -> Result<Option<WorkoutSet>, DomainError>;

    /// Deletes a session together with its sets.
    ///
    /// Returns `false` if the session did not exist.
    async fn delete_session(&self, id: WorkoutSessionId) -> Result<bool, DomainError>;
}
