//! Workout-log error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, WorkoutSessionId};

/// Errors surfaced by workout queries and commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkoutError {
    /// Session was not found.
    NotFound(WorkoutSessionId),
    /// Input failed validation.
    ValidationFailed { field: String, message: String },
    /// The store could not complete the request.
    Infrastructure(String),
}

impl WorkoutError {
    pub fn not_found(id: WorkoutSessionId) -> Self {
        WorkoutError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WorkoutError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        WorkoutError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            WorkoutError::NotFound(_) => ErrorCode::SessionNotFound,
            WorkoutError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            WorkoutError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            WorkoutError::NotFound(id) => format!("Session not found: {}", id),
            WorkoutError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            WorkoutError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for WorkoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for WorkoutError {}

impl From<ValidationError> for WorkoutError {
    fn from(err: ValidationError) -> Self {
        WorkoutError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for WorkoutError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => WorkoutError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => WorkoutError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_session_code() {
        let err = WorkoutError::not_found(WorkoutSessionId::new(9));
        assert_eq!(err.code(), ErrorCode::SessionNotFound);
        assert_eq!(err.to_string(), "Session not found: 9");
    }

    #[test]
    fn database_errors_become_infrastructure() {
        let err: WorkoutError = DomainError::database("Failed to fetch", "timeout").into();
        assert!(matches!(err, WorkoutError::Infrastructure(_)));
    }

    #[test]
    fn validation_errors_keep_their_field() {
        let err: WorkoutError = ValidationError::empty_field("exercise").into();
        match err {
            WorkoutError::ValidationFailed { field, .. } => assert_eq!(field, "exercise"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
