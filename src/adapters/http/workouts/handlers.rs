//! HTTP handlers for the workout log endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::workout::{
    DeleteSessionCommand, DeleteSessionHandler, GetDashboardHandler, GetDashboardQuery,
    GetExerciseProgressHandler, GetExerciseProgressQuery, GetGlobalStatsHandler,
    GetGlobalStatsQuery, GetHistoryHandler, GetHistoryQuery, GetProgramOverviewHandler,
    GetProgramOverviewQuery, GetSessionDetailHandler, GetSessionDetailQuery,
    ListExercisesHandler, ListExercisesQuery, ListSessionsHandler, ListSessionsQuery,
    RecordSessionCommand, RecordSessionHandler, RecordSetCommand, RecordSetHandler,
    DEFAULT_RECENT_SESSIONS,
};
use crate::domain::foundation::WorkoutSessionId;
use crate::domain::program::ProgramCatalog;
use crate::domain::workout::{NewSession, NewSet, WorkoutError};
use crate::ports::{WorkoutLogReader, WorkoutLogWriter};

use super::dto::{DashboardParams, DeletedResponse, ListSessionsParams};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application handlers shared by the workout routes.
#[derive(Clone)]
pub struct WorkoutHandlers {
    pub dashboard: Arc<GetDashboardHandler>,
    pub global_stats: Arc<GetGlobalStatsHandler>,
    pub history: Arc<GetHistoryHandler>,
    pub list_sessions: Arc<ListSessionsHandler>,
    pub session_detail: Arc<GetSessionDetailHandler>,
    pub list_exercises: Arc<ListExercisesHandler>,
    pub exercise_progress: Arc<GetExerciseProgressHandler>,
    pub program_overview: Arc<GetProgramOverviewHandler>,
    pub record_session: Arc<RecordSessionHandler>,
    pub record_set: Arc<RecordSetHandler>,
    pub delete_session: Arc<DeleteSessionHandler>,
}

impl WorkoutHandlers {
    /// Wires every handler to the same store and catalog.
    pub fn from_ports(
        reader: Arc<dyn WorkoutLogReader>,
        writer: Arc<dyn WorkoutLogWriter>,
        catalog: Arc<ProgramCatalog>,
    ) -> Self {
        Self {
            dashboard: Arc::new(GetDashboardHandler::new(reader.clone(), catalog.clone())),
            global_stats: Arc::new(GetGlobalStatsHandler::new(reader.clone())),
            history: Arc::new(GetHistoryHandler::new(reader.clone())),
            list_sessions: Arc::new(ListSessionsHandler::new(reader.clone())),
            session_detail: Arc::new(GetSessionDetailHandler::new(reader.clone())),
            list_exercises: Arc::new(ListExercisesHandler::new(reader.clone())),
            exercise_progress: Arc::new(GetExerciseProgressHandler::new(reader.clone())),
            program_overview: Arc::new(GetProgramOverviewHandler::new(reader, catalog)),
            record_session: Arc::new(RecordSessionHandler::new(writer.clone())),
            record_set: Arc::new(RecordSetHandler::new(writer.clone())),
            delete_session: Arc::new(DeleteSessionHandler::new(writer)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Read endpoints
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/dashboard - Stats, next workout and recent sessions
pub async fn get_dashboard(
    State(handlers): State<WorkoutHandlers>,
    params: Result<Query<DashboardParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return reject_query(rejection),
    };
    let query = GetDashboardQuery {
        recent_limit: params.recent.unwrap_or(DEFAULT_RECENT_SESSIONS),
    };

    match handlers.dashboard.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// GET /api/stats - Global totals
pub async fn get_global_stats(State(handlers): State<WorkoutHandlers>) -> Response {
    match handlers.global_stats.handle(GetGlobalStatsQuery).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// GET /api/history - Sessions grouped by program week
pub async fn get_history(State(handlers): State<WorkoutHandlers>) -> Response {
    match handlers.history.handle(GetHistoryQuery).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// GET /api/sessions - Sessions with totals, most recent first
pub async fn list_sessions(
    State(handlers): State<WorkoutHandlers>,
    params: Result<Query<ListSessionsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return reject_query(rejection),
    };
    let query = ListSessionsQuery {
        limit: params.limit,
    };

    match handlers.list_sessions.handle(query).await {
        Ok(sessions) => (StatusCode::OK, Json(sessions)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// GET /api/sessions/:id - One session with its sets grouped by exercise
pub async fn get_session(
    State(handlers): State<WorkoutHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .session_detail
        .handle(GetSessionDetailQuery { session_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// GET /api/exercises - Distinct exercises with lifetime bests
pub async fn list_exercises(State(handlers): State<WorkoutHandlers>) -> Response {
    match handlers.list_exercises.handle(ListExercisesQuery).await {
        Ok(exercises) => (StatusCode::OK, Json(exercises)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// GET /api/exercises/:name/progress - Per-date history for matching exercises
pub async fn get_exercise_progress(
    State(handlers): State<WorkoutHandlers>,
    Path(exercise): Path<String>,
) -> Response {
    match handlers
        .exercise_progress
        .handle(GetExerciseProgressQuery { exercise })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// GET /api/program - Program catalog with the current week
pub async fn get_program(State(handlers): State<WorkoutHandlers>) -> Response {
    match handlers
        .program_overview
        .handle(GetProgramOverviewQuery)
        .await
    {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Write endpoints
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Log a new session
pub async fn create_session(
    State(handlers): State<WorkoutHandlers>,
    body: Result<Json<NewSession>, JsonRejection>,
) -> Response {
    let Json(session) = match body {
        Ok(body) => body,
        Err(rejection) => return reject_body(rejection),
    };

    match handlers
        .record_session
        .handle(RecordSessionCommand { session })
        .await
    {
        Ok(session) => (StatusCode::CREATED, Json(session)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// POST /api/sessions/:id/sets - Log a set against a session
pub async fn create_set(
    State(handlers): State<WorkoutHandlers>,
    Path(session_id): Path<String>,
    body: Result<Json<NewSet>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(set) = match body {
        Ok(body) => body,
        Err(rejection) => return reject_body(rejection),
    };

    match handlers
        .record_set
        .handle(RecordSetCommand { session_id, set })
        .await
    {
        Ok(set) => (StatusCode::CREATED, Json(set)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// DELETE /api/sessions/:id - Remove a session and its sets
pub async fn delete_session(
    State(handlers): State<WorkoutHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_session
        .handle(DeleteSessionCommand { session_id })
        .await
    {
        Ok(()) => (StatusCode::OK, Json(DeletedResponse { success: true })).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<WorkoutSessionId, Response> {
    raw.parse::<WorkoutSessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn reject_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn reject_query(rejection: QueryRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

/// Maps workout errors to HTTP responses.
pub fn handle_workout_error(error: WorkoutError) -> Response {
    let code = error.code();
    match error {
        WorkoutError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::from_code(
                code,
                format!("Session not found: {}", id),
            )),
        )
            .into_response(),
        WorkoutError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::from_code(code, message).with_field(&field)),
        )
            .into_response(),
        WorkoutError::Infrastructure(msg) => {
            tracing::error!(error = %msg, code = %code, "Workout store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_workout_error(WorkoutError::not_found(WorkoutSessionId::new(7)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = handle_workout_error(WorkoutError::validation("reps", "too many"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_workout_error(WorkoutError::infrastructure("connection reset"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn not_found_body_carries_session_code() {
        let response = handle_workout_error(WorkoutError::not_found(WorkoutSessionId::new(7)));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "SESSION_NOT_FOUND");
        assert_eq!(body.message, "Session not found: 7");
    }

    #[test]
    fn non_numeric_session_id_is_rejected() {
        let response = parse_session_id("abc").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_session_id("42").unwrap(), WorkoutSessionId::new(42));
    }
}
