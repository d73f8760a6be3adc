//! HTTP routes for the workout log endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_session, create_set, delete_session, get_dashboard, get_exercise_progress,
    get_global_stats, get_history, get_program, get_session, list_exercises, list_sessions,
    WorkoutHandlers,
};

/// Creates the workout router, mounted under `/api`.
pub fn workout_routes(handlers: WorkoutHandlers) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/stats", get(get_global_stats))
        .route("/history", get(get_history))
        .route("/sessions", get(list_sessions).post(create_session))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .route("/sessions/:id/sets", post(create_set))
        .route("/exercises", get(list_exercises))
        .route("/exercises/:name/progress", get(get_exercise_progress))
        .route("/program", get(get_program))
        .with_state(handlers)
}
