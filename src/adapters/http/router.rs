//! Top-level router assembly.

use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};

use super::access::{access_routes, AccessState};
use super::middleware::access_gate_middleware;
use super::workouts::{workout_routes, WorkoutHandlers};

/// Builds the full application router.
///
/// `/health` is open; everything under `/api` except `/api/auth` sits
/// behind the access gate.
pub fn build_router(workouts: WorkoutHandlers, access: AccessState) -> Router {
    let api = Router::new()
        .nest("/auth", access_routes(access.clone()))
        .merge(workout_routes(workouts));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(access, access_gate_middleware))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
