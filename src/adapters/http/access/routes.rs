//! HTTP routes for the access endpoints.

use axum::{routing::get, Router};

use super::handlers::{auth_status, login, logout, AccessState};

/// Creates the access router, mounted at `/api/auth`.
pub fn access_routes(state: AccessState) -> Router {
    Router::new()
        .route("/", get(auth_status).post(login).delete(logout))
        .with_state(state)
}
