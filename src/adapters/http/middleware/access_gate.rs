//! Access gate middleware.
//!
//! Every path under `/api` requires the session cookie issued by
//! `POST /api/auth`, except the access endpoints themselves.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::access::{AccessErrorResponse, AccessState};

const PROTECTED_PREFIX: &str = "/api";
const ACCESS_PATH: &str = "/api/auth";

/// Rejects unauthenticated requests to protected paths with 401.
///
/// # Usage
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", api)
///     .layer(middleware::from_fn_with_state(access_state, access_gate_middleware));
/// ```
pub async fn access_gate_middleware(
    State(access): State<AccessState>,
    request: Request,
    next: Next,
) -> Response {
    if !requires_session(request.uri().path()) || access.is_authorized(request.headers()) {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "Rejected request without session");
    (
        StatusCode::UNAUTHORIZED,
        Json(AccessErrorResponse::unauthorized()),
    )
        .into_response()
}

/// Whether a request path sits behind the access gate.
pub fn requires_session(path: &str) -> bool {
    under(path, PROTECTED_PREFIX) && !under(path, ACCESS_PATH)
}

fn under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
