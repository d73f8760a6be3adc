//! HTTP handlers for the access endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::access::{AccessError, SharedSecretGate};

use super::cookie::CookieSettings;
use super::dto::{AccessErrorResponse, AuthStatusResponse, LoginRequest, SuccessResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Gate and cookie settings shared by the access handlers and middleware.
#[derive(Clone)]
pub struct AccessState {
    gate: Arc<SharedSecretGate>,
    cookie: CookieSettings,
}

impl AccessState {
    pub fn new(gate: Arc<SharedSecretGate>, cookie: CookieSettings) -> Self {
        Self { gate, cookie }
    }

    /// Whether the request carries the issued session marker.
    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        self.gate.is_authorized(self.cookie.read(headers))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/auth - Report whether the caller holds a valid session
pub async fn auth_status(State(state): State<AccessState>, headers: HeaderMap) -> Response {
    let response = AuthStatusResponse {
        authenticated: state.is_authorized(&headers),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/auth - Exchange the shared password for a session cookie
pub async fn login(
    State(state): State<AccessState>,
    body: Bytes,
) -> Response {
    let req: LoginRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected login body");
            return (
                StatusCode::BAD_REQUEST,
                Json(AccessErrorResponse::invalid_request()),
            )
                .into_response();
        }
    };

    let outcome = match req.candidate() {
        Some(candidate) => state.gate.login(candidate),
        None => Err(AccessError::InvalidPassword),
    };

    match outcome {
        Ok(marker) => (
            StatusCode::OK,
            [(header::SET_COOKIE, state.cookie.issue(marker))],
            Json(SuccessResponse { success: true }),
        )
            .into_response(),
        Err(AccessError::InvalidPassword) => {
            tracing::warn!("Login attempt with invalid password");
            (
                StatusCode::UNAUTHORIZED,
                Json(AccessErrorResponse::invalid_password()),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Access gate failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AccessErrorResponse::new("Internal server error")),
            )
                .into_response()
        }
    }
}

/// DELETE /api/auth - Clear the session cookie
pub async fn logout(State(state): State<AccessState>) -> Response {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, state.cookie.clear())],
        Json(SuccessResponse { success: true }),
    )
        .into_response()
}
