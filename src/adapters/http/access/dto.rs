//! Request and response bodies for the access endpoints.

use serde::{Deserialize, Serialize};

/// POST /api/auth body.
///
/// Any JSON object is accepted; a missing or non-string password simply
/// fails the check.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: serde_json::Value,
}

impl LoginRequest {
    /// Password candidate, if one was sent as a string.
    pub fn candidate(&self) -> Option<&str> {
        self.password.as_str()
    }
}

/// GET /api/auth response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
}

/// Successful login or logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error body of the access contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessErrorResponse {
    pub error: String,
}

impl AccessErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn invalid_request() -> Self {
        Self::new("Invalid request")
    }

    pub fn invalid_password() -> Self {
        Self::new("Invalid password")
    }

    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }
}
