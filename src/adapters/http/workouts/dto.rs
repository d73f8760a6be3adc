//! Request parameters for the workout endpoints.
//!
//! Response bodies are the application views themselves; they already
//! serialize with camelCase keys.

use serde::{Deserialize, Serialize};

/// Query parameters for GET /api/sessions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSessionsParams {
    pub limit: Option<usize>,
}

/// Query parameters for GET /api/dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    /// How many recent sessions to include.
    pub recent: Option<usize>,
}

/// Response for a deleted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub success: bool,
}
