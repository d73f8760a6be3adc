//! HTTP adapter for the shared-password access gate.
//!
//! - `GET /api/auth` - Whether the caller is authenticated
//! - `POST /api/auth` - Log in with the shared password
//! - `DELETE /api/auth` - Log out

mod cookie;
mod dto;
mod handlers;
mod routes;

pub use cookie::CookieSettings;
pub use dto::{AccessErrorResponse, AuthStatusResponse, LoginRequest, SuccessResponse};
pub use handlers::AccessState;
pub use routes::access_routes;
