//! HTTP middleware for axum.
//!
//! - `access_gate` - Session cookie check in front of `/api`

pub mod access_gate;

pub use access_gate::{access_gate_middleware, requires_session};
