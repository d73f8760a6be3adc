//! HTTP adapters - REST API implementations.
//!
//! - `access` - Shared-password login, status and logout
//! - `workouts` - Workout log endpoints
//! - `middleware` - Access gate in front of `/api`

pub mod access;
pub mod error;
pub mod middleware;
pub mod workouts;

mod router;

pub use error::ErrorResponse;
pub use router::build_router;
