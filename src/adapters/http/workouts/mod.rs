//! HTTP adapter for the workout log.
//!
//! ## Endpoints
//!
//! - `GET /api/dashboard` - Dashboard view
//! - `GET /api/stats` - Global totals
//! - `GET /api/history` - Sessions grouped by week
//! - `GET /api/sessions` - Sessions with totals
//! - `POST /api/sessions` - Log a session
//! - `GET /api/sessions/:id` - Session detail
//! - `DELETE /api/sessions/:id` - Delete a session
//! - `POST /api/sessions/:id/sets` - Log a set
//! - `GET /api/exercises` - Exercise summaries
//! - `GET /api/exercises/:name/progress` - Exercise progress
//! - `GET /api/program` - Program overview

mod dto;
mod handlers;
mod routes;

pub use dto::{DashboardParams, DeletedResponse, ListSessionsParams};
pub use handlers::{handle_workout_error, WorkoutHandlers};
pub use routes::workout_routes;
