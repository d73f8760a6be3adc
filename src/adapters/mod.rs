//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `postgres` - PostgreSQL workout log
//! - `memory` - In-process workout log for tests and local runs

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryWorkoutLog;
pub use postgres::{PostgresWorkoutLogReader, PostgresWorkoutLogWriter};
