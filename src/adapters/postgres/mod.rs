//! PostgreSQL adapters - Database implementations for the workout log ports.
//!
//! - `PostgresWorkoutLogReader` - Queries behind every read view
//! - `PostgresWorkoutLogWriter` - Session and set ingestion
//!
//! Both share one `PgPool`; the schema lives in `migrations/`.

mod rows;
mod workout_log_reader;
mod workout_log_writer;

pub use workout_log_reader::PostgresWorkoutLogReader;
pub use workout_log_writer::PostgresWorkoutLogWriter;

use sqlx::PgPool;

use crate::domain::foundation::DomainError;

/// Applies pending schema migrations from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))?;
    tracing::info!("Database migrations applied");
    Ok(())
}
