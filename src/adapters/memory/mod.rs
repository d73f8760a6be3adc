//! In-memory adapters for tests and local development.

mod in_memory_workout_log;

pub use in_memory_workout_log::InMemoryWorkoutLog;
