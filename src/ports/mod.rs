//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WorkoutLogReader` - Queries over logged sessions and sets
//! - `WorkoutLogWriter` - Recording and deleting sessions and sets

mod workout_log_reader;
mod workout_log_writer;

pub use workout_log_reader::WorkoutLogReader;
pub use workout_log_writer::WorkoutLogWriter;
