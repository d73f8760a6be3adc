//! Workout log domain module.
//!
//! Sessions and the sets performed in them, as persisted by the log store,
//! plus the joined read rows the store hands back for exercise queries.

mod errors;
mod session;
mod set;

pub use errors::WorkoutError;
pub use session::{NewSession, WeekNumbered, WorkoutSession, ENERGY_LEVEL_RANGE, MAX_NOTES_LENGTH};
pub use set::{
    set_volume, ExerciseProgressEntry, ExerciseSummary, NewSet, WorkoutSet, MAX_REPS, RPE_RANGE,
};
