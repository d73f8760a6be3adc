//! Program model.
//!
//! The fixed three-day rotation, the catalog of planned exercises for each
//! day, and progress through the program's weeks.

mod catalog;
mod day_type;
mod progress;

pub use catalog::{
    CatalogError, DayPlan, DayPlans, ExpectedGain, PlannedExercise, ProgramCatalog, ProgramInfo,
};
pub use day_type::DayType;
pub use progress::week_progress_percent;
