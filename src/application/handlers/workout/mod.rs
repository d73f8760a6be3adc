//! Workout log handlers.
//!
//! Queries assemble read views from `WorkoutLogReader` and the aggregation
//! functions; commands validate input before handing it to
//! `WorkoutLogWriter`.

mod delete_session;
mod get_dashboard;
mod get_exercise_progress;
mod get_global_stats;
mod get_history;
mod get_program_overview;
mod get_session_detail;
mod list_exercises;
mod list_sessions;
mod record_session;
mod record_set;

pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use get_dashboard::{
    DashboardView, GetDashboardHandler, GetDashboardQuery, GetDashboardResult,
    DEFAULT_RECENT_SESSIONS,
};
pub use get_exercise_progress::{
    ExerciseProgressView, GetExerciseProgressHandler, GetExerciseProgressQuery,
    GetExerciseProgressResult,
};
pub use get_global_stats::{GetGlobalStatsHandler, GetGlobalStatsQuery, GetGlobalStatsResult};
pub use get_history::{GetHistoryHandler, GetHistoryQuery, GetHistoryResult, HistoryView};
pub use get_program_overview::{
    DayOverview, GetProgramOverviewHandler, GetProgramOverviewQuery, GetProgramOverviewResult,
    ProgramOverview,
};
pub use get_session_detail::{
    ExerciseBreakdown, GetSessionDetailHandler, GetSessionDetailQuery, GetSessionDetailResult,
    SessionDetailView,
};
pub use list_exercises::{ListExercisesHandler, ListExercisesQuery, ListExercisesResult};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery, ListSessionsResult};
pub use record_session::{RecordSessionCommand, RecordSessionHandler, RecordSessionResult};
pub use record_set::{RecordSetCommand, RecordSetHandler, RecordSetResult};
