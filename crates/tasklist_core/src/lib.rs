//! Core domain logic for the to-do list screen.
//! This crate is the single source of truth for task list invariants.

pub mod interaction;
pub mod logging;
pub mod model;
pub mod store;

pub use interaction::removal::{remove_confirmed, AlwaysConfirm, ConfirmationGate};
pub use interaction::title_editor::TitleEditor;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::task::{Task, TaskId, TaskTitle, TitleError};
pub use store::ids::{IdSource, SequentialIds};
pub use store::snapshot::Snapshot;
pub use store::task_list::TaskListStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
