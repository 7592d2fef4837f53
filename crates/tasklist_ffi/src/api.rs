//! FFI use-case API for the Flutter to-do screen.
//!
//! # Responsibility
//! - Expose the task list operations to Dart via FRB.
//! - Keep error semantics simple: invalid input is a no-op, never a throw.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Each screen owns its own `TaskListHandle`; there is no global list.

use flutter_rust_bridge::frb;
use log::debug;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Task, TaskId, TaskListStore,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Row rendered by the task list widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task id in Dart `int` range.
    pub id: i64,
    pub title: String,
    pub done: bool,
}

impl From<&Task> for TaskItem {
    fn from(task: &Task) -> Self {
        Self {
            id: id_to_dart(task.id()),
            title: task.title().to_string(),
            done: task.is_done(),
        }
    }
}

/// Task list owned by one Dart screen.
///
/// # FFI contract
/// - All methods are sync and bounded by the list length.
/// - Unknown ids, negative ids and blank titles are no-ops returning `false`
///   (or `None` for `add_task`).
#[frb(opaque)]
pub struct TaskListHandle {
    store: Mutex<TaskListStore>,
}

impl TaskListHandle {
    #[frb(sync)]
    pub fn new() -> Self {
        debug!("event=handle_create module=ffi status=ok");
        Self {
            store: Mutex::new(TaskListStore::new()),
        }
    }

    /// Adds a task and returns its id.
    #[frb(sync)]
    pub fn add_task(&self, title: String) -> Option<i64> {
        self.lock().add(title.as_str()).map(id_to_dart)
    }

    #[frb(sync)]
    pub fn toggle_task_done(&self, id: i64) -> bool {
        match id_from_dart(id) {
            Some(id) => self.lock().toggle_done(id),
            None => false,
        }
    }

    #[frb(sync)]
    pub fn edit_task(&self, id: i64, title: String) -> bool {
        match id_from_dart(id) {
            Some(id) => self.lock().edit_title(id, title.as_str()),
            None => false,
        }
    }

    /// Removes a task. Confirmation is the caller's job.
    #[frb(sync)]
    pub fn remove_task(&self, id: i64) -> bool {
        match id_from_dart(id) {
            Some(id) => self.lock().remove(id),
            None => false,
        }
    }

    /// Current rows in insertion order.
    #[frb(sync)]
    pub fn tasks(&self) -> Vec<TaskItem> {
        let snapshot = self.lock().snapshot();
        snapshot.iter().map(TaskItem::from).collect()
    }

    /// Header counter value.
    #[frb(sync)]
    pub fn tasks_count(&self) -> u32 {
        u32::try_from(self.lock().count()).unwrap_or(u32::MAX)
    }

    fn lock(&self) -> MutexGuard<'_, TaskListStore> {
        // Store operations cannot leave a half-applied list, so a poisoned
        // lock still guards a consistent value.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TaskListHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn id_to_dart(id: TaskId) -> i64 {
    i64::try_from(id.get()).unwrap_or(i64::MAX)
}

fn id_from_dart(id: i64) -> Option<TaskId> {
    u64::try_from(id).ok().map(TaskId::new)
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, TaskItem, TaskListHandle};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn handle_runs_screen_flow() {
        let handle = TaskListHandle::new();
        let a = handle.add_task("A".to_string()).expect("A should be added");
        let b = handle.add_task("B".to_string()).expect("B should be added");
        assert_eq!(handle.tasks_count(), 2);

        assert!(handle.toggle_task_done(a));
        assert!(handle.remove_task(a));
        assert!(handle.edit_task(b, "B2".to_string()));

        assert_eq!(
            handle.tasks(),
            vec![TaskItem {
                id: b,
                title: "B2".to_string(),
                done: false,
            }]
        );
    }

    #[test]
    fn handle_treats_bad_input_as_noop() {
        let handle = TaskListHandle::new();
        assert_eq!(handle.add_task("   ".to_string()), None);
        let id = handle.add_task("kept".to_string()).expect("added");

        assert!(!handle.toggle_task_done(-1));
        assert!(!handle.edit_task(id, String::new()));
        assert!(!handle.remove_task(id + 1000));
        assert_eq!(handle.tasks()[0].title, "kept");
    }

    #[test]
    fn handles_do_not_share_state() {
        let first = TaskListHandle::new();
        let second = TaskListHandle::default();
        first.add_task("only here".to_string());

        assert_eq!(first.tasks_count(), 1);
        assert_eq!(second.tasks_count(), 0);
    }
}
