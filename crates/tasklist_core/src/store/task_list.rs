//! Task list store.
//!
//! # Responsibility
//! - Apply add/toggle/edit/remove requests coming from screen surfaces.
//! - Publish a fresh snapshot after every effective mutation.
//!
//! # Invariants
//! - Insertion order is preserved; removal never reorders survivors.
//! - A no-op keeps the current snapshot (identity-equal).
//! - No operation returns an error or panics on caller input.

use crate::model::task::{Task, TaskId, TaskTitle};
use crate::store::ids::{IdSource, SequentialIds};
use crate::store::snapshot::Snapshot;
use log::{debug, trace};
use std::sync::Arc;

/// Upper bound on draws from a misbehaving id source during one `add`.
const MAX_ID_DRAWS: usize = 8;

/// Single source of truth for one screen's task list.
///
/// Owned by whichever layer hosts the screen and passed by reference to the
/// surfaces that read or mutate it.
#[derive(Debug)]
pub struct TaskListStore<I: IdSource = SequentialIds> {
    tasks: Arc<[Task]>,
    ids: I,
}

impl TaskListStore<SequentialIds> {
    /// Creates an empty store with sequential ids starting at 1.
    pub fn new() -> Self {
        Self::with_id_source(SequentialIds::new())
    }
}

impl Default for TaskListStore<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> TaskListStore<I> {
    /// Creates an empty store using the provided id source.
    pub fn with_id_source(ids: I) -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
            ids,
        }
    }

    /// Appends a pending task with a fresh id.
    ///
    /// # Contract
    /// - Title is trimmed; a blank title is a no-op and returns `None`.
    /// - Duplicate titles are accepted.
    /// - Returns the new task id.
    pub fn add(&mut self, title: &str) -> Option<TaskId> {
        let Ok(title) = TaskTitle::parse(title) else {
            trace!("event=task_add module=store status=noop reason=blank_title");
            return None;
        };
        let Some(id) = self.fresh_id() else {
            trace!("event=task_add module=store status=noop reason=id_exhausted");
            return None;
        };

        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.extend(self.tasks.iter().cloned());
        next.push(Task::new(id, title));
        self.publish(next);

        debug!(
            "event=task_add module=store status=ok id={} count={}",
            id,
            self.tasks.len()
        );
        Some(id)
    }

    /// Flips the `done` flag of the matching task.
    ///
    /// Returns `false` (no-op) when no task has `id`.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let changed = self.update(id, Task::toggle_done);
        if changed {
            debug!("event=task_toggle module=store status=ok id={id}");
        } else {
            trace!("event=task_toggle module=store status=noop reason=unknown_id id={id}");
        }
        changed
    }

    /// Replaces the title of the matching task.
    ///
    /// # Contract
    /// - `new_title` is trimmed; blank input is a no-op.
    /// - Unknown id is a no-op.
    /// - `id`, `done` and list order are unchanged.
    pub fn edit_title(&mut self, id: TaskId, new_title: &str) -> bool {
        let Ok(title) = TaskTitle::parse(new_title) else {
            trace!("event=task_edit module=store status=noop reason=blank_title id={id}");
            return false;
        };
        let changed = self.update(id, move |task| task.set_title(title));
        if changed {
            debug!("event=task_edit module=store status=ok id={id}");
        } else {
            trace!("event=task_edit module=store status=noop reason=unknown_id id={id}");
        }
        changed
    }

    /// Deletes the matching task; the relative order of others is kept.
    ///
    /// Idempotent: removing an unknown or already-removed id is a no-op.
    pub fn remove(&mut self, id: TaskId) -> bool {
        if self.position(id).is_none() {
            trace!("event=task_remove module=store status=noop reason=unknown_id id={id}");
            return false;
        }

        let next = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect::<Vec<_>>();
        self.publish(next);

        debug!(
            "event=task_remove module=store status=ok id={} count={}",
            id,
            self.tasks.len()
        );
        true
    }

    /// Returns the current read-only view.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_arc(Arc::clone(&self.tasks))
    }

    /// Returns a copy of one task.
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.position(id).map(|index| self.tasks[index].clone())
    }

    /// Number of tasks, as shown by the screen header.
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_done()).count()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    fn update(&mut self, id: TaskId, apply: impl FnOnce(&mut Task)) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let mut next = self.tasks.to_vec();
        apply(&mut next[index]);
        self.publish(next);
        true
    }

    fn fresh_id(&mut self) -> Option<TaskId> {
        for _ in 0..MAX_ID_DRAWS {
            let candidate = self.ids.next_id()?;
            if self.position(candidate).is_none() {
                return Some(candidate);
            }
        }
        None
    }

    fn publish(&mut self, next: Vec<Task>) {
        self.tasks = Arc::from(next);
    }
}
