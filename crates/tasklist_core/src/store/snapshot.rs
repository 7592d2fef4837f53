//! Read-only ordered view of a task list.

use crate::model::task::{Task, TaskId};
use std::sync::Arc;

/// Immutable, cheaply clonable view of the task list at one point in time.
///
/// Equality (`==`) compares contents. Use `same_as` for the identity check a
/// renderer needs to decide whether anything changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    tasks: Arc<[Task]>,
}

impl Snapshot {
    pub(crate) fn from_arc(tasks: Arc<[Task]>) -> Self {
        Self { tasks }
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks in the completed state.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_done()).count()
    }

    /// Returns whether both snapshots are the same publication.
    pub fn same_as(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::from_arc(Arc::from(Vec::new()))
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
