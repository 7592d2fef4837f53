//! Inline title editing for one task row.

use crate::model::task::{Task, TaskId};
use crate::store::ids::IdSource;
use crate::store::task_list::TaskListStore;

/// Transient edit state for one task title.
///
/// The draft may be blank while the user types; only `commit` reaches the
/// store, which rejects blank titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleEditor {
    id: TaskId,
    original: String,
    draft: String,
}

impl TitleEditor {
    /// Starts editing with the task's current title as the draft.
    pub fn begin(task: &Task) -> Self {
        Self {
            id: task.id(),
            original: task.title().to_string(),
            draft: task.title().to_string(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn draft(&self) -> &str {
        self.draft.as_str()
    }

    pub fn original(&self) -> &str {
        self.original.as_str()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Returns whether the draft differs from the title editing started with.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Discards the draft and returns the title to display again.
    pub fn cancel(self) -> String {
        self.original
    }

    /// Forwards the draft to the store.
    ///
    /// Returns whether the store applied it. Blank drafts and tasks removed
    /// while editing leave the store unchanged.
    pub fn commit<I: IdSource>(self, store: &mut TaskListStore<I>) -> bool {
        store.edit_title(self.id, self.draft.as_str())
    }
}
