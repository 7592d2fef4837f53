//! Confirmed removal flow.

use crate::model::task::{Task, TaskId};
use crate::store::ids::IdSource;
use crate::store::task_list::TaskListStore;
use log::debug;

/// Asks the user whether a task should really be removed.
///
/// How the question is presented (dialog, prompt, gesture) belongs to the
/// implementor; the store only sees the answer.
pub trait ConfirmationGate {
    fn confirm_removal(&mut self, task: &Task) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&Task) -> bool,
{
    fn confirm_removal(&mut self, task: &Task) -> bool {
        self(task)
    }
}

/// Gate that approves every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm_removal(&mut self, _task: &Task) -> bool {
        true
    }
}

/// Removes `id` after the gate approves.
///
/// The gate is not consulted for unknown ids. Returns whether a task was
/// removed.
pub fn remove_confirmed<I, G>(store: &mut TaskListStore<I>, id: TaskId, gate: &mut G) -> bool
where
    I: IdSource,
    G: ConfirmationGate + ?Sized,
{
    let Some(task) = store.get(id) else {
        return false;
    };
    if !gate.confirm_removal(&task) {
        debug!("event=task_remove module=interaction status=declined id={id}");
        return false;
    }
    store.remove(id)
}
