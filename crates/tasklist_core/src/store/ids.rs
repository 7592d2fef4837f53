//! Task id allocation.

use crate::model::task::TaskId;

/// Source of fresh task ids.
///
/// Implementations must never return the same id twice for one store.
/// `None` means the source is exhausted.
pub trait IdSource {
    fn next_id(&mut self) -> Option<TaskId>;
}

/// Monotonic counter starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: Option<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts the counter at `first`; mostly useful for tests.
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Option<TaskId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(TaskId::new(current))
    }
}

#[cfg(test)]
mod tests {
    use super::{IdSource, SequentialIds};

    #[test]
    fn sequential_ids_are_strictly_increasing() {
        let mut ids = SequentialIds::new();
        let first = ids.next_id().expect("fresh counter");
        let second = ids.next_id().expect("fresh counter");
        let third = ids.next_id().expect("fresh counter");
        assert_eq!(first.get(), 1);
        assert!(first < second && second < third);
    }

    #[test]
    fn starting_at_respects_seed() {
        let mut ids = SequentialIds::starting_at(1_700_000_000_000);
        assert_eq!(ids.next_id().map(|id| id.get()), Some(1_700_000_000_000));
        assert_eq!(ids.next_id().map(|id| id.get()), Some(1_700_000_000_001));
    }

    #[test]
    fn counter_issues_max_once_then_stops() {
        let mut ids = SequentialIds::starting_at(u64::MAX);
        assert_eq!(ids.next_id().map(|id| id.get()), Some(u64::MAX));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }
}
