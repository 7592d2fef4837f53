//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical three-field task record (`id`, `title`, `done`).
//! - Validate titles at construction and at the wire boundary.
//!
//! # Invariants
//! - `TaskTitle` is always trimmed and never empty.
//! - `done` only changes through `toggle_done`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of one task within a store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Title validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleError {
    /// Title is empty or whitespace-only.
    Blank,
}

impl Display for TitleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TitleError {}

/// Trimmed, non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Trims surrounding whitespace and rejects blank input.
    ///
    /// # Errors
    /// - Returns `TitleError::Blank` when nothing remains after trimming.
    pub fn parse(raw: &str) -> Result<Self, TitleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TitleError::Blank);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // Avoid a copy when the input is already trimmed.
        if !value.is_empty() && value.trim().len() == value.len() {
            return Ok(Self(value));
        }
        Self::parse(value.as_str())
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for TaskTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One to-do entry.
///
/// Fields are private: stored tasks are only reachable through read-only
/// snapshots, and every mutation goes through `TaskListStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    done: bool,
}

impl Task {
    /// Creates a pending task.
    pub fn new(id: TaskId, title: TaskTitle) -> Self {
        Self {
            id,
            title,
            done: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub(crate) fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    pub(crate) fn set_title(&mut self, title: TaskTitle) {
        self.title = title;
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskId, TaskTitle, TitleError};

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let title = TaskTitle::parse("  Buy milk \n").expect("non-blank title should parse");
        assert_eq!(title.as_str(), "Buy milk");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(TaskTitle::parse(""), Err(TitleError::Blank));
        assert_eq!(TaskTitle::parse(" \t\r\n"), Err(TitleError::Blank));
    }

    #[test]
    fn try_from_string_trims_untrimmed_input() {
        let title = TaskTitle::try_from(" walk dog ".to_string()).expect("should parse");
        assert_eq!(title.as_str(), "walk dog");
    }

    #[test]
    fn task_id_display_honors_width() {
        assert_eq!(format!("{:>3}", TaskId::new(7)), "  7");
    }

    #[test]
    fn toggle_done_is_an_involution() {
        let mut task = Task::new(TaskId::new(7), TaskTitle::parse("A").expect("valid"));
        assert!(!task.is_done());
        task.toggle_done();
        assert!(task.is_done());
        task.toggle_done();
        assert!(!task.is_done());
    }
}
