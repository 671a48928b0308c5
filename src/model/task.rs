use std::fmt;

use chrono::{DateTime, Local};

/// Stable identity of a task within one process.
///
/// Assigned by the task list on insertion and never reused, so a row that
/// refers to a deleted task simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    completed: bool,
    created_at: DateTime<Local>,
    /// Set while `completed` is true, cleared otherwise
    completed_at: Option<DateTime<Local>>,
}

impl Task {
    /// Create an open task stamped with the current time
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self::created_at(id, description, Local::now())
    }

    /// Create an open task with an explicit creation time
    pub fn created_at(id: TaskId, description: impl Into<String>, at: DateTime<Local>) -> Self {
        Task {
            id,
            description: description.into(),
            completed: false,
            created_at: at,
            completed_at: None,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }

    /// Flip completion, keeping `completed_at` in step.
    /// Returns false when the task was already in the requested state.
    pub fn set_completed(&mut self, value: bool) -> bool {
        self.set_completed_at(value, Local::now())
    }

    pub(crate) fn set_completed_at(&mut self, value: bool, now: DateTime<Local>) -> bool {
        if self.completed == value {
            return false;
        }
        self.completed = value;
        self.completed_at = if value { Some(now) } else { None };
        true
    }

    /// Replace the description. Timestamps are left alone.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Checkbox glyph used in plain-text renderings
    pub fn status_glyph(&self) -> char {
        if self.completed { '\u{2713}' } else { '\u{25CB}' }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (created at {})",
            self.status_glyph(),
            self.description,
            self.created_at.format("%H:%M")
        )
    }
}
