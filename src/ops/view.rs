use chrono::{DateTime, Local};

use crate::model::filter::FilterMode;
use crate::model::task::{Task, TaskId};

/// One visible row of the task list.
///
/// Holds a copy of what the row displays plus the ID its controls act on.
/// Toggling, editing and deleting go through the command layer by ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
    pub completed_at: Option<DateTime<Local>>,
}

impl RowView {
    pub fn from_task(task: &Task) -> Self {
        RowView {
            id: task.id(),
            description: task.description().to_string(),
            completed: task.is_completed(),
            created_at: task.created(),
            completed_at: task.completed_at(),
        }
    }

    /// Creation time as shown next to the description
    pub fn created_label(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}

/// The rows visible under `mode`, in list order
pub fn visible_rows(tasks: &[Task], mode: FilterMode) -> Vec<RowView> {
    tasks
        .iter()
        .filter(|t| mode.matches(t))
        .map(RowView::from_task)
        .collect()
}

/// IDs of the visible rows, without copying descriptions
pub fn visible_ids(tasks: &[Task], mode: FilterMode) -> Vec<TaskId> {
    tasks
        .iter()
        .filter(|t| mode.matches(t))
        .map(|t| t.id())
        .collect()
}
