use crate::model::filter::FilterMode;
use crate::model::task::TaskId;

use super::task_list::{TaskError, TaskList};

/// A user intent, already resolved to task IDs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    ToggleComplete(TaskId),
    Edit { id: TaskId, text: String },
    Delete(TaskId),
    ClearCompleted,
    ClearAll,
    SetFilter(FilterMode),
}

impl Command {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::ToggleComplete(_) => "toggle",
            Command::Edit { .. } => "edit",
            Command::Delete(_) => "delete",
            Command::ClearCompleted => "clear-completed",
            Command::ClearAll => "clear-all",
            Command::SetFilter(_) => "filter",
        }
    }
}

/// Result of running a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command took effect
    Applied,
    /// Input failed a precondition (blank text); nothing changed
    Rejected,
    /// The referenced task is gone, or there was nothing to do
    NoOp,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

impl From<Result<(), TaskError>> for Outcome {
    fn from(result: Result<(), TaskError>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(TaskError::EmptyDescription) => Outcome::Rejected,
            Err(TaskError::NotFound(_)) => Outcome::NoOp,
        }
    }
}

/// Apply a command to the list and filter.
///
/// `ClearAll` runs unconditionally here; the confirmation step lives in
/// [`ConfirmState`].
pub fn execute(list: &mut TaskList, filter: &mut FilterMode, command: Command) -> Outcome {
    let outcome = match command {
        Command::Add(ref text) => match list.add(text) {
            Some(_) => Outcome::Applied,
            None => Outcome::Rejected,
        },
        Command::ToggleComplete(id) => match list.get(id).map(|t| t.is_completed()) {
            Some(current) => list.set_completed(id, !current).into(),
            None => Outcome::NoOp,
        },
        Command::Edit { id, ref text } => list.set_description(id, text).into(),
        Command::Delete(id) => list.remove(id).map(|_| ()).into(),
        Command::ClearCompleted => {
            if list.remove_where(|t| t.is_completed()).is_empty() {
                Outcome::NoOp
            } else {
                Outcome::Applied
            }
        }
        Command::ClearAll => {
            if list.clear() == 0 {
                Outcome::NoOp
            } else {
                Outcome::Applied
            }
        }
        Command::SetFilter(mode) => {
            *filter = mode;
            Outcome::Applied
        }
    };
    log::info!(
        "event=command name={} outcome={:?} tasks={}",
        command.name(),
        outcome,
        list.len()
    );
    outcome
}

/// Actions that wait for a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearAll,
    DeleteTask(TaskId),
}

impl ConfirmAction {
    /// Question shown in the confirmation popup
    pub fn prompt(&self) -> &'static str {
        match self {
            ConfirmAction::ClearAll => "Are you sure you want to delete all tasks?",
            ConfirmAction::DeleteTask(_) => "Delete this task?",
        }
    }

    fn into_command(self) -> Command {
        match self {
            ConfirmAction::ClearAll => Command::ClearAll,
            ConfirmAction::DeleteTask(id) => Command::Delete(id),
        }
    }
}

/// Two-step confirmation: `Idle` until an action is requested, then
/// `Pending` until the user answers. Either answer returns to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    Pending(ConfirmAction),
}

impl ConfirmState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ConfirmState::Pending(_))
    }

    pub fn pending(&self) -> Option<&ConfirmAction> {
        match self {
            ConfirmState::Pending(action) => Some(action),
            ConfirmState::Idle => None,
        }
    }

    /// Ask for confirmation. A newer request replaces an unanswered one.
    pub fn request(&mut self, action: ConfirmAction) {
        *self = ConfirmState::Pending(action);
    }

    /// Answer the pending question. The action runs only when `confirmed`.
    /// Returns None if nothing was pending.
    pub fn resolve(
        &mut self,
        confirmed: bool,
        list: &mut TaskList,
        filter: &mut FilterMode,
    ) -> Option<Outcome> {
        let action = match std::mem::take(self) {
            ConfirmState::Pending(action) => action,
            ConfirmState::Idle => return None,
        };
        if !confirmed {
            log::debug!("event=confirm_declined action={:?}", action);
            return Some(Outcome::NoOp);
        }
        Some(execute(list, filter, action.into_command()))
    }
}
