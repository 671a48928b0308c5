use chrono::Local;

use crate::model::task::{Task, TaskId};

/// Error type for task list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("task description cannot be empty")]
    EmptyDescription,
}

/// What kind of mutation a [`ListEvent`] describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Add,
    Remove,
    Update,
    Clear,
}

/// Change notification delivered after a mutation has completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEvent {
    pub kind: EventKind,
    pub affected: Vec<TaskId>,
}

/// Handle returned by [`TaskList::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ListEvent, &[Task])>;

struct Subscriber {
    id: SubscriptionId,
    callback: Callback,
}

/// Sample tasks shown on first launch
pub const SAMPLE_TASKS: [&str; 4] = [
    "Complete the todo app",
    "Add task filtering",
    "Implement task persistence",
    "Add due dates feature",
];

/// Ordered, in-memory task collection with change notification.
///
/// Insertion order is display order. Every mutating method notifies
/// subscribers exactly once, after the mutation is complete, and only when
/// something actually changed.
#[derive(Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl std::fmt::Debug for TaskList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskList")
            .field("tasks", &self.tasks)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list pre-seeded with [`SAMPLE_TASKS`]
    pub fn with_samples() -> Self {
        let mut list = Self::new();
        for description in SAMPLE_TASKS {
            list.add(description);
        }
        list
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new open task. Blank descriptions are ignored and return None.
    pub fn add(&mut self, description: &str) -> Option<TaskId> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Task::new(id, description));
        self.notify(EventKind::Add, vec![id]);
        Some(id)
    }

    /// Remove a task, returning it
    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let idx = self.position(id).ok_or(TaskError::NotFound(id))?;
        let task = self.tasks.remove(idx);
        self.notify(EventKind::Remove, vec![id]);
        Ok(task)
    }

    /// Set completion state. Re-applying the current state is silent and
    /// keeps the original completion time.
    pub fn set_completed(&mut self, id: TaskId, value: bool) -> Result<(), TaskError> {
        let task = self.find_mut(id)?;
        if task.set_completed_at(value, Local::now()) {
            self.notify(EventKind::Update, vec![id]);
        }
        Ok(())
    }

    /// Replace a task's description with the trimmed `text`
    pub fn set_description(&mut self, id: TaskId, text: &str) -> Result<(), TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        let task = self.find_mut(id)?;
        if task.description() == text {
            return Ok(());
        }
        task.set_description(text);
        self.notify(EventKind::Update, vec![id]);
        Ok(())
    }

    /// Remove every task matching `pred`, keeping the order of the rest.
    /// Returns the removed IDs in their former order.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<TaskId>
    where
        F: FnMut(&Task) -> bool,
    {
        let mut removed = Vec::new();
        self.tasks.retain(|t| {
            if pred(t) {
                removed.push(t.id());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            self.notify(EventKind::Remove, removed.clone());
        }
        removed
    }

    /// Remove all tasks. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        if self.tasks.is_empty() {
            return 0;
        }
        let removed: Vec<TaskId> = self.tasks.drain(..).map(|t| t.id()).collect();
        let count = removed.len();
        self.notify(EventKind::Clear, removed);
        count
    }

    // -----------------------------------------------------------------------
    // Subscriptions
    // -----------------------------------------------------------------------

    /// Register a callback invoked after every mutation with the event and
    /// the full, already-updated task slice.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ListEvent, &[Task]) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TaskError::NotFound(id))
    }

    fn notify(&mut self, kind: EventKind, affected: Vec<TaskId>) {
        let event = ListEvent { kind, affected };
        for sub in &mut self.subscribers {
            (sub.callback)(&event, &self.tasks);
        }
    }
}
