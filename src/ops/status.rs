use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::model::task::Task;

use super::task_list::{SubscriptionId, TaskList};

/// Derived task counts shown in the status row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn tally(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        StatusCounts {
            total,
            active: total - completed,
            completed,
        }
    }
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total | {} active | {} completed",
            self.total, self.active, self.completed
        )
    }
}

/// Keeps [`StatusCounts`] current by recounting on every list change
#[derive(Debug)]
pub struct StatusAggregator {
    counts: Rc<Cell<StatusCounts>>,
    subscription: SubscriptionId,
}

impl StatusAggregator {
    /// Count the list as it stands and subscribe to its changes
    pub fn attach(list: &mut TaskList) -> Self {
        let counts = Rc::new(Cell::new(StatusCounts::tally(list.list())));
        let sink = Rc::clone(&counts);
        let subscription = list.subscribe(move |_, tasks| sink.set(StatusCounts::tally(tasks)));
        StatusAggregator {
            counts,
            subscription,
        }
    }

    pub fn current(&self) -> StatusCounts {
        self.counts.get()
    }

    /// Stop tracking. The last counts remain readable.
    pub fn detach(&self, list: &mut TaskList) -> bool {
        list.unsubscribe(self.subscription)
    }
}
