//! End-to-end scenarios against the library: collection, status counts,
//! filtered projection and the confirmation flow working together.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use tick::model::FilterMode;
use tick::ops::commands::{self, Command, ConfirmAction, ConfirmState, Outcome};
use tick::ops::status::{StatusAggregator, StatusCounts};
use tick::ops::task_list::{EventKind, TaskList};
use tick::ops::view::visible_rows;

fn descriptions(list: &TaskList, mode: FilterMode) -> Vec<String> {
    visible_rows(list.list(), mode)
        .into_iter()
        .map(|row| row.description)
        .collect()
}

#[test]
fn test_completed_filter_and_status_line() {
    let mut list = TaskList::new();
    let status = StatusAggregator::attach(&mut list);
    let mut filter = FilterMode::All;

    commands::execute(&mut list, &mut filter, Command::Add("Buy milk".into()));
    commands::execute(&mut list, &mut filter, Command::Add("Pay bills".into()));
    let bills = list.list()[1].id();
    commands::execute(&mut list, &mut filter, Command::ToggleComplete(bills));
    commands::execute(&mut list, &mut filter, Command::SetFilter(FilterMode::Completed));

    assert_eq!(filter, FilterMode::Completed);
    assert_eq!(descriptions(&list, filter), vec!["Pay bills".to_string()]);
    assert_eq!(status.current().to_string(), "2 total | 1 active | 1 completed");
}

#[test]
fn test_blank_add_changes_nothing() {
    let mut list = TaskList::new();
    let events = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&events);
    list.subscribe(move |_, _| *seen.borrow_mut() += 1);

    let mut filter = FilterMode::All;
    let outcome = commands::execute(&mut list, &mut filter, Command::Add("   ".into()));

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(list.len(), 0);
    assert_eq!(*events.borrow(), 0);
}

#[test]
fn test_clear_all_needs_confirmation() {
    let mut list = TaskList::with_samples();
    let status = StatusAggregator::attach(&mut list);
    let mut filter = FilterMode::All;
    let mut confirm = ConfirmState::default();

    confirm.request(ConfirmAction::ClearAll);
    assert_eq!(confirm.resolve(false, &mut list, &mut filter), Some(Outcome::NoOp));
    assert_eq!(list.len(), 4);
    assert!(!confirm.is_pending());

    confirm.request(ConfirmAction::ClearAll);
    assert_eq!(confirm.resolve(true, &mut list, &mut filter), Some(Outcome::Applied));
    assert!(list.is_empty());
    assert_eq!(status.current(), StatusCounts::default());
}

#[test]
fn test_counts_stay_consistent_through_a_session() {
    let mut list = TaskList::with_samples();
    let status = StatusAggregator::attach(&mut list);
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&kinds);
    list.subscribe(move |event, _| sink.borrow_mut().push(event.kind));
    let mut filter = FilterMode::All;

    let ids: Vec<_> = list.list().iter().map(|t| t.id()).collect();
    let steps = vec![
        Command::ToggleComplete(ids[0]),
        Command::ToggleComplete(ids[2]),
        Command::Edit {
            id: ids[1],
            text: "Add task filtering (done soon)".into(),
        },
        Command::Add("Write release notes".into()),
        Command::Delete(ids[3]),
        Command::ClearCompleted,
    ];
    for step in steps {
        assert!(commands::execute(&mut list, &mut filter, step).is_applied());
        let counts = status.current();
        assert_eq!(counts.active + counts.completed, counts.total);
        assert_eq!(counts, StatusCounts::tally(list.list()));
    }

    assert_eq!(
        descriptions(&list, FilterMode::All),
        vec![
            "Add task filtering (done soon)".to_string(),
            "Write release notes".to_string(),
        ]
    );
    assert_eq!(
        *kinds.borrow(),
        vec![
            EventKind::Update,
            EventKind::Update,
            EventKind::Update,
            EventKind::Add,
            EventKind::Remove,
            EventKind::Remove,
        ]
    );
}

#[test]
fn test_filtering_is_order_preserving_and_idempotent() {
    let mut list = TaskList::new();
    for d in ["a", "b", "c", "d", "e"] {
        list.add(d);
    }
    for id in [list.list()[1].id(), list.list()[3].id()] {
        list.set_completed(id, true).unwrap();
    }

    let active = descriptions(&list, FilterMode::Active);
    assert_eq!(active, vec!["a", "c", "e"]);
    assert_eq!(descriptions(&list, FilterMode::Completed), vec!["b", "d"]);
    // Switching back and forth never mutates the list
    for mode in [FilterMode::Completed, FilterMode::All, FilterMode::Active] {
        let _ = descriptions(&list, mode);
    }
    assert_eq!(descriptions(&list, FilterMode::Active), active);
    assert_eq!(list.len(), 5);
}

#[test]
fn test_deleted_row_is_a_no_op() {
    let mut list = TaskList::new();
    let id = list.add("gone soon").unwrap();
    let mut filter = FilterMode::All;
    assert!(commands::execute(&mut list, &mut filter, Command::Delete(id)).is_applied());
    assert_eq!(
        commands::execute(&mut list, &mut filter, Command::ToggleComplete(id)),
        Outcome::NoOp
    );
}
