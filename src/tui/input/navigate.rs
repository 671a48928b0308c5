use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::FilterMode;
use crate::ops::commands::{Command, ConfirmAction, Outcome};
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay swallows everything except its own close keys
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor movement
        (_, KeyCode::Char('j') | KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k') | KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.visible_ids().len().saturating_sub(1);
        }
        (_, KeyCode::PageDown) => move_cursor(app, 10),
        (_, KeyCode::PageUp) => move_cursor(app, -10),

        // Row actions
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => toggle_current(app),
        (_, KeyCode::Char('e') | KeyCode::Enter) => app.open_edit(),
        (_, KeyCode::Char('d') | KeyCode::Delete) => delete_current(app),

        // Input row
        (_, KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('/')) => {
            app.mode = Mode::Input;
        }

        // Bulk actions
        (_, KeyCode::Char('c')) => clear_completed(app),
        (_, KeyCode::Char('C')) => app.request_confirm(ConfirmAction::ClearAll),

        // Filter selector
        (_, KeyCode::Char('1')) => app.set_filter(FilterMode::All),
        (_, KeyCode::Char('2')) => app.set_filter(FilterMode::Active),
        (_, KeyCode::Char('3')) => app.set_filter(FilterMode::Completed),
        (KeyModifiers::NONE, KeyCode::Tab) => app.set_filter(app.filter.next()),
        (_, KeyCode::BackTab) => app.set_filter(app.filter.prev()),

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let count = app.visible_ids().len();
    if count == 0 {
        app.cursor = 0;
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(count - 1);
}

fn toggle_current(app: &mut App) {
    if let Some(id) = app.cursor_task_id() {
        app.dispatch(Command::ToggleComplete(id));
    }
}

fn delete_current(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    if app.config.ui.confirm_delete {
        app.request_confirm(ConfirmAction::DeleteTask(id));
    } else {
        app.dispatch(Command::Delete(id));
    }
}

fn clear_completed(app: &mut App) {
    let before = app.counts().completed;
    if app.dispatch(Command::ClearCompleted) == Outcome::Applied {
        app.status_message = Some(format!(
            "cleared {} completed task{}",
            before,
            if before == 1 { "" } else { "s" }
        ));
    }
}
