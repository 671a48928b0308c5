use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::commands::{ConfirmAction, Outcome};
use crate::tui::app::App;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let action = app.confirm.pending().cloned();
            if app.resolve_confirm(true) == Some(Outcome::Applied) {
                app.status_message = match action {
                    Some(ConfirmAction::ClearAll) => Some("cleared all tasks".to_string()),
                    Some(ConfirmAction::DeleteTask(_)) => Some("deleted task".to_string()),
                    None => None,
                };
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.resolve_confirm(false);
        }
        _ => {}
    }
}
