use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::commands::{Command, Outcome};
use crate::tui::app::{App, Mode};
use crate::tui::field::TextField;

/// What a key did to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKey {
    Submit,
    Cancel,
    Edited,
    Ignored,
}

/// Apply line-editing keys shared by the input row and the edit prompt
fn edit_field(field: &mut TextField, key: KeyEvent) -> FieldKey {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Enter => return FieldKey::Submit,
        KeyCode::Esc => return FieldKey::Cancel,
        KeyCode::Char('a') if ctrl => field.home(),
        KeyCode::Char('e') if ctrl => field.end(),
        KeyCode::Char('u') if ctrl => field.clear(),
        KeyCode::Char('w') if ctrl => field.delete_word_back(),
        KeyCode::Backspace if alt || ctrl => field.delete_word_back(),
        KeyCode::Char(c) if !ctrl => field.insert_char(c),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left if alt || ctrl => field.word_left(),
        KeyCode::Right if alt || ctrl => field.word_right(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.home(),
        KeyCode::End => field.end(),
        _ => return FieldKey::Ignored,
    }
    FieldKey::Edited
}

/// Typing into the new-task input row
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match edit_field(&mut app.input, key) {
        FieldKey::Submit => {
            let text = app.input.text().to_string();
            if app.dispatch(Command::Add(text)) == Outcome::Applied {
                app.input.clear();
            }
        }
        FieldKey::Cancel => app.mode = Mode::Navigate,
        FieldKey::Edited | FieldKey::Ignored => {}
    }
}

/// Typing into the edit prompt
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(prompt) = app.edit.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };
    match edit_field(&mut prompt.field, key) {
        FieldKey::Submit => {
            app.close_edit(true);
        }
        FieldKey::Cancel => {
            app.close_edit(false);
        }
        FieldKey::Edited | FieldKey::Ignored => {}
    }
}
