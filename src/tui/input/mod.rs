mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use confirm::handle_confirm;
use edit::{handle_edit, handle_input};
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }
}

/// Handle a bracketed paste event. Only the input row and the edit prompt
/// take pasted text.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Input => app.input.insert_str(text),
        Mode::Edit => {
            if let Some(prompt) = &mut app.edit {
                prompt.field.insert_str(text);
            }
        }
        Mode::Navigate | Mode::Confirm => {}
    }
}

/// Normalize key events from terminals using the kitty keyboard protocol,
/// which report `Char('c') + SHIFT` where others report `Char('C')`.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
