pub mod header;
pub mod help_overlay;
mod helpers;
pub mod input_row;
pub mod popup;
pub mod status_row;
pub mod task_list_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (3 rows) | task list | input (2 rows) | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    task_list_view::render_task_list(frame, app, chunks[1]);
    input_row::render_input_row(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Modal prompts are drawn over everything
    match app.mode {
        Mode::Edit => popup::render_edit_prompt(frame, app, area),
        Mode::Confirm => popup::render_confirm_popup(frame, app, area),
        Mode::Navigate | Mode::Input => {}
    }

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::commands::ConfirmAction;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_full_screen_layout() {
        let mut app = app_with_tasks(&[("Buy milk", false), ("Pay bills", true)]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " Todo List");
        assert!(lines[1].contains("(•) All"));
        assert!(lines[3].contains("[ ] Buy milk"));
        assert!(lines[4].contains("[x] Pay bills"));
        assert!(output.contains("What needs to be done?"));
        assert!(output.contains("2 total | 1 active | 1 completed"));
    }

    #[test]
    fn test_confirm_popup_over_list() {
        let mut app = app_with_tasks(&[("Buy milk", false)]);
        app.request_confirm(ConfirmAction::ClearAll);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Clear All Tasks"));
        assert!(output.contains("Buy milk"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = app_with_tasks(&[("Buy milk", false)]);
        app.show_help = true;
        let output = render_to_string(10, 3, |frame, _| render(frame, &mut app));
        assert!(!output.is_empty());
    }
}
