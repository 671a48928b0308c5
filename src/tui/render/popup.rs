use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::commands::ConfirmAction;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{centered_rect_fixed, visible_window};

const POPUP_W: u16 = 50;

/// Render the yes/no popup for the pending confirmation
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(action) = app.confirm.pending() else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let warn_style = Style::default().fg(app.theme.red).bg(bg);
    let key_style = Style::default().fg(app.theme.dim).bg(bg);

    let inner_w = POPUP_W.min(area.width).saturating_sub(4) as usize;
    let title = match action {
        ConfirmAction::ClearAll => " Clear All Tasks",
        ConfirmAction::DeleteTask(_) => " Delete Task",
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(title, header_style)),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", action.prompt()), bright_style)),
    ];
    if let ConfirmAction::DeleteTask(id) = action
        && let Some(task) = app.tasks.get(*id)
    {
        lines.push(Line::from(Span::styled(
            format!(
                "  \"{}\"",
                unicode::truncate_to_width(task.description(), inner_w.saturating_sub(4))
            ),
            text_style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  This action cannot be undone.",
        warn_style,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("y", key_style),
        Span::styled(" confirm  ", text_style),
        Span::styled("n", key_style),
        Span::styled(" cancel", text_style),
    ]));

    render_box(frame, app, area, lines);
}

/// Render the edit prompt with its pre-filled text field
pub fn render_edit_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.edit else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let field_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.input_bg);
    let key_style = Style::default().fg(app.theme.dim).bg(bg);

    const LABEL: &str = "  Task: ";
    let popup_w = POPUP_W.min(area.width);
    // Border (2) + label + one spare cell for the cursor
    let field_w = (popup_w as usize).saturating_sub(2 + LABEL.len() + 1);

    let (shown, cursor_cells) =
        visible_window(prompt.field.text(), prompt.field.cursor(), field_w);
    let padding = field_w.saturating_sub(unicode::display_width(&shown));

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(" Edit Task", header_style)),
        Line::from(""),
        Line::from(Span::styled("  Edit task description:", text_style)),
        Line::from(vec![
            Span::styled(LABEL, text_style),
            Span::styled(shown, field_style),
            Span::styled(" ".repeat(padding), field_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Enter", key_style),
            Span::styled(" save  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" cancel", text_style),
        ]),
    ];

    let popup = render_box(frame, app, area, lines);
    // Field is on the fourth line inside the border
    let x = popup.x + 1 + (LABEL.len() + cursor_cells) as u16;
    let y = popup.y + 1 + 3;
    if x < popup.right().saturating_sub(1) && y < popup.bottom().saturating_sub(1) {
        frame.set_cursor_position(Position::new(x, y));
    }
}

/// Draw `lines` in a bordered box centered in `area`; returns the box rect
fn render_box(frame: &mut Frame, app: &App, area: Rect, lines: Vec<Line>) -> Rect {
    let bg = app.theme.background;
    let popup_h = (lines.len() as u16) + 2;
    let overlay_area = centered_rect_fixed(POPUP_W, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
    overlay_area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_clear_all_popup_text() {
        let mut app = app_with_tasks(&[("Buy milk", false)]);
        app.request_confirm(ConfirmAction::ClearAll);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(output.contains("Clear All Tasks"));
        assert!(output.contains("Are you sure you want to delete all tasks?"));
        assert!(output.contains("This action cannot be undone."));
        assert!(output.contains("y confirm  n cancel"));
    }

    #[test]
    fn test_delete_popup_names_the_task() {
        let mut app = app_with_tasks(&[("Buy milk", false)]);
        let id = app.tasks.list()[0].id();
        app.request_confirm(ConfirmAction::DeleteTask(id));
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(output.contains("Delete Task"));
        assert!(output.contains("\"Buy milk\""));
    }

    #[test]
    fn test_no_popup_when_idle() {
        let app = app_with_tasks(&[("Buy milk", false)]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert_eq!(output, "");
    }

    #[test]
    fn test_edit_prompt_is_prefilled() {
        let mut app = app_with_tasks(&[("Buy milk", false)]);
        app.open_edit();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_edit_prompt(frame, &app, area);
        });
        assert!(output.contains("Edit Task"));
        assert!(output.contains("Edit task description:"));
        assert!(output.contains("Task: Buy milk"));
        assert!(output.contains("Enter save  Esc cancel"));
    }
}
