use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::{pad_to_width, spans_width, visible_window};

const PLACEHOLDER: &str = "What needs to be done?";
const PROMPT: &str = " > ";

/// Render the new-task input row with its button labels
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // separator
            Constraint::Length(1), // input
        ])
        .split(area);

    let bg = app.theme.background;
    let sep = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(sep).style(Style::default().fg(app.theme.dim).bg(bg)),
        chunks[0],
    );

    let focused = app.mode == Mode::Input;
    let field_bg = if focused { app.theme.input_bg } else { bg };
    let width = chunks[1].width as usize;

    let buttons = button_spans(app);
    let buttons_width = spans_width(&buttons);
    // Drop the buttons on narrow terminals rather than squeeze the text
    let show_buttons = width >= buttons_width + PROMPT.len() + 12;
    let budget = width
        .saturating_sub(PROMPT.len())
        .saturating_sub(if show_buttons { buttons_width + 1 } else { 0 });

    let prompt_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let mut spans: Vec<Span> = vec![Span::styled(
        PROMPT,
        Style::default().fg(prompt_color).bg(field_bg),
    )];

    let text = app.input.text();
    let (shown, cursor_cells) = if text.is_empty() {
        (String::new(), 0)
    } else {
        visible_window(text, app.input.cursor(), budget)
    };

    if shown.is_empty() && !focused {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(field_bg),
        ));
    } else {
        spans.push(Span::styled(
            shown,
            Style::default().fg(app.theme.text_bright).bg(field_bg),
        ));
    }

    if show_buttons {
        pad_to_width(&mut spans, PROMPT.len() + budget, Style::default().bg(field_bg));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.extend(buttons);
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[1],
    );

    if focused {
        let x = chunks[1].x + (PROMPT.len() + cursor_cells).min(width.saturating_sub(1)) as u16;
        frame.set_cursor_position(Position::new(x, chunks[1].y));
    }
}

/// `Enter Add Task` and `c Clear Completed`, styled like buttons
fn button_spans(app: &App) -> Vec<Span<'static>> {
    let label = |bg: Color| {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };
    vec![
        Span::styled(" Enter Add Task ", label(app.theme.green)),
        Span::styled(" ", Style::default().bg(app.theme.background)),
        Span::styled(" c Clear Completed ", label(app.theme.red)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App, w: u16) -> String {
        render_to_string(w, 2, |frame, area| {
            render_input_row(frame, app, area);
        })
    }

    #[test]
    fn test_placeholder_when_idle() {
        let app = app_with_tasks(&[]);
        let output = render(&app, 80);
        let line = output.lines().nth(1).unwrap();
        assert!(line.starts_with(" > What needs to be done?"));
        assert!(line.ends_with(" c Clear Completed"));
        assert!(line.contains("Add Task"));
    }

    #[test]
    fn test_typed_text_replaces_placeholder() {
        let mut app = app_with_tasks(&[]);
        app.mode = Mode::Input;
        app.input.insert_str("Buy milk");
        let output = render(&app, 80);
        let line = output.lines().nth(1).unwrap();
        assert!(line.starts_with(" > Buy milk"));
        assert!(!line.contains(PLACEHOLDER));
    }

    #[test]
    fn test_narrow_terminal_drops_buttons() {
        let app = app_with_tasks(&[]);
        let output = render(&app, 30);
        let line = output.lines().nth(1).unwrap();
        assert!(!line.contains("Add Task"));
        assert!(line.starts_with(" > What needs to be done?"));
    }

    #[test]
    fn test_long_input_shows_tail_at_cursor() {
        let mut app = app_with_tasks(&[]);
        app.mode = Mode::Input;
        app.input.insert_str("a very long task description that overflows");
        let output = render(&app, 20);
        let line = output.lines().nth(1).unwrap();
        assert!(line.starts_with(" > \u{2026}"));
        assert!(line.ends_with("overflows"));
    }

    #[test]
    fn test_cursor_before_ellipsis_scrolls_text() {
        let mut app = app_with_tasks(&[]);
        app.mode = Mode::Input;
        app.input.insert_str("abcdefghijklmnopqrstuvwxyz");
        app.input.home();

        // 20 columns without buttons leaves 17 cells for text
        for _ in 0..15 {
            app.input.move_right();
        }
        let output = render(&app, 20);
        assert_eq!(output.lines().nth(1).unwrap(), " > abcdefghijklmnop\u{2026}");

        app.input.move_right();
        let output = render(&app, 20);
        let line = output.lines().nth(1).unwrap();
        assert_eq!(line, " > abcdefghijklmnop");
        assert!(!line.contains('\u{2026}'));
    }
}
