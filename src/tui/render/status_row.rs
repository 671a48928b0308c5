use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row: counts on the left, message or key hint on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.input_bg;
    let width = area.width as usize;

    let counts = format!(" {}", app.counts());
    let mut spans = vec![Span::styled(
        counts.clone(),
        Style::default().fg(app.theme.text).bg(bg),
    )];

    let (hint, hint_color) = match (&app.status_message, app.mode) {
        (Some(msg), _) => (msg.as_str(), app.theme.text_bright),
        (None, _) if !app.config.ui.show_key_hints => ("", app.theme.dim),
        (None, Mode::Navigate) => ("a add  e edit  d delete  ? help", app.theme.dim),
        (None, Mode::Input) => ("Enter add  Esc back", app.theme.dim),
        (None, Mode::Edit) => ("Enter save  Esc cancel", app.theme.dim),
        (None, Mode::Confirm) => ("y confirm  n cancel", app.theme.dim),
    };

    let content_width = unicode::display_width(&counts);
    let hint_width = unicode::display_width(hint);
    if !hint.is_empty() && content_width + hint_width + 2 < width {
        let padding = width - content_width - hint_width - 1;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(hint_color).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App, w: u16) -> String {
        render_to_string(w, 1, |frame, area| {
            render_status_row(frame, app, area);
        })
    }

    #[test]
    fn test_shows_counts_and_hint() {
        let app = app_with_tasks(&[("Buy milk", false), ("Pay bills", true)]);
        let output = render(&app, 80);
        assert!(output.starts_with(" 2 total | 1 active | 1 completed"));
        assert!(output.ends_with("? help"));
    }

    #[test]
    fn test_message_replaces_hint() {
        let mut app = app_with_tasks(&[("Pay bills", true)]);
        app.status_message = Some("cleared 1 completed task".into());
        let output = render(&app, 80);
        assert!(output.ends_with("cleared 1 completed task"));
        assert!(!output.contains("? help"));
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let mut app = app_with_tasks(&[]);
        app.config.ui.show_key_hints = false;
        assert_eq!(render(&app, 80), " 0 total | 0 active | 0 completed");
    }

    #[test]
    fn test_narrow_row_keeps_counts_only() {
        let app = app_with_tasks(&[("Buy milk", false)]);
        assert_eq!(render(&app, 40), " 1 total | 1 active | 0 completed");
    }
}
