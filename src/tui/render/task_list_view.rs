use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::ops::view::RowView;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{pad_to_width, spans_width};

/// Render the filtered task list, one row per visible task
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = app.visible_rows();
    let bg = app.theme.background;

    if rows.is_empty() {
        let message = match app.filter {
            FilterMode::All => " No tasks yet. Press a to add one.",
            FilterMode::Active => " No active tasks",
            FilterMode::Completed => " No completed tasks",
        };
        let empty = Paragraph::new(message).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    app.scroll_to_cursor(height);

    let width = area.width as usize;
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
        .map(|(i, row)| row_line(app, row, i == app.cursor, width))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// ` [x] description        09:41`
fn row_line(app: &App, row: &RowView, is_cursor: bool, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let marker = if is_cursor { "\u{258C}" } else { " " };
    let checkbox = if row.completed { "[x]" } else { "[ ]" };
    let checkbox_color = if row.completed {
        theme.green
    } else {
        theme.text
    };

    let mut spans: Vec<Span> = vec![
        Span::styled(marker, base.fg(theme.highlight)),
        Span::styled(checkbox, base.fg(checkbox_color)),
        Span::styled(" ", base),
    ];

    let time = if app.config.ui.show_created_time {
        format!("  {} ", row.created_label())
    } else {
        String::new()
    };

    let mut desc_style = base.fg(theme.task_color(row.completed));
    if row.completed {
        desc_style = desc_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if is_cursor {
        desc_style = desc_style.add_modifier(Modifier::BOLD);
    }
    let budget = width.saturating_sub(spans_width(&spans) + unicode::display_width(&time));
    spans.push(Span::styled(
        unicode::truncate_to_width(&row.description, budget),
        desc_style,
    ));

    if !time.is_empty() {
        let time_width = unicode::display_width(&time);
        pad_to_width(&mut spans, width.saturating_sub(time_width), base);
        spans.push(Span::styled(time, base.fg(theme.dim)));
    } else {
        pad_to_width(&mut spans, width, base);
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &mut App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| {
            render_task_list(frame, app, area);
        })
    }

    #[test]
    fn test_rows_show_checkbox_and_description() {
        let mut app = app_with_tasks(&[("Buy milk", false), ("Pay bills", true)]);
        let output = render(&mut app, 40, 5);
        assert_eq!(output, "\u{258C}[ ] Buy milk\n [x] Pay bills");
    }

    #[test]
    fn test_filter_hides_rows() {
        let mut app = app_with_tasks(&[("Buy milk", false), ("Pay bills", true)]);
        app.set_filter(FilterMode::Completed);
        let output = render(&mut app, 40, 5);
        assert_eq!(output, "\u{258C}[x] Pay bills");
    }

    #[test]
    fn test_created_time_is_right_aligned() {
        let mut app = app_with_tasks(&[("Buy milk", false)]);
        app.config.ui.show_created_time = true;
        let label = app.tasks.list()[0].created().format("%H:%M").to_string();
        let output = render(&mut app, 30, 2);
        let first = output.lines().next().unwrap();
        assert!(first.starts_with("\u{258C}[ ] Buy milk"));
        assert!(first.ends_with(&label));
        assert_eq!(unicode::display_width(first), 29);
    }

    #[test]
    fn test_long_descriptions_are_truncated() {
        let mut app = app_with_tasks(&[("Write the quarterly report for the board", false)]);
        let output = render(&mut app, 20, 2);
        assert_eq!(output, "\u{258C}[ ] Write the quar\u{2026}");
    }

    #[test]
    fn test_empty_messages_per_filter() {
        let mut app = app_with_tasks(&[]);
        assert_eq!(render(&mut app, 40, 3), " No tasks yet. Press a to add one.");
        app.set_filter(FilterMode::Completed);
        assert_eq!(render(&mut app, 40, 3), " No completed tasks");
    }

    #[test]
    fn test_list_scrolls_to_cursor() {
        let names: Vec<String> = (1..=10).map(|i| format!("task {i}")).collect();
        let pairs: Vec<(&str, bool)> = names.iter().map(|n| (n.as_str(), false)).collect();
        let mut app = app_with_tasks(&pairs);
        app.cursor = 7;
        let output = render(&mut app, 20, 3);
        assert_eq!(output, " [ ] task 6\n [ ] task 7\n\u{258C}[ ] task 8");
    }
}
