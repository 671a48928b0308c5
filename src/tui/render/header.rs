use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::tui::app::App;

/// Render the header: title, filter selector, separator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // filter selector
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let title = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            app.config.app.title.clone(),
            Style::default()
                .fg(app.theme.blue)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).style(Style::default().bg(bg)), chunks[0]);

    frame.render_widget(
        Paragraph::new(filter_line(app)).style(Style::default().bg(bg)),
        chunks[1],
    );

    let sep = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(sep).style(Style::default().fg(app.theme.dim).bg(bg)),
        chunks[2],
    );
}

/// "Show: (•) All  ( ) Active  ( ) Completed", one radio per mode
fn filter_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        " Show: ",
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    for (i, mode) in FilterMode::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().bg(bg)));
        }
        let selected = mode == app.filter;
        let (radio, style) = if selected {
            (
                "(\u{2022})",
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("( )", Style::default().fg(app.theme.text).bg(bg))
        };
        spans.push(Span::styled(format!("{} {}", radio, mode.label()), style));
        spans.push(Span::styled(
            format!(" {}", i + 1),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
