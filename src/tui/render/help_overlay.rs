use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect_fixed;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Tasks",
        &[
            (" \u{2191}\u{2193}/jk", "Move cursor up/down"),
            (" g/G", "Jump to top/bottom"),
            (" Space/x", "Toggle complete"),
            (" e/Enter", "Edit description"),
            (" d/Del", "Delete task"),
            (" a/i//", "Add a new task"),
            (" c", "Clear completed"),
            (" C", "Clear all (asks first)"),
        ],
    ),
    (
        "Filter",
        &[
            (" 1/2/3", "All / Active / Completed"),
            (" Tab/S-Tab", "Next / previous filter"),
        ],
    ),
    (
        "Text input",
        &[
            (" Enter", "Submit"),
            (" Esc", "Cancel / back"),
            (" Ctrl+W/U", "Delete word / line"),
            (" Alt+\u{2190}\u{2192}", "Move by word"),
        ],
    ),
    (
        "Global",
        &[(" ?", "Toggle this help"), (" q/Ctrl+C", "Quit")],
    ),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));

    for (section, bindings) in BINDINGS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!(" {}", section), header_style)));
        for (key, desc) in *bindings {
            add_binding(&mut lines, key, desc, key_style, desc_style);
        }
    }

    let overlay_area = centered_rect_fixed(46, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
