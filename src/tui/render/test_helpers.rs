use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::Config;
use crate::ops::task_list::TaskList;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over the given `(description, completed)` tasks.
///
/// Created times are hidden so rendered rows don't depend on the clock.
pub fn app_with_tasks(tasks: &[(&str, bool)]) -> App {
    let mut list = TaskList::new();
    for (description, completed) in tasks {
        let id = list.add(description).unwrap();
        if *completed {
            list.set_completed(id, true).unwrap();
        }
    }
    let mut config = Config::default();
    config.ui.show_created_time = false;
    App::new(config, list)
}
