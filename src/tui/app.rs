use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, FilterMode, TaskId};
use crate::ops::commands::{self, Command, ConfirmAction, ConfirmState, Outcome};
use crate::ops::status::{StatusAggregator, StatusCounts};
use crate::ops::task_list::{EventKind, ListEvent, TaskList};
use crate::ops::view::{self, RowView};

use super::field::TextField;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list
    Navigate,
    /// Typing a new task in the input row
    Input,
    /// Edit prompt open over the list
    Edit,
    /// Yes/no popup open
    Confirm,
}

/// Open edit prompt: which task, and the replacement text so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPrompt {
    pub task_id: TaskId,
    pub field: TextField,
}

/// Main application state
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub tasks: TaskList,
    pub filter: FilterMode,
    pub status: StatusAggregator,
    /// List events not yet applied to the cursor
    pub changes: Rc<RefCell<Vec<ListEvent>>>,
    pub mode: Mode,
    pub input: TextField,
    pub edit: Option<EditPrompt>,
    pub confirm: ConfirmState,
    /// Cursor index into the visible rows
    pub cursor: usize,
    /// First visible row
    pub scroll: usize,
    pub show_help: bool,
    /// Transient message in the status row, cleared on the next key
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, mut tasks: TaskList) -> Self {
        let status = StatusAggregator::attach(&mut tasks);

        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        tasks.subscribe(move |event: &ListEvent, all| {
            log::debug!(
                "event=list_changed kind={:?} affected={} total={}",
                event.kind,
                event.affected.len(),
                all.len()
            );
            sink.borrow_mut().push(event.clone());
        });

        let theme = Theme::from_colors(&config.ui.colors);
        let filter = config.app.default_filter;

        App {
            config,
            theme,
            tasks,
            filter,
            status,
            changes,
            mode: Mode::Navigate,
            input: TextField::default(),
            edit: None,
            confirm: ConfirmState::Idle,
            cursor: 0,
            scroll: 0,
            show_help: false,
            status_message: None,
            should_quit: false,
        }
    }

    /// Rows shown under the current filter
    pub fn visible_rows(&self) -> Vec<RowView> {
        view::visible_rows(self.tasks.list(), self.filter)
    }

    pub fn visible_ids(&self) -> Vec<TaskId> {
        view::visible_ids(self.tasks.list(), self.filter)
    }

    /// Task under the cursor, if the filtered view is not empty
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.visible_ids().get(self.cursor).copied()
    }

    pub fn counts(&self) -> StatusCounts {
        self.status.current()
    }

    /// Run a command and bring the cursor in line with whatever changed
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = commands::execute(&mut self.tasks, &mut self.filter, command);
        self.apply_changes();
        outcome
    }

    /// Select a filter, keeping the cursor on the same task when it stays visible
    pub fn set_filter(&mut self, mode: FilterMode) {
        if self.filter == mode {
            return;
        }
        let current = self.cursor_task_id();
        self.dispatch(Command::SetFilter(mode));
        let ids = self.visible_ids();
        self.cursor = current
            .and_then(|id| ids.iter().position(|v| *v == id))
            .unwrap_or(0);
        self.clamp_cursor();
    }

    /// Ask before running `action`
    pub fn request_confirm(&mut self, action: ConfirmAction) {
        self.confirm.request(action);
        self.mode = Mode::Confirm;
    }

    /// Answer the open confirmation popup
    pub fn resolve_confirm(&mut self, confirmed: bool) -> Option<Outcome> {
        let outcome = self
            .confirm
            .resolve(confirmed, &mut self.tasks, &mut self.filter);
        self.mode = Mode::Navigate;
        self.apply_changes();
        outcome
    }

    /// Open the edit prompt for the task under the cursor
    pub fn open_edit(&mut self) {
        let Some(id) = self.cursor_task_id() else {
            return;
        };
        let Some(task) = self.tasks.get(id) else {
            return;
        };
        self.edit = Some(EditPrompt {
            task_id: id,
            field: TextField::with_text(task.description()),
        });
        self.mode = Mode::Edit;
    }

    /// Close the edit prompt. With `accept`, its text replaces the description.
    pub fn close_edit(&mut self, accept: bool) -> Option<Outcome> {
        let prompt = self.edit.take();
        self.mode = Mode::Navigate;
        let prompt = prompt?;
        if !accept {
            return None;
        }
        Some(self.dispatch(Command::Edit {
            id: prompt.task_id,
            text: prompt.field.text().to_string(),
        }))
    }

    /// Drain queued list events: follow newly added tasks, then clamp
    pub fn apply_changes(&mut self) {
        let events: Vec<ListEvent> = self.changes.borrow_mut().drain(..).collect();
        if events.is_empty() {
            return;
        }
        let ids = self.visible_ids();
        let added = events
            .iter()
            .rev()
            .find(|e| e.kind == EventKind::Add)
            .and_then(|e| e.affected.last());
        if let Some(pos) = added.and_then(|id| ids.iter().position(|v| v == id)) {
            self.cursor = pos;
        }
        self.clamp_cursor();
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.visible_ids().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Adjust scroll so the cursor row is inside a window of `height` rows
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
        let count = self.visible_ids().len();
        self.scroll = self.scroll.min(count.saturating_sub(height));
    }
}

/// Run the TUI application
pub fn run(config: Config, tasks: TaskList) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, tasks);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    log::info!("event=app_exit status=ok {}", app.counts());
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
