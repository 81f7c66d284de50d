use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use tracing::{info, warn};

use crate::api::{ApiClient, Transport};
use crate::form::ClickTarget;
use crate::model::{ActiveView, ClientConfig};
use crate::ops::OpError;
use crate::ops::dispatch::{Event, Repaint, Session};
use crate::render::{filter_options, task_board};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the board's search box
    Search,
    /// A create/edit form is open
    Form,
    /// Waiting for y/n on a delete
    Confirm,
}

/// What a pending y/n confirmation would delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Project { id: u64, name: String },
    Task { id: u64, title: String },
}

impl DeleteTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            DeleteTarget::Project { .. } => "Delete this project?",
            DeleteTarget::Task { .. } => "Delete this task?",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DeleteTarget::Project { name, .. } => name,
            DeleteTarget::Task { title, .. } => title,
        }
    }

    fn event(&self) -> Event {
        match self {
            DeleteTarget::Project { id, .. } => Event::DeleteProject(*id),
            DeleteTarget::Task { id, .. } => Event::DeleteTask(*id),
        }
    }
}

/// Cursor on the task board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardCursor {
    pub column: usize,
    pub row: usize,
}

/// Main application state
pub struct App {
    pub session: Session,
    transport: Box<dyn Transport>,
    pub api_base: String,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor for projects view
    pub project_cursor: usize,
    pub board_cursor: BoardCursor,
    pub pending_delete: Option<DeleteTarget>,
    /// Last outcome shown in the status row
    pub status_message: Option<String>,
    pub status_is_error: bool,
    /// Screen area of the open modal, set while rendering
    pub modal_area: Option<Rect>,
}

impl App {
    pub fn new(transport: Box<dyn Transport>, api_base: impl Into<String>, theme: Theme) -> Self {
        App {
            session: Session::new(),
            transport,
            api_base: api_base.into(),
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            project_cursor: 0,
            board_cursor: BoardCursor::default(),
            pending_delete: None,
            status_message: None,
            status_is_error: false,
            modal_area: None,
        }
    }

    /// Initial load. A failure leaves the app running, offline, with the
    /// error in the status row.
    pub fn init(&mut self) {
        match self.session.init(self.transport.as_ref()) {
            Ok(_) => info!(api = %self.api_base, "dashboard loaded"),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Apply an event and fold the outcome into the UI state.
    ///
    /// Deletes only reach here after the y/n popup, so the confirmation the
    /// operation asks for is already answered.
    pub fn dispatch(&mut self, event: Event) -> Result<Repaint, OpError> {
        let result = self
            .session
            .handle(event, self.transport.as_ref(), &mut |_: &str| true);
        match &result {
            Ok(repaint) => {
                if repaint.projects || repaint.tasks {
                    self.clamp_cursors();
                }
                if self.session.modal().is_open() {
                    self.mode = Mode::Form;
                } else if self.mode == Mode::Form {
                    self.mode = Mode::Navigate;
                }
            }
            Err(e) => {
                warn!(error = %e, "event failed");
                self.set_error(e.to_string());
            }
        }
        result
    }

    /// Like [`App::dispatch`], with a status message on success
    pub fn dispatch_with_message(&mut self, event: Event, message: &str) {
        if self.dispatch(event).is_ok() {
            self.set_message(message);
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    pub fn active_view(&self) -> ActiveView {
        self.session.state().active_view()
    }

    /// Id of the project under the cursor in the projects view
    pub fn selected_project(&self) -> Option<u64> {
        self.session
            .state()
            .projects()
            .get(self.project_cursor)
            .map(|p| p.id)
    }

    /// Id of the task under the cursor on the board
    pub fn selected_task(&self) -> Option<u64> {
        let board = task_board(self.session.state());
        board
            .get(self.board_cursor.column)?
            .cards
            .get(self.board_cursor.row)
            .map(|c| c.id)
    }

    /// Ask for confirmation before deleting what is selected in the
    /// current view
    pub fn request_delete(&mut self) {
        let state = self.session.state();
        let target = match self.active_view() {
            ActiveView::Projects => self.selected_project().and_then(|id| {
                state.find_project(id).map(|p| DeleteTarget::Project {
                    id,
                    name: p.display_name().to_string(),
                })
            }),
            ActiveView::Tasks => self.selected_task().and_then(|id| {
                state.find_task(id).map(|t| DeleteTarget::Task {
                    id,
                    title: t.display_title().to_string(),
                })
            }),
            ActiveView::Dashboard => None,
        };
        if let Some(target) = target {
            self.pending_delete = Some(target);
            self.mode = Mode::Confirm;
        }
    }

    /// Answer the pending confirmation
    pub fn resolve_delete(&mut self, confirmed: bool) {
        self.mode = Mode::Navigate;
        let Some(target) = self.pending_delete.take() else {
            return;
        };
        if confirmed {
            self.dispatch_with_message(target.event(), "Deleted");
        }
    }

    /// Step the board's project filter to the next option, wrapping
    pub fn cycle_project_filter(&mut self) {
        let state = self.session.state();
        let options = filter_options(state);
        let current = state.project_filter().as_value();
        let idx = options
            .iter()
            .position(|o| o.value == current)
            .map_or(0, |i| (i + 1) % options.len());
        if let Some(option) = options.get(idx) {
            let value = option.value.clone();
            let _ = self.dispatch(Event::SetProjectFilter(value));
        }
    }

    pub fn move_row(&mut self, delta: isize) {
        match self.active_view() {
            ActiveView::Projects => {
                let len = self.session.state().projects().len();
                self.project_cursor = step(self.project_cursor, delta, len);
            }
            ActiveView::Tasks => {
                let len = self.column_len(self.board_cursor.column);
                self.board_cursor.row = step(self.board_cursor.row, delta, len);
            }
            ActiveView::Dashboard => {}
        }
    }

    pub fn move_column(&mut self, delta: isize) {
        if self.active_view() != ActiveView::Tasks {
            return;
        }
        let columns = task_board(self.session.state()).len();
        self.board_cursor.column = step(self.board_cursor.column, delta, columns);
        self.clamp_cursors();
    }

    fn column_len(&self, column: usize) -> usize {
        task_board(self.session.state())
            .get(column)
            .map_or(0, |c| c.cards.len())
    }

    /// Keep cursors inside the lists after data or filters change
    pub fn clamp_cursors(&mut self) {
        let projects = self.session.state().projects().len();
        self.project_cursor = self.project_cursor.min(projects.saturating_sub(1));
        let rows = self.column_len(self.board_cursor.column);
        self.board_cursor.row = self.board_cursor.row.min(rows.saturating_sub(1));
    }

    /// A left click while the modal is showing: inside it is content, the
    /// rest of the screen is backdrop
    pub fn click_at(&mut self, column: u16, row: u16) {
        if self.mode != Mode::Form {
            return;
        }
        let target = match self.modal_area {
            Some(area) if area.contains(Position::new(column, row)) => ClickTarget::Content,
            _ => ClickTarget::Backdrop,
        };
        let _ = self.dispatch(Event::ClickModal(target));
    }
}

/// Move `current` by `delta` within `0..len`, stopping at the ends
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

/// Run the TUI application
pub fn run(client: ApiClient, config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let api_base = client.base_url().to_string();
    let mut app = App::new(Box::new(client), api_base, Theme::from_config(&config.ui));
    app.init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

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
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                TermEvent::Mouse(mouse)
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    app.click_at(mouse.column, mouse.row);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
