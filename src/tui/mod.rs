//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each iteration:
//!
//! 1. Draws a frame if anything changed (input, fetch result, clock tick).
//! 2. Polls the terminal and drains every pending event.
//! 3. Drains actions sent back by background fetch tasks.
//!
//! Global keys (`q`, `d`, `r`) go straight to `core::update`. Everything else
//! goes to the component for the screen on top, whose high-level events
//! (`TableEvent::Open`, `ViewerEvent::Close`) become actions in turn.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: redraws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 250ms and redraws only on events or when the
//!   header clock changes.
//!
//! ## Background Fetches
//!
//! `Effect::FetchPosts` and `Effect::FetchPost` spawn tokio tasks that report
//! back over an mpsc channel. `ScreenTasks` holds their abort handles: a new
//! fetch for a screen aborts the old one, popping the detail screen aborts its
//! fetch, and leaving the loop aborts everything.

mod component;
mod components;
mod event;
pub mod markdown;
mod tasks;
pub mod theme;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use chrono::{Local, Utc};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info, warn};
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::document::load_post;
use crate::core::state::{App, RequestId, Screen};
use crate::ghost::PostSource;
use crate::tui::component::EventHandler;
use crate::tui::components::{PostTableState, PostViewerState, TableEvent, ViewerEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::tasks::{ScreenTasks, TaskSlot};

const LOADING_POLL: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub table: PostTableState,
    pub viewer: PostViewerState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Leaves raw mode and the alternate screen on every exit path, including
/// a failed draw returning early through `?`.
struct TerminalRestoreGuard {
    restore: fn(),
}

impl TerminalRestoreGuard {
    fn new() -> Self {
        Self {
            restore: ratatui::restore,
        }
    }
}

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Everything the loop needs to carry out an `Effect`.
struct Runtime {
    source: Arc<dyn PostSource>,
    tx: mpsc::Sender<Action>,
    tasks: ScreenTasks,
}

impl Runtime {
    /// Returns false when the loop should stop.
    fn apply(&mut self, effect: Effect, tui: &mut TuiState) -> bool {
        match effect {
            Effect::None => {}
            Effect::FetchPosts(request) => {
                let handle = spawn_list_fetch(self.source.clone(), request, self.tx.clone());
                self.tasks.replace(TaskSlot::List, handle);
            }
            Effect::FetchPost { request, slug } => {
                let handle = spawn_post_fetch(self.source.clone(), request, slug, self.tx.clone());
                self.tasks.replace(TaskSlot::Detail, handle);
                tui.viewer.reset();
            }
            Effect::CancelPostFetch => {
                self.tasks.cancel(TaskSlot::Detail);
                tui.viewer.reset();
            }
            Effect::Quit => return false,
        }
        true
    }
}

pub fn run(config: ResolvedConfig, source: Arc<dyn PostSource>) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let (tx, rx) = mpsc::channel();
    let mut runtime = Runtime {
        source,
        tx,
        tasks: ScreenTasks::default(),
    };

    let mut terminal = ratatui::init();
    // Dropped in reverse order: terminal modes first, then the screen
    let _terminal_restore_guard = TerminalRestoreGuard::new();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // The list loads as soon as the app starts
    let effect = update(&mut app, Action::Refresh);
    runtime.apply(effect, &mut tui);

    let start_time = Instant::now();
    let mut needs_redraw = true;
    let mut last_clock = String::new();

    'main: loop {
        let loading = app.is_loading();
        let clock = Local::now().format("%H:%M:%S").to_string();
        if loading || clock != last_clock {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let now = Utc::now();
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame, now, &clock))?;
            last_clock = clock;
            needs_redraw = false;
        }

        let timeout = if loading { LOADING_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(event, &app, &mut tui) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            let effect = update(&mut app, action);
            if !runtime.apply(effect, &mut tui) {
                break 'main;
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            if !runtime.apply(effect, &mut tui) {
                break 'main;
            }
        }
    }

    info!("Shutting down");
    runtime.tasks.cancel_all();
    Ok(())
}

/// Global bindings first, then the component for the screen on top.
fn route_event(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::ToggleTheme => Some(Action::ToggleTheme),
        TuiEvent::Refresh => Some(Action::Refresh),
        _ => match app.current() {
            Screen::List(_) => match tui.table.handle_event(&event)? {
                TableEvent::Open(row) => Some(Action::OpenPost(row)),
            },
            Screen::Detail(_) => match tui.viewer.handle_event(&event)? {
                ViewerEvent::Close => Some(Action::PopScreen),
            },
        },
    }
}

fn spawn_list_fetch(
    source: Arc<dyn PostSource>,
    request: RequestId,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning post list fetch (request {})", request);
    let handle = tokio::spawn(async move {
        let started = Instant::now();
        let result = source.fetch_all_posts().await;
        debug!(
            "Post list fetch finished in {}ms (request {})",
            started.elapsed().as_millis(),
            request
        );
        if tx.send(Action::PostsLoaded { request, result }).is_err() {
            warn!("Failed to send post list (request {}): receiver dropped", request);
        }
    });
    handle.abort_handle()
}

fn spawn_post_fetch(
    source: Arc<dyn PostSource>,
    request: RequestId,
    slug: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning fetch for post '{}' (request {})", slug, request);
    let handle = tokio::spawn(async move {
        let result = load_post(source.as_ref(), &slug).await;
        if tx.send(Action::PostLoaded { request, result }).is_err() {
            warn!("Failed to send post '{}': receiver dropped", slug);
        }
    });
    handle.abort_handle()
}
