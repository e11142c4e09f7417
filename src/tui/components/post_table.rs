//! # PostTable Component
//!
//! The list screen body: one row per post with the title, how long ago it
//! was posted, and its authors.
//!
//! Split the same way as the other stateful components:
//!
//! - `PostTableState` lives in `TuiState` and survives across frames. It owns
//!   the cursor (`TableState`) and remembers the last viewport height so
//!   PageUp/PageDown move by a screenful.
//! - `PostTable` is built fresh each frame with borrowed rows and renders them.
//!
//! The cursor is a row index into `ListScreen::posts`. `sync` keeps it in range
//! whenever the row count changes, so Enter never points past the end.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::Text;
use ratatui::widgets::{Cell, Row, Table, TableState};
use unicode_width::UnicodeWidthChar;

use crate::core::relative_time::natural_time;
use crate::ghost::PostSummary;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

const POSTED_WIDTH: u16 = 26;
const AUTHORS_WIDTH: u16 = 28;

/// Events emitted by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// Enter was pressed on this row.
    Open(usize),
}

#[derive(Debug, Default)]
pub struct PostTableState {
    pub table: TableState,
    /// Row count seen at the last `sync`.
    len: usize,
    /// Body rows visible in the last frame (header excluded).
    viewport_height: u16,
}

impl PostTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp the cursor to `len` rows; selects the first row of a fresh table.
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        let selected = match (len, self.table.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(i)) => Some(i.min(n - 1)),
        };
        self.table.select(selected);
        if selected.is_none() {
            *self.table.offset_mut() = 0;
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table.selected()
    }

    fn page(&self) -> usize {
        usize::from(self.viewport_height.max(1))
    }

    fn move_to(&mut self, row: usize) {
        if self.len > 0 {
            self.table.select(Some(row.min(self.len - 1)));
        }
    }
}

impl EventHandler for PostTableState {
    type Event = TableEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TableEvent> {
        let current = self.selected().unwrap_or(0);
        match event {
            TuiEvent::CursorUp => self.move_to(current.saturating_sub(1)),
            TuiEvent::CursorDown => self.move_to(current + 1),
            TuiEvent::PageUp => self.move_to(current.saturating_sub(self.page())),
            TuiEvent::PageDown => self.move_to(current + self.page()),
            TuiEvent::Home => self.move_to(0),
            TuiEvent::End => self.move_to(self.len.saturating_sub(1)),
            TuiEvent::Submit => return self.selected().map(TableEvent::Open),
            _ => {}
        }
        None
    }
}

pub struct PostTable<'a> {
    pub state: &'a mut PostTableState,
    pub posts: &'a [PostSummary],
    /// Reference instant for the "Posted" column.
    pub now: DateTime<Utc>,
    pub theme: &'a Theme,
}

impl Component for PostTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.posts.len());
        self.state.viewport_height = area.height.saturating_sub(1);

        let title_width = area
            .width
            .saturating_sub(POSTED_WIDTH + AUTHORS_WIDTH + 2) as usize;

        let rows = self.posts.iter().map(|post| {
            Row::new(vec![
                Cell::from(truncate(&post.title, title_width)),
                Cell::from(natural_time(post.created_at, self.now)),
                Cell::from(truncate(&post.author_names(), AUTHORS_WIDTH as usize)),
            ])
        });

        let header = Row::new(vec!["Title", "Posted", "Authors"]).style(
            self.theme
                .base()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        );

        let table = Table::new(
            rows,
            [
                Constraint::Min(10),
                Constraint::Length(POSTED_WIDTH),
                Constraint::Length(AUTHORS_WIDTH),
            ],
        )
        .header(header)
        .style(self.theme.base())
        .row_highlight_style(self.theme.selection())
        .column_spacing(1);

        frame.render_stateful_widget(table, area, &mut self.state.table);
    }
}

/// Cut `text` to at most `max` terminal columns, marking the cut with '…'.
fn truncate(text: &str, max: usize) -> Text<'static> {
    let mut width = 0;
    let mut out = String::new();
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= max {
        return Text::raw(text.to_owned());
    }
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        width += w;
        out.push(ch);
    }
    if max > 0 {
        out.push('…');
    }
    Text::raw(out)
}
