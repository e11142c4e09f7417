//! # PostViewer Component
//!
//! Scrollable view of a converted post. The document is rendered once per
//! (markdown, theme) pair and cached in `PostViewerState`; scrolling only moves
//! the `ScrollViewState` offset.
//!
//! The state is reset whenever the detail screen starts a new fetch or is
//! popped, so reopening a post starts at the top.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::document::Document;
use crate::core::state::ThemeMode;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::markdown;
use crate::tui::theme::Theme;

/// Events emitted by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Esc: leave the post.
    Close,
}

struct RenderedDocument {
    source: String,
    mode: ThemeMode,
    text: Text<'static>,
}

#[derive(Default)]
pub struct PostViewerState {
    pub scroll_state: ScrollViewState,
    rendered: Option<RenderedDocument>,
    content_height: u16,
    viewport_height: u16,
}

impl PostViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top with nothing cached.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    fn text_for(&mut self, document: &Document, theme: &Theme) -> Text<'static> {
        let fresh = self
            .rendered
            .as_ref()
            .is_some_and(|r| r.mode == theme.mode && r.source == document.markdown());
        if !fresh {
            self.rendered = Some(RenderedDocument {
                source: document.markdown().to_owned(),
                mode: theme.mode,
                text: markdown::render(document.markdown(), theme),
            });
        }
        self.rendered
            .as_ref()
            .map(|r| r.text.clone())
            .unwrap_or_default()
    }
}

impl EventHandler for PostViewerState {
    type Event = ViewerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ViewerEvent> {
        match event {
            TuiEvent::Escape => return Some(ViewerEvent::Close),
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::Home => self.scroll_state.scroll_to_top(),
            TuiEvent::End => self.scroll_state.set_offset(Position {
                x: 0,
                y: self.max_offset(),
            }),
            _ => {}
        }
        self.clamp_scroll();
        None
    }
}

pub struct PostViewer<'a> {
    pub state: &'a mut PostViewerState,
    pub document: &'a Document,
    pub theme: &'a Theme,
}

impl Component for PostViewer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column
        let text = self.state.text_for(self.document, self.theme);
        let paragraph = Paragraph::new(text)
            .style(self.theme.base())
            .wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width).min(usize::from(u16::MAX)) as u16;

        self.state.content_height = height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
