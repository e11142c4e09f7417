//! Centered placeholder for screens with nothing to show yet: a spinner while
//! loading, or a message (with a retry hint for failures).

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status<'a> {
    Loading(&'a str),
    Message(&'a str),
    Error(&'a str),
}

pub struct StatusPanel<'a> {
    pub status: Status<'a>,
    pub spinner_frame: usize,
    pub theme: &'a Theme,
}

impl StatusPanel<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let base = self.theme.base();
        match self.status {
            Status::Loading(what) => {
                let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
                vec![Line::from(vec![
                    Span::styled(format!("{glyph} "), base.fg(self.theme.accent)),
                    Span::styled(what.to_owned(), base),
                ])]
            }
            Status::Message(text) => {
                vec![Line::from(Span::styled(text.to_owned(), base.fg(self.theme.muted)))]
            }
            Status::Error(message) => vec![
                Line::from(Span::styled(
                    message.to_owned(),
                    base.fg(self.theme.error).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled("Press r to retry", base.fg(self.theme.muted))),
            ],
        }
    }
}

impl Component for StatusPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .centered()
            .style(self.theme.base())
            .wrap(Wrap { trim: true });
        // Wrapped height, so long errors keep the retry hint on screen
        let height = paragraph.line_count(area.width).min(usize::from(area.height)) as u16;
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);

        frame.render_widget(paragraph, middle);
    }
}
