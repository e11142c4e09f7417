//! Key hints for the screen on top.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Which set of bindings to advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    List,
    Detail,
}

impl FooterMode {
    fn bindings(self) -> &'static [(&'static str, &'static str)] {
        match self {
            FooterMode::List => &[
                ("↑↓", "Move"),
                ("Enter", "Open"),
                ("r", "Refresh"),
                ("d", "Theme"),
                ("q", "Quit"),
            ],
            FooterMode::Detail => &[
                ("↑↓", "Scroll"),
                ("Esc", "Back"),
                ("r", "Refresh"),
                ("d", "Theme"),
                ("q", "Quit"),
            ],
        }
    }
}

pub struct Footer<'a> {
    pub mode: FooterMode,
    pub theme: &'a Theme,
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar = self.theme.bar();
        let mut spans = Vec::new();
        for (key, label) in self.mode.bindings() {
            spans.push(Span::styled(format!(" {key}"), bar.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {label} "), bar));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
    }
}
