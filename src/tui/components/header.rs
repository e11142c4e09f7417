//! # Header Component
//!
//! One-line bar at the top of every screen: the blog title, the subtitle
//! (replaced by the post title while a post is open) and a clock on the right.
//!
//! Stateless. All three values are props filled in by `ui::draw_ui`, so the
//! header does not know which screen is showing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct Header<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    /// Preformatted wall-clock time, e.g. "14:05:09".
    pub clock: &'a str,
    pub theme: &'a Theme,
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar = self.theme.bar();
        let clock_width = self.clock.width() as u16 + 1;
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(clock_width)]).areas(area);

        let mut spans = vec![Span::styled(
            format!(" {}", self.title),
            bar.add_modifier(Modifier::BOLD),
        )];
        if !self.subtitle.is_empty() {
            spans.push(Span::styled(" — ", bar));
            spans.push(Span::styled(self.subtitle.to_owned(), bar));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), left);
        frame.render_widget(
            Paragraph::new(Span::styled(self.clock.to_owned(), Style::default())).style(bar),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ThemeMode;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(header: &mut Header<'_>, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_shows_title_subtitle_and_clock() {
        let theme = Theme::for_mode(ThemeMode::Dark);
        let mut header = Header {
            title: "Jina AI",
            subtitle: "Your Search Foundation, Supercharged!",
            clock: "09:30:00",
            theme: &theme,
        };
        let text = draw(&mut header, 80);
        assert!(text.starts_with(" Jina AI — Your Search Foundation"));
        assert!(text.trim_end().ends_with("09:30:00"));
    }

    #[test]
    fn test_header_without_subtitle_has_no_separator() {
        let theme = Theme::for_mode(ThemeMode::Light);
        let mut header = Header {
            title: "Blog",
            subtitle: "",
            clock: "12:00:00",
            theme: &theme,
        };
        let text = draw(&mut header, 40);
        assert!(!text.contains('—'));
        assert!(text.contains("Blog"));
    }

    #[test]
    fn test_header_uses_bar_colors() {
        let theme = Theme::for_mode(ThemeMode::Dark);
        let mut header = Header {
            title: "Blog",
            subtitle: "sub",
            clock: "12:00:00",
            theme: &theme,
        };
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        let cell = &terminal.backend().buffer()[(1, 0)];
        assert_eq!(cell.bg, theme.bar_bg);
    }
}
