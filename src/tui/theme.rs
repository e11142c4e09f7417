//! Dark and light palettes. Toggling the theme only swaps which palette
//! the draw pass reads; no data changes.

use ratatui::style::{Color, Modifier, Style};

use crate::core::state::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub bar_fg: Color,
    pub bar_bg: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub code_bg: Color,
    /// Name of the syntect theme used for fenced code blocks.
    pub syntax_theme: &'static str,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                mode,
                fg: Color::Gray,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                error: Color::LightRed,
                bar_fg: Color::White,
                bar_bg: Color::Blue,
                selection_fg: Color::Black,
                selection_bg: Color::Cyan,
                code_bg: Color::DarkGray,
                syntax_theme: "base16-ocean.dark",
            },
            ThemeMode::Light => Self {
                mode,
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                error: Color::Red,
                bar_fg: Color::Black,
                bar_bg: Color::LightBlue,
                selection_fg: Color::White,
                selection_bg: Color::Blue,
                code_bg: Color::Gray,
                syntax_theme: "base16-ocean.light",
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn bar(&self) -> Style {
        Style::default().fg(self.bar_fg).bg(self.bar_bg)
    }

    pub fn selection(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }
}
