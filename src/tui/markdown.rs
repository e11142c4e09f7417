//! Document markdown → ratatui `Text`.
//!
//! Walks `pulldown_cmark` events and emits styled `Line`/`Span` values using
//! the active `Theme`. Covers what converted blog posts contain: headings,
//! emphasis, links, images (shown as their alt text), lists, blockquotes,
//! rules, simple tables and fenced code (highlighted with syntect).

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::tui::theme::Theme;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Render a document's markdown with the given palette.
///
/// Returns owned text (`'static`) so the viewer can cache it across frames.
pub fn render(markdown: &str, theme: &Theme) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);

    let mut w = Writer::new(*theme);
    for event in Parser::new_ext(markdown, opts) {
        w.handle(event);
    }
    w.text
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    theme: Theme,
    /// Inline style stack; entries are patched onto their parent.
    styles: Vec<Style>,
    /// Per-line prefix spans (blockquote bar, code block border).
    line_prefixes: Vec<Span<'static>>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    highlighter: Option<HighlightLines<'static>>,
    in_plain_code: bool,
    link_url: Option<String>,
    /// Cells emitted so far in the current table row.
    table_cell: Option<usize>,
    /// Set after a list marker so a loose item's paragraph stays on its line.
    item_open: bool,
    needs_newline: bool,
}

impl Writer {
    fn new(theme: Theme) -> Self {
        Self {
            text: Text::default(),
            theme,
            styles: vec![],
            line_prefixes: vec![],
            list_indices: vec![],
            highlighter: None,
            in_plain_code: false,
            link_url: None,
            table_cell: None,
            item_open: false,
            needs_newline: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.theme.fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn muted(&self) -> Style {
        Style::default().fg(self.theme.muted)
    }

    fn link_style(&self) -> Style {
        Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for pfx in self.line_prefixes.iter().rev().cloned() {
            out.spans.insert(0, pfx);
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.push_line(Line::from(vec![span])),
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.inline_code(c),
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled("─".repeat(40), self.muted())));
                self.needs_newline = true;
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.push_span(Span::raw(marker));
            }
            _ => {} // Raw HTML left over from embeds, footnotes, math
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if std::mem::take(&mut self.item_open) {
                    self.needs_newline = false;
                    return;
                }
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.blank_line_if_needed();
                let hs = heading_style(&self.theme, level);
                self.push_line(Line::from(Span::styled(
                    format!("{} ", "#".repeat(heading_depth(level))),
                    hs,
                )));
                self.push_style(hs);
            }
            Tag::BlockQuote(_) => {
                self.blank_line_if_needed();
                self.line_prefixes.push(Span::styled("│ ", self.muted()));
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(kind) => self.open_code_block(kind),
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let indent = "  ".repeat(self.list_indices.len().saturating_sub(1));
                let marker = match self.list_indices.last_mut() {
                    Some(Some(n)) => {
                        let s = format!("{indent}{n}. ");
                        *n += 1;
                        s
                    }
                    _ => format!("{indent}• "),
                };
                let style = Style::default().fg(self.theme.accent);
                self.push_span(Span::styled(marker, style));
                self.item_open = true;
            }
            Tag::Table(_) => {
                self.blank_line_if_needed();
            }
            Tag::TableHead => {
                self.push_line(Line::default());
                self.table_cell = Some(0);
                self.push_style(Style::default().add_modifier(Modifier::BOLD));
            }
            Tag::TableRow => {
                self.push_line(Line::default());
                self.table_cell = Some(0);
            }
            Tag::TableCell => {
                if let Some(n) = self.table_cell {
                    if n > 0 {
                        let sep = Span::styled(" │ ", self.muted());
                        self.push_span(sep);
                    }
                    self.table_cell = Some(n + 1);
                }
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                let style = self.link_style();
                self.push_style(style);
            }
            Tag::Image { .. } => {
                let style = self.muted().add_modifier(Modifier::ITALIC);
                self.push_span(Span::styled("[image: ", style));
                self.push_style(style);
            }
            _ => {} // Footnote and definition lists: rendered as plain text
        }
    }

    fn open_code_block(&mut self, kind: CodeBlockKind<'_>) {
        if !self.text.lines.is_empty() {
            self.push_line(Line::default());
        }
        self.needs_newline = false;
        let lang = match &kind {
            CodeBlockKind::Fenced(l) => l.split_whitespace().next().unwrap_or_default(),
            CodeBlockKind::Indented => "",
        };

        let bs = self.muted();
        let top = if lang.is_empty() {
            Line::from(Span::styled("╭──", bs))
        } else {
            Line::from(vec![
                Span::styled("╭── ", bs),
                Span::styled(lang.to_owned(), bs.add_modifier(Modifier::BOLD)),
                Span::styled(" ──", bs),
            ])
        };
        self.push_line(top);
        self.line_prefixes.push(Span::styled("│ ", bs));

        let syntax = (!lang.is_empty())
            .then(|| SYNTAX_SET.find_syntax_by_token(lang))
            .flatten();
        let syntax_theme = THEME_SET.themes.get(self.theme.syntax_theme);
        match (syntax, syntax_theme) {
            (Some(syn), Some(st)) => self.highlighter = Some(HighlightLines::new(syn, st)),
            _ => self.in_plain_code = true,
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.needs_newline = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::BlockQuote(_) => {
                self.line_prefixes.pop();
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                self.highlighter = None;
                self.in_plain_code = false;
                self.line_prefixes.pop();
                let bs = self.muted();
                self.push_line(Line::from(Span::styled("╰──", bs)));
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                self.needs_newline = self.list_indices.is_empty();
            }
            TagEnd::Item => self.item_open = false,
            TagEnd::TableHead => {
                self.pop_style();
                self.table_cell = None;
            }
            TagEnd::TableRow => self.table_cell = None,
            TagEnd::Table => self.needs_newline = true,
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    let style = self.link_style();
                    self.push_span(Span::raw(" ("));
                    self.push_span(Span::styled(url, style));
                    self.push_span(Span::raw(")"));
                }
            }
            TagEnd::Image => {
                self.pop_style();
                let style = self.muted().add_modifier(Modifier::ITALIC);
                self.push_span(Span::styled("]", style));
            }
            _ => {}
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        self.item_open = false;
        // ratatui renders \t as zero-width
        let text = cow.replace('\t', "    ");

        if let Some(mut hl) = self.highlighter.take() {
            for line in LinesWithEndings::from(text.as_str()) {
                let Ok(ranges) = hl.highlight_line(line, &SYNTAX_SET) else {
                    continue;
                };
                let spans: Vec<Span<'static>> = ranges
                    .into_iter()
                    .filter_map(|(hl_style, frag)| {
                        let content = frag.trim_end_matches('\n');
                        if content.is_empty() {
                            return None;
                        }
                        let fg = Color::Rgb(
                            hl_style.foreground.r,
                            hl_style.foreground.g,
                            hl_style.foreground.b,
                        );
                        Some(Span::styled(content.to_owned(), Style::default().fg(fg)))
                    })
                    .collect();
                self.push_line(Line::from(spans));
            }
            self.highlighter = Some(hl);
            return;
        }

        if self.in_plain_code {
            let code_style = Style::default().fg(self.theme.fg);
            for line in text.lines() {
                self.push_line(Line::from(Span::styled(line.to_owned(), code_style)));
            }
            return;
        }

        let style = self.style();
        self.push_span(Span::styled(text, style));
    }

    fn inline_code(&mut self, cow: CowStr<'_>) {
        let style = Style::default().fg(self.theme.fg).bg(self.theme.code_bg);
        self.push_span(Span::styled(cow.to_string(), style));
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn heading_style(theme: &Theme, level: HeadingLevel) -> Style {
    let base = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => base.add_modifier(Modifier::UNDERLINED),
        HeadingLevel::H2 => base,
        _ => base.add_modifier(Modifier::ITALIC),
    }
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Flattens rendered text back to plain strings, one per line.
#[cfg(test)]
pub(crate) fn plain_lines(text: &Text<'_>) -> Vec<String> {
    text.lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}
