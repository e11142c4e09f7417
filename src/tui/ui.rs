//! Frame composition: header, body for the screen on top, footer.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::state::{App, DetailScreen, DetailStatus, ListScreen, ListStatus, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    Footer, FooterMode, Header, PostTable, PostViewer, Status, StatusPanel,
};
use crate::tui::theme::Theme;

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    spinner_frame: usize,
    now: DateTime<Utc>,
    clock: &str,
) {
    use Constraint::{Length, Min};
    let theme = Theme::for_mode(app.theme);
    let [header_area, body_area, footer_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    frame.render_widget(Block::default().style(theme.base()), frame.area());

    Header {
        title: &app.title,
        subtitle: app.header_subtitle(),
        clock,
        theme: &theme,
    }
    .render(frame, header_area);

    let mode = match app.current() {
        Screen::List(list) => {
            draw_list(frame, body_area, list, tui, spinner_frame, now, &theme);
            FooterMode::List
        }
        Screen::Detail(detail) => {
            draw_detail(frame, body_area, detail, tui, spinner_frame, &theme);
            FooterMode::Detail
        }
    };

    Footer {
        mode,
        theme: &theme,
    }
    .render(frame, footer_area);
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    list: &ListScreen,
    tui: &mut TuiState,
    spinner_frame: usize,
    now: DateTime<Utc>,
    theme: &Theme,
) {
    let status = match &list.status {
        ListStatus::Empty | ListStatus::Loading => Status::Loading("Loading posts…"),
        ListStatus::Failed(message) => Status::Error(message),
        ListStatus::Populated if list.posts.is_empty() => Status::Message("No posts published."),
        ListStatus::Populated => {
            PostTable {
                state: &mut tui.table,
                posts: &list.posts,
                now,
                theme,
            }
            .render(frame, area);
            return;
        }
    };
    tui.table.sync(0);
    StatusPanel {
        status,
        spinner_frame,
        theme,
    }
    .render(frame, area);
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailScreen,
    tui: &mut TuiState,
    spinner_frame: usize,
    theme: &Theme,
) {
    let status = match &detail.status {
        DetailStatus::Loading => Status::Loading("Loading post…"),
        DetailStatus::NotFound => Status::Error("This post could not be found."),
        DetailStatus::Failed(message) => Status::Error(message),
        DetailStatus::Displayed { document, .. } if document.is_empty() => {
            Status::Message("This post has no content.")
        }
        DetailStatus::Displayed { document, .. } => {
            PostViewer {
                state: &mut tui.viewer,
                document,
                theme,
            }
            .render(frame, area);
            return;
        }
    };
    StatusPanel {
        status,
        spinner_frame,
        theme,
    }
    .render(frame, area);
}
