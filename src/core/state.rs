//! # Application State
//!
//! Core business state for ghost-term. Presentation details (table cursor,
//! scroll offsets, colors) live in the `tui` module.
//!
//! ```text
//! App
//! ├── title / subtitle: String        // header text
//! ├── theme: ThemeMode                // dark / light
//! ├── list: ListScreen                // bottom of the navigation stack
//! │   ├── status: ListStatus          // Empty → Loading → Populated | Failed
//! │   ├── posts: Vec<PostSummary>     // rows, indexed by table position
//! │   └── pending: Option<RequestId>  // in-flight listing fetch
//! └── stack: Vec<DetailScreen>        // screens pushed on top of the list
//!     ├── slug: String
//!     ├── status: DetailStatus        // Loading → Displayed | NotFound | Failed
//!     └── pending: Option<RequestId>
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use serde::{Deserialize, Serialize};

use crate::core::config::ResolvedConfig;
use crate::core::document::Document;
use crate::ghost::{PostDetail, PostSummary};

/// Tags a background fetch so late results from a superseded fetch can be dropped.
pub type RequestId = u64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Empty,
    Loading,
    Populated,
    Failed(String),
}

#[derive(Debug)]
pub struct ListScreen {
    pub status: ListStatus,
    pub posts: Vec<PostSummary>,
    pub pending: Option<RequestId>,
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ListScreen {
    pub fn new() -> Self {
        Self {
            status: ListStatus::Empty,
            posts: Vec::new(),
            pending: None,
        }
    }

    /// Discards the current rows and waits for `request`.
    pub(crate) fn begin_loading(&mut self, request: RequestId) {
        self.posts.clear();
        self.status = ListStatus::Loading;
        self.pending = Some(request);
    }

    /// Replaces the rows in one step so row indices always match `posts`.
    pub(crate) fn populate(&mut self, posts: Vec<PostSummary>) {
        self.posts = posts;
        self.status = ListStatus::Populated;
        self.pending = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.posts.clear();
        self.status = ListStatus::Failed(message);
        self.pending = None;
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    /// The post shown at table row `row`, if the table is populated.
    pub fn post_at(&self, row: usize) -> Option<&PostSummary> {
        match self.status {
            ListStatus::Populated => self.posts.get(row),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    Loading,
    Displayed { post: PostDetail, document: Document },
    NotFound,
    Failed(String),
}

#[derive(Debug)]
pub struct DetailScreen {
    pub slug: String,
    pub status: DetailStatus,
    pub pending: Option<RequestId>,
}

impl DetailScreen {
    pub(crate) fn new(slug: String, request: RequestId) -> Self {
        Self {
            slug,
            status: DetailStatus::Loading,
            pending: Some(request),
        }
    }

    pub(crate) fn begin_loading(&mut self, request: RequestId) {
        self.status = DetailStatus::Loading;
        self.pending = Some(request);
    }

    pub fn is_loading(&self) -> bool {
        self.status == DetailStatus::Loading
    }

    pub fn post_title(&self) -> Option<&str> {
        match &self.status {
            DetailStatus::Displayed { post, .. } => Some(post.title.as_str()),
            _ => None,
        }
    }
}

/// Borrowed view of whichever screen is on top of the stack.
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    List(&'a ListScreen),
    Detail(&'a DetailScreen),
}

pub struct App {
    pub title: String,
    pub subtitle: String,
    pub theme: ThemeMode,
    pub list: ListScreen,
    pub stack: Vec<DetailScreen>,
    last_request: RequestId,
}

impl App {
    pub fn new(title: String, subtitle: String, theme: ThemeMode) -> Self {
        Self {
            title,
            subtitle,
            theme,
            list: ListScreen::new(),
            stack: Vec::new(),
            last_request: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.title.clone(), config.subtitle.clone(), config.theme)
    }

    pub fn current(&self) -> Screen<'_> {
        match self.stack.last() {
            Some(detail) => Screen::Detail(detail),
            None => Screen::List(&self.list),
        }
    }

    pub fn detail(&self) -> Option<&DetailScreen> {
        self.stack.last()
    }

    /// Subtitle for the header: the open post's title, else the app subtitle.
    pub fn header_subtitle(&self) -> &str {
        self.detail()
            .and_then(DetailScreen::post_title)
            .unwrap_or(self.subtitle.as_str())
    }

    /// True while the visible screen waits on the network.
    pub fn is_loading(&self) -> bool {
        match self.current() {
            Screen::List(list) => list.is_loading(),
            Screen::Detail(detail) => detail.is_loading(),
        }
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.last_request += 1;
        self.last_request
    }
}
