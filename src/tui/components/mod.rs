//! # TUI Components
//!
//! Stateless components receive everything as props and render:
//! - `Header`: title, subtitle and clock
//! - `Footer`: key hints for the screen on top
//! - `StatusPanel`: spinner, empty and error placeholders
//!
//! Stateful components keep their state in `TuiState` and emit events:
//! - `PostTable` / `PostTableState`: the list screen, emits `TableEvent::Open`
//! - `PostViewer` / `PostViewerState`: the detail screen, emits `ViewerEvent::Close`
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── header.rs
//! ├── footer.rs
//! ├── status_panel.rs
//! ├── post_table.rs
//! └── post_viewer.rs
//! ```

pub mod footer;
pub mod header;
pub mod post_table;
pub mod post_viewer;
pub mod status_panel;

pub use footer::{Footer, FooterMode};
pub use header::Header;
pub use post_table::{PostTable, PostTableState, TableEvent};
pub use post_viewer::{PostViewer, PostViewerState, ViewerEvent};
pub use status_panel::{Status, StatusPanel};
