//! # Core Application Logic
//!
//! This module contains ghost-term's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screens)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │   Ghost    │
//!         │  Adapter   │ ───spawns──────▶ │   client   │
//!         │ (ratatui)  │                  │ (reqwest)  │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the list/detail screen state machines
//! - [`action`]: The `Action` enum, `Effect` enum and `update()`
//! - [`document`]: HTML → markdown conversion of post bodies
//! - [`relative_time`]: "3 days ago" formatting
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod document;
pub mod relative_time;
pub mod state;
