use std::fmt;

use async_trait::async_trait;

use super::types::{PostDetail, PostSummary};

/// Errors that can occur while talking to the Content API.
#[derive(Debug, Clone, PartialEq)]
pub enum GhostError {
    /// Transport failure (DNS, connection refused, timeout).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the `{"posts": [...]}` shape we asked for.
    Parse(String),
    /// Pagination did not end within the configured number of pages.
    PageLimit(u32),
}

impl fmt::Display for GhostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GhostError::Network(msg) => write!(f, "network error: {msg}"),
            GhostError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GhostError::Parse(msg) => write!(f, "parse error: {msg}"),
            GhostError::PageLimit(pages) => {
                write!(f, "pagination did not finish within {pages} pages")
            }
        }
    }
}

impl std::error::Error for GhostError {}

/// Read-only access to blog posts.
///
/// `GhostClient` is the real implementation; tests swap in fixtures.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Every post, in the order the server returns them.
    async fn fetch_all_posts(&self) -> Result<Vec<PostSummary>, GhostError>;

    /// A single post by slug. `Ok(None)` when no post has that slug.
    async fn fetch_post_details(&self, slug: &str) -> Result<Option<PostDetail>, GhostError>;
}
