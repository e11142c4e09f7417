//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::core::state::{App, ThemeMode};
use crate::ghost::{Author, GhostError, PostDetail, PostSource, PostSummary};

/// Fixed reference instant so relative dates are deterministic.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn summary(slug: &str, title: &str, created_at: DateTime<Utc>) -> PostSummary {
    PostSummary {
        title: title.to_string(),
        slug: slug.to_string(),
        created_at,
        authors: vec![Author {
            name: "Jina AI".to_string(),
        }],
    }
}

/// `n` posts `post-0 .. post-{n-1}`, newest first, one day apart.
pub fn summaries(n: usize) -> Vec<PostSummary> {
    (0..n)
        .map(|i| {
            summary(
                &format!("post-{i}"),
                &format!("Post {i}"),
                reference_now() - Duration::days(i as i64 + 1),
            )
        })
        .collect()
}

pub fn detail(slug: &str, title: &str, html: &str) -> PostDetail {
    PostDetail {
        title: title.to_string(),
        slug: slug.to_string(),
        html: Some(html.to_string()),
        created_at: Some(reference_now()),
    }
}

/// An in-memory post source for tests that don't need HTTP.
pub struct StaticSource {
    posts: Vec<PostSummary>,
    details: Vec<PostDetail>,
    error: Option<GhostError>,
}

impl StaticSource {
    pub fn new(posts: Vec<PostSummary>, details: Vec<PostDetail>) -> Self {
        Self {
            posts,
            details,
            error: None,
        }
    }

    pub fn failing(error: GhostError) -> Self {
        Self {
            posts: Vec::new(),
            details: Vec::new(),
            error: Some(error),
        }
    }
}

#[async_trait]
impl PostSource for StaticSource {
    async fn fetch_all_posts(&self) -> Result<Vec<PostSummary>, GhostError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.posts.clone()),
        }
    }

    async fn fetch_post_details(&self, slug: &str) -> Result<Option<PostDetail>, GhostError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.details.iter().find(|d| d.slug == slug).cloned()),
        }
    }
}

/// Creates a test App with fixed header text.
pub fn test_app() -> App {
    App::new(
        "Test Blog".to_string(),
        "Test subtitle".to_string(),
        ThemeMode::Dark,
    )
}
