//! Ghost Content API client (v3).
//!
//! Two read-only endpoints are used:
//! - `posts/` paginated listing (title, slug, created_at, authors)
//! - `posts/slug/{slug}/` single post including its HTML body

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::config::ResolvedConfig;
use crate::ghost::source::{GhostError, PostSource};
use crate::ghost::types::{PostDetail, PostSummary, PostsEnvelope};

/// Posts requested per page of the listing endpoint.
pub const PAGE_SIZE: u32 = 100;

const LIST_FIELDS: &str = "title,slug,created_at";
const DETAIL_FIELDS: &str = "title,slug,html,created_at";

pub struct GhostClient {
    base_url: String,
    api_key: Option<String>,
    max_pages: u32,
    client: reqwest::Client,
}

impl GhostClient {
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        timeout: Duration,
        max_pages: u32,
    ) -> Result<Self, GhostError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GhostError::Network(e.to_string()))?;

        if api_key.is_none() {
            warn!("No Ghost API key configured; requests will be unauthenticated");
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            max_pages,
            client,
        })
    }

    pub fn from_config(config: &ResolvedConfig) -> Result<Self, GhostError> {
        Self::new(
            config.api_key.clone(),
            &config.base_url,
            config.timeout,
            config.max_pages,
        )
    }

    fn posts_url(&self) -> String {
        format!("{}/ghost/api/v3/content/posts/", self.base_url)
    }

    /// The slug is pushed as a single escaped path segment.
    fn post_url(&self, slug: &str) -> Result<String, GhostError> {
        let invalid = || GhostError::Network(format!("invalid base URL '{}'", self.base_url));
        let mut url = reqwest::Url::parse(&self.posts_url()).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push("slug")
            .push(slug)
            .push("");
        Ok(url.into())
    }

    /// Issues an authenticated GET. The key travels both as a query parameter
    /// and in the `Authorization: Ghost <key>` header.
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, GhostError> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request
                .query(&[("key", key.as_str())])
                .header("Authorization", format!("Ghost {key}"));
        }
        request
            .query(query)
            .send()
            .await
            .map_err(|e| GhostError::Network(e.to_string()))
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<PostSummary>, GhostError> {
        let query = [
            ("limit", PAGE_SIZE.to_string()),
            ("page", page.to_string()),
            ("fields", LIST_FIELDS.to_string()),
            ("include", "authors".to_string()),
        ];
        let response = self.get(&self.posts_url(), &query).await?;
        let envelope: PostsEnvelope<PostSummary> = read_envelope(response).await?;
        Ok(envelope.posts)
    }
}

/// Checks the status, then decodes the `{"posts": [...]}` body.
async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<PostsEnvelope<T>, GhostError> {
    let status = response.status();
    debug!("Ghost response status: {}", status);

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        let message = error_message(&body).unwrap_or(body);
        warn!("Ghost API error: {} - {}", status.as_u16(), message);
        return Err(GhostError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| GhostError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| GhostError::Parse(e.to_string()))
}

/// Ghost reports failures as `{"errors": [{"message": ...}]}`.
fn error_message(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    envelope.errors.into_iter().next().map(|e| e.message)
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ApiErrorBody>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[async_trait]
impl PostSource for GhostClient {
    async fn fetch_all_posts(&self) -> Result<Vec<PostSummary>, GhostError> {
        let mut posts = Vec::new();

        for page in 1..=self.max_pages {
            let batch = self.fetch_page(page).await?;
            debug!("Fetched page {} ({} posts)", page, batch.len());
            if batch.is_empty() {
                info!("Fetched {} posts across {} pages", posts.len(), page - 1);
                return Ok(posts);
            }
            posts.extend(batch);
        }

        warn!(
            "Post listing still returning data after {} pages; giving up",
            self.max_pages
        );
        Err(GhostError::PageLimit(self.max_pages))
    }

    async fn fetch_post_details(&self, slug: &str) -> Result<Option<PostDetail>, GhostError> {
        let query = [
            ("fields", DETAIL_FIELDS.to_string()),
            ("include", "authors".to_string()),
        ];
        let response = self.get(&self.post_url(slug)?, &query).await?;

        // Ghost answers an unknown slug with 404 rather than an empty list.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            info!("Post '{}' not found", slug);
            return Ok(None);
        }

        let envelope: PostsEnvelope<PostDetail> = read_envelope(response).await?;
        let Some(mut post) = envelope.posts.into_iter().next() else {
            info!("Post '{}' not found (empty result)", slug);
            return Ok(None);
        };

        if post.slug.is_empty() {
            post.slug = slug.to_string();
        }
        debug!(
            "Fetched post '{}' ({} bytes of HTML)",
            post.slug,
            post.html_body().len()
        );
        Ok(Some(post))
    }
}
