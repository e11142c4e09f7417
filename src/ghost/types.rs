use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
}

/// One row of the post list. Only the fields requested by the list query
/// (`title,slug,created_at` + authors) are present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl PostSummary {
    /// Author names in server order, joined for the table's Authors column.
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A single post with its rendered HTML body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub title: String,
    /// Filled from the requested slug when the server leaves it out.
    #[serde(default)]
    pub slug: String,
    /// Ghost sends `null` for posts without content.
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PostDetail {
    pub fn html_body(&self) -> &str {
        self.html.as_deref().unwrap_or_default()
    }
}

/// Every Content API response wraps its resources in a `posts` array.
#[derive(Deserialize, Debug)]
pub(crate) struct PostsEnvelope<T> {
    pub posts: Vec<T>,
}
