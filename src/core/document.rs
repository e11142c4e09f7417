//! # Documents
//!
//! A post's HTML body is converted once, when its detail screen loads,
//! into a small markdown document. The TUI renders that markdown; nothing
//! downstream ever sees HTML.

use std::fmt;

use log::{debug, warn};

use crate::ghost::{GhostError, PostDetail, PostSource};

#[derive(Debug)]
pub struct DocumentError(String);

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not convert post body: {}", self.0)
    }
}

impl std::error::Error for DocumentError {}

/// Simplified, markdown-flavoured text of a post.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    markdown: String,
}

impl Document {
    pub fn from_html(html: &str) -> Result<Self, DocumentError> {
        if html.trim().is_empty() {
            return Ok(Self::default());
        }
        let markdown = htmd::convert(html).map_err(|e| DocumentError(e.to_string()))?;
        Ok(Self::from_markdown(&markdown))
    }

    pub fn from_markdown(markdown: &str) -> Self {
        Self {
            markdown: collapse_blank_lines(markdown.trim()),
        }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn is_empty(&self) -> bool {
        self.markdown.is_empty()
    }
}

/// Ghost cards leave runs of empty lines behind; keep at most one.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
            out.push('\n');
        } else {
            blank_run = 0;
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// A fetched post together with its converted body.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPost {
    pub post: PostDetail,
    pub document: Document,
}

#[derive(Debug)]
pub enum LoadError {
    Fetch(GhostError),
    Convert(DocumentError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(e) => write!(f, "{e}"),
            LoadError::Convert(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Fetches a post by slug and converts its body.
///
/// `Ok(None)` means the server has no post with that slug.
pub async fn load_post(
    source: &dyn PostSource,
    slug: &str,
) -> Result<Option<LoadedPost>, LoadError> {
    let Some(post) = source
        .fetch_post_details(slug)
        .await
        .map_err(LoadError::Fetch)?
    else {
        return Ok(None);
    };

    let document = Document::from_html(post.html_body()).map_err(|e| {
        warn!("Conversion failed for '{}': {}", slug, e);
        LoadError::Convert(e)
    })?;
    debug!(
        "Converted '{}' into {} bytes of markdown",
        slug,
        document.markdown().len()
    );
    Ok(Some(LoadedPost { post, document }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StaticSource, detail};

    #[test]
    fn test_paragraph_becomes_plain_text() {
        let doc = Document::from_html("<p>Hi</p>").unwrap();
        assert_eq!(doc.markdown(), "Hi");
    }

    #[test]
    fn test_markup_is_converted_not_kept() {
        let doc = Document::from_html(
            "<h2>Results</h2><p>It is <strong>fast</strong>. See <a href=\"https://jina.ai\">the site</a>.</p>",
        )
        .unwrap();
        let md = doc.markdown();
        assert!(md.contains("Results"));
        assert!(md.contains("fast"));
        assert!(md.contains("(https://jina.ai)"));
        assert!(!md.contains("<strong>"));
        assert!(!md.contains("<p>"));
    }

    #[test]
    fn test_empty_body_gives_empty_document() {
        assert!(Document::from_html("").unwrap().is_empty());
        assert!(Document::from_html("   \n").unwrap().is_empty());
    }

    #[test]
    fn test_blank_runs_collapse() {
        let doc = Document::from_markdown("one\n\n\n\ntwo  \n\n\nthree\n\n");
        assert_eq!(doc.markdown(), "one\n\ntwo\n\nthree");
    }

    #[tokio::test]
    async fn test_load_post_converts_body() {
        let source = StaticSource::new(vec![], vec![detail("hello-world", "Hello", "<p>Hi</p>")]);
        let loaded = load_post(&source, "hello-world").await.unwrap().unwrap();
        assert_eq!(loaded.post.title, "Hello");
        assert_eq!(loaded.document.markdown(), "Hi");
    }

    #[tokio::test]
    async fn test_load_post_absent_slug() {
        let source = StaticSource::new(vec![], vec![]);
        assert!(load_post(&source, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_post_propagates_fetch_errors() {
        let source = StaticSource::failing(GhostError::Network("connection refused".into()));
        let err = load_post(&source, "x").await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch(GhostError::Network(_))));
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
