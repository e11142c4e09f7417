//! # Actions
//!
//! Everything that can happen in ghost-term becomes an `Action`.
//! User presses Enter on a row? That's `Action::OpenPost(row)`.
//! A background fetch finishes? That's `Action::PostsLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! caller must carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::document::{LoadError, LoadedPost};
use crate::core::state::{App, DetailScreen, DetailStatus, RequestId};
use crate::ghost::{GhostError, PostSummary};

#[derive(Debug)]
pub enum Action {
    /// Reload the visible screen: the post list, or the open post.
    Refresh,
    PostsLoaded {
        request: RequestId,
        result: Result<Vec<PostSummary>, GhostError>,
    },
    /// Open the post shown at this table row.
    OpenPost(usize),
    PostLoaded {
        request: RequestId,
        result: Result<Option<LoadedPost>, LoadError>,
    },
    PopScreen,
    ToggleTheme,
    Quit,
}

/// Side effects requested by `update()`, executed by the UI adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a listing fetch, replacing any in flight.
    FetchPosts(RequestId),
    /// Start a single-post fetch for the detail screen on top.
    FetchPost { request: RequestId, slug: String },
    /// The detail screen was popped; its fetch is no longer wanted.
    CancelPostFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Refresh => {
            let request = app.next_request_id();
            match app.stack.last_mut() {
                Some(detail) => {
                    info!("Reloading post '{}' (request {})", detail.slug, request);
                    detail.begin_loading(request);
                    Effect::FetchPost {
                        request,
                        slug: detail.slug.clone(),
                    }
                }
                None => {
                    info!("Refreshing post list (request {})", request);
                    app.list.begin_loading(request);
                    Effect::FetchPosts(request)
                }
            }
        }

        Action::PostsLoaded { request, result } => {
            if app.list.pending != Some(request) {
                debug!("Dropping stale post list (request {})", request);
                return Effect::None;
            }
            match result {
                Ok(posts) => {
                    info!("Post list populated with {} rows", posts.len());
                    app.list.populate(posts);
                }
                Err(e) => {
                    warn!("Post list fetch failed: {}", e);
                    app.list.fail(e.to_string());
                }
            }
            Effect::None
        }

        Action::OpenPost(row) => {
            if !app.stack.is_empty() {
                return Effect::None;
            }
            let Some(slug) = app.list.post_at(row).map(|p| p.slug.clone()) else {
                debug!("Ignoring selection of row {} (no such post)", row);
                return Effect::None;
            };
            let request = app.next_request_id();
            info!("Opening post '{}' from row {} (request {})", slug, row, request);
            app.stack.push(DetailScreen::new(slug.clone(), request));
            Effect::FetchPost { request, slug }
        }

        Action::PostLoaded { request, result } => {
            let Some(detail) = app
                .stack
                .iter_mut()
                .find(|d| d.pending == Some(request))
            else {
                debug!("Dropping stale post (request {})", request);
                return Effect::None;
            };
            detail.pending = None;
            detail.status = match result {
                Ok(Some(LoadedPost { post, document })) => {
                    info!("Displaying post '{}'", detail.slug);
                    DetailStatus::Displayed { post, document }
                }
                Ok(None) => {
                    warn!("Post '{}' does not exist", detail.slug);
                    DetailStatus::NotFound
                }
                Err(e) => {
                    warn!("Loading post '{}' failed: {}", detail.slug, e);
                    DetailStatus::Failed(e.to_string())
                }
            };
            Effect::None
        }

        Action::PopScreen => match app.stack.pop() {
            Some(detail) => {
                debug!("Closed post '{}'", detail.slug);
                Effect::CancelPostFetch
            }
            None => Effect::None,
        },

        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            debug!("Theme is now {}", app.theme.label());
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::Document;
    use crate::core::state::{ListStatus, Screen};
    use crate::test_support::{detail, summaries, test_app};

    /// Refreshes and feeds back `posts`, returning the request id used.
    fn populate(app: &mut App, posts: Vec<PostSummary>) -> RequestId {
        let Effect::FetchPosts(request) = update(app, Action::Refresh) else {
            panic!("refresh on the list should fetch posts");
        };
        update(
            app,
            Action::PostsLoaded {
                request,
                result: Ok(posts),
            },
        );
        request
    }

    fn open(app: &mut App, row: usize) -> (RequestId, String) {
        match update(app, Action::OpenPost(row)) {
            Effect::FetchPost { request, slug } => (request, slug),
            other => panic!("expected FetchPost, got {:?}", other),
        }
    }

    fn loaded(slug: &str, title: &str, html: &str) -> LoadedPost {
        LoadedPost {
            post: detail(slug, title, html),
            document: Document::from_html(html).unwrap(),
        }
    }

    #[test]
    fn test_refresh_enters_loading_and_discards_rows() {
        let mut app = test_app();
        populate(&mut app, summaries(5));
        assert_eq!(app.list.posts.len(), 5);

        let effect = update(&mut app, Action::Refresh);
        assert!(matches!(effect, Effect::FetchPosts(_)));
        assert_eq!(app.list.status, ListStatus::Loading);
        assert!(app.list.posts.is_empty());
        assert!(app.is_loading());
    }

    #[test]
    fn test_posts_loaded_populates_in_order() {
        let mut app = test_app();
        populate(&mut app, summaries(3));
        assert_eq!(app.list.status, ListStatus::Populated);
        let slugs: Vec<_> = app.list.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["post-0", "post-1", "post-2"]);
    }

    #[test]
    fn test_stale_listing_is_ignored() {
        let mut app = test_app();
        let Effect::FetchPosts(first) = update(&mut app, Action::Refresh) else {
            panic!()
        };
        let Effect::FetchPosts(second) = update(&mut app, Action::Refresh) else {
            panic!()
        };

        update(
            &mut app,
            Action::PostsLoaded {
                request: first,
                result: Ok(summaries(9)),
            },
        );
        assert_eq!(app.list.status, ListStatus::Loading);
        assert!(app.list.posts.is_empty());

        update(
            &mut app,
            Action::PostsLoaded {
                request: second,
                result: Ok(summaries(2)),
            },
        );
        assert_eq!(app.list.posts.len(), 2);
    }

    #[test]
    fn test_list_failure_is_visible() {
        let mut app = test_app();
        let Effect::FetchPosts(request) = update(&mut app, Action::Refresh) else {
            panic!()
        };
        update(
            &mut app,
            Action::PostsLoaded {
                request,
                result: Err(GhostError::Api {
                    status: 500,
                    message: "boom".into(),
                }),
            },
        );
        assert_eq!(
            app.list.status,
            ListStatus::Failed("API error (HTTP 500): boom".into())
        );
        assert!(!app.is_loading());
    }

    #[test]
    fn test_open_post_uses_displayed_row() {
        let mut app = test_app();
        populate(&mut app, summaries(4));
        let (_, slug) = open(&mut app, 2);
        assert_eq!(slug, "post-2");
        assert!(matches!(app.current(), Screen::Detail(d) if d.slug == "post-2"));
    }

    #[test]
    fn test_selection_after_refresh_matches_new_list() {
        let mut app = test_app();
        populate(&mut app, summaries(4));

        // Refresh replaces the list with a different ordering.
        let mut reordered = summaries(4);
        reordered.reverse();
        populate(&mut app, reordered);

        let (_, slug) = open(&mut app, 0);
        assert_eq!(slug, "post-3");
    }

    #[test]
    fn test_selection_while_loading_or_out_of_range_is_ignored() {
        let mut app = test_app();
        populate(&mut app, summaries(2));
        assert_eq!(update(&mut app, Action::OpenPost(2)), Effect::None);

        update(&mut app, Action::Refresh);
        assert_eq!(update(&mut app, Action::OpenPost(0)), Effect::None);
        assert!(app.stack.is_empty());
    }

    #[test]
    fn test_post_loaded_displays_document() {
        let mut app = test_app();
        populate(&mut app, summaries(1));
        let (request, slug) = open(&mut app, 0);
        assert!(app.is_loading());

        update(
            &mut app,
            Action::PostLoaded {
                request,
                result: Ok(Some(loaded(&slug, "Hello", "<p>Hi</p>"))),
            },
        );
        let detail = app.detail().unwrap();
        assert_eq!(detail.post_title(), Some("Hello"));
        assert_eq!(app.header_subtitle(), "Hello");
        assert!(matches!(
            &detail.status,
            DetailStatus::Displayed { document, .. } if document.markdown() == "Hi"
        ));
    }

    #[test]
    fn test_absent_and_failed_posts_get_their_own_states() {
        let mut app = test_app();
        populate(&mut app, summaries(1));

        let (request, _) = open(&mut app, 0);
        update(&mut app, Action::PostLoaded { request, result: Ok(None) });
        assert_eq!(app.detail().unwrap().status, DetailStatus::NotFound);

        let Effect::FetchPost { request, .. } = update(&mut app, Action::Refresh) else {
            panic!("refresh on a detail screen retries the post");
        };
        assert!(app.detail().unwrap().is_loading());
        update(
            &mut app,
            Action::PostLoaded {
                request,
                result: Err(LoadError::Fetch(GhostError::Network("timed out".into()))),
            },
        );
        assert_eq!(
            app.detail().unwrap().status,
            DetailStatus::Failed("network error: timed out".into())
        );
        // The list underneath is untouched.
        assert_eq!(app.list.status, ListStatus::Populated);
        assert_eq!(app.list.posts.len(), 1);
    }

    #[test]
    fn test_escape_returns_to_list_without_refetch() {
        let mut app = test_app();
        populate(&mut app, summaries(3));
        let (request, _) = open(&mut app, 1);

        assert_eq!(update(&mut app, Action::PopScreen), Effect::CancelPostFetch);
        assert!(matches!(app.current(), Screen::List(_)));
        assert_eq!(app.list.status, ListStatus::Populated);
        assert_eq!(app.list.posts.len(), 3);

        // A late result for the popped screen changes nothing.
        update(
            &mut app,
            Action::PostLoaded {
                request,
                result: Ok(Some(loaded("post-1", "Late", ""))),
            },
        );
        assert!(app.stack.is_empty());
        assert_eq!(app.header_subtitle(), "Test subtitle");

        // Popping the list itself is a no-op.
        assert_eq!(update(&mut app, Action::PopScreen), Effect::None);
    }

    #[test]
    fn test_open_post_ignored_when_detail_on_top() {
        let mut app = test_app();
        populate(&mut app, summaries(3));
        open(&mut app, 0);
        assert_eq!(update(&mut app, Action::OpenPost(1)), Effect::None);
        assert_eq!(app.stack.len(), 1);
    }

    #[test]
    fn test_toggle_theme_and_quit() {
        let mut app = test_app();
        let before = app.theme;
        assert_eq!(update(&mut app, Action::ToggleTheme), Effect::None);
        assert_ne!(app.theme, before);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
