//! Domain types for the blog view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as served by the posts endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post identifier
    pub id: u64,
    /// Author identifier
    pub user_id: u64,
    /// Headline
    pub title: String,
    /// Body text
    pub body: String,
}

/// State of the blog view
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogState {
    /// Posts from the last successful fetch, in response order
    pub posts: Vec<Post>,
    /// Whether the new-post form is open
    pub show_form: bool,
    /// When `posts` was last replaced
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Actions the blog view reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlogAction {
    /// The view was mounted; fetch the posts
    Mount,

    /// The fetch completed
    PostsLoaded {
        /// Posts in response order
        posts: Vec<Post>,
    },

    /// The fetch failed
    PostsFailed {
        /// Description of the failure
        error: String,
    },

    /// The register button was pressed
    ShowForm,

    /// The form asked to be closed
    CloseForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uses_camel_case_wire_names() -> Result<(), serde_json::Error> {
        let json = r#"{"userId": 1, "id": 7, "title": "t", "body": "b"}"#;
        let post: Post = serde_json::from_str(json)?;

        assert_eq!(
            post,
            Post {
                id: 7,
                user_id: 1,
                title: "t".to_string(),
                body: "b".to_string(),
            }
        );
        assert!(serde_json::to_string(&post)?.contains(r#""userId":1"#));
        Ok(())
    }

    #[test]
    fn post_array_keeps_order() -> Result<(), serde_json::Error> {
        let json = r#"[
            {"userId": 1, "id": 2, "title": "second", "body": ""},
            {"userId": 1, "id": 1, "title": "first", "body": ""}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json)?;

        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        Ok(())
    }

    #[test]
    fn default_state_is_empty_and_closed() {
        let state = BlogState::default();
        assert!(state.posts.is_empty());
        assert!(!state.show_form);
        assert!(state.loaded_at.is_none());
    }
}
