//! Text rendering of the blog view.

use crate::types::BlogState;

/// Renders one entry per post, in state order
///
/// Each entry is the title on the first line and the body below it.
#[must_use]
pub fn render_posts(state: &BlogState) -> Vec<String> {
    state
        .posts
        .iter()
        .map(|post| format!("{}\n{}", post.title, post.body))
        .collect()
}
