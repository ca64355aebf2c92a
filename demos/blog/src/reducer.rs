//! Reducer logic for the blog view.

use crate::client::PostsClient;
use crate::types::{BlogAction, BlogState};
use primer_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};
use primer_runtime::Store;
use std::sync::Arc;

/// Store type backing the blog view
pub type BlogStore = Store<BlogState, BlogAction, BlogEnvironment, BlogReducer>;

/// Environment dependencies for the blog reducer
#[derive(Clone)]
pub struct BlogEnvironment {
    /// Where posts come from
    pub posts: Arc<dyn PostsClient>,
    /// Clock for stamping loads
    pub clock: Arc<dyn Clock>,
}

impl BlogEnvironment {
    /// Creates a new `BlogEnvironment`
    #[must_use]
    pub fn new(posts: Arc<dyn PostsClient>, clock: Arc<dyn Clock>) -> Self {
        Self { posts, clock }
    }
}

/// Reducer for the blog view
#[derive(Clone, Debug, Default)]
pub struct BlogReducer;

impl BlogReducer {
    /// Creates a new `BlogReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn fetch_posts(env: &BlogEnvironment) -> Effect<BlogAction> {
        let client = Arc::clone(&env.posts);
        Effect::future(async move {
            match client.fetch_posts().await {
                Ok(posts) => Some(BlogAction::PostsLoaded { posts }),
                Err(error) => Some(BlogAction::PostsFailed {
                    error: error.to_string(),
                }),
            }
        })
    }
}

impl Reducer for BlogReducer {
    type State = BlogState;
    type Action = BlogAction;
    type Environment = BlogEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BlogAction::Mount => {
                tracing::debug!("Fetching posts");
                return smallvec![Self::fetch_posts(env)];
            },
            BlogAction::PostsLoaded { posts } => {
                tracing::debug!(count = posts.len(), "Posts loaded");
                state.posts = posts;
                state.loaded_at = Some(env.clock.now());
            },
            BlogAction::PostsFailed { error } => {
                // Displayed posts stay as they were
                tracing::error!(error = %error, "Failed to fetch posts");
            },
            BlogAction::ShowForm => {
                state.show_form = true;
            },
            BlogAction::CloseForm => {
                state.show_form = false;
            },
        }

        SmallVec::new()
    }
}
