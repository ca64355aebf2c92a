//! Blog demo: posts fetched once per mount and rendered as a list.
//!
//! Mounting the view sends [`BlogAction::Mount`]. The reducer answers with a
//! single fetch effect; its result comes back as [`BlogAction::PostsLoaded`]
//! or [`BlogAction::PostsFailed`].
//!
//! - A successful response replaces the displayed posts in response order.
//! - A failed request is logged once at `error` level and the view keeps
//!   showing whatever it had (an empty list before the first success).
//! - There is no retry, timeout, cancellation or de-duplication: if two
//!   fetches are in flight, the last one to complete wins.
//!
//! # Quick Start
//!
//! ```no_run
//! use blog::{BlogAction, BlogConfig, BlogEnvironment, BlogReducer, BlogState, HttpPostsClient};
//! use primer_core::environment::SystemClock;
//! use primer_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpPostsClient::new(&BlogConfig::from_env());
//! let env = BlogEnvironment::new(Arc::new(client), Arc::new(SystemClock));
//! let store = Store::new(BlogState::default(), BlogReducer::new(), env);
//!
//! let mut handle = store.send(BlogAction::Mount).await?;
//! handle.wait().await;
//!
//! let posts = store.state(|s| s.posts.len()).await;
//! println!("{posts} posts");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use client::{FetchError, HttpPostsClient, PostsClient};
pub use config::BlogConfig;
pub use reducer::{BlogEnvironment, BlogReducer, BlogStore};
pub use types::{BlogAction, BlogState, Post};
pub use view::render_posts;
