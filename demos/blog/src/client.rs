//! Posts client: the one network call in the demos.

use crate::config::BlogConfig;
use crate::types::Post;
use futures::future::BoxFuture;
use reqwest::Client;
use thiserror::Error;

/// Errors from fetching posts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or the connection failed
    #[error("Request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status
    #[error("Unexpected status {0}")]
    Status(u16),

    /// The body was not a JSON array of posts
    #[error("Response parsing failed: {0}")]
    Decode(String),
}

/// Source of blog posts
///
/// This trait uses explicit boxed futures instead of `async fn` so it can be
/// used as `Arc<dyn PostsClient>` in the environment.
pub trait PostsClient: Send + Sync {
    /// Fetch every post, in the order the source returns them
    fn fetch_posts(&self) -> BoxFuture<'_, Result<Vec<Post>, FetchError>>;
}

/// HTTP implementation of [`PostsClient`]
///
/// Issues one unauthenticated `GET` per call.
#[derive(Debug, Clone)]
pub struct HttpPostsClient {
    client: Client,
    posts_url: String,
}

impl HttpPostsClient {
    /// Create a client for the configured endpoint
    #[must_use]
    pub fn new(config: &BlogConfig) -> Self {
        Self {
            client: Client::new(),
            posts_url: config.posts_url.clone(),
        }
    }

    /// Endpoint this client reads from
    #[must_use]
    pub fn posts_url(&self) -> &str {
        &self.posts_url
    }
}

impl PostsClient for HttpPostsClient {
    fn fetch_posts(&self) -> BoxFuture<'_, Result<Vec<Post>, FetchError>> {
        Box::pin(async move {
            tracing::debug!(url = %self.posts_url, "GET posts");

            let response = self
                .client
                .get(&self.posts_url)
                .send()
                .await
                .map_err(|e| FetchError::Request(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            response
                .json::<Vec<Post>>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))
        })
    }
}
