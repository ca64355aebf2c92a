//! Configuration for the blog demo.

/// Endpoint used when nothing else is configured
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Environment variable that overrides the posts endpoint
pub const POSTS_URL_VAR: &str = "BLOG_POSTS_URL";

/// Blog demo configuration
///
/// # Example
///
/// ```
/// use blog::BlogConfig;
///
/// let config = BlogConfig::default().with_posts_url("http://localhost:3000/posts");
/// assert_eq!(config.posts_url, "http://localhost:3000/posts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    /// URL answering `GET` with a JSON array of posts
    pub posts_url: String,
}

impl BlogConfig {
    /// Create a configuration for the given endpoint
    #[must_use]
    pub fn new(posts_url: impl Into<String>) -> Self {
        Self {
            posts_url: posts_url.into(),
        }
    }

    /// Set the posts endpoint
    #[must_use]
    pub fn with_posts_url(mut self, posts_url: impl Into<String>) -> Self {
        self.posts_url = posts_url.into();
        self
    }

    /// Load from the process environment
    ///
    /// Reads `BLOG_POSTS_URL`; unset or blank values keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(POSTS_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.posts_url = url;
        }
        config
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POSTS_URL)
    }
}
