//! Blog demo binary
//!
//! Mounts the blog view against the configured endpoint, prints the fetched
//! posts, then opens and closes the new-post form.

use blog::{
    BlogAction, BlogConfig, BlogEnvironment, BlogReducer, BlogState, HttpPostsClient, render_posts,
};
use primer_core::environment::SystemClock;
use primer_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How many posts to print
const PREVIEW: usize = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog=info,primer_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = BlogConfig::from_env();
    info!(url = %config.posts_url, "Mounting blog view");

    let env = BlogEnvironment::new(
        Arc::new(HttpPostsClient::new(&config)),
        Arc::new(SystemClock),
    );
    let store = Store::new(BlogState::default(), BlogReducer::new(), env);

    let mut handle = store.send(BlogAction::Mount).await?;
    handle.wait().await;

    let state = store.state(Clone::clone).await;
    let rendered = render_posts(&state);
    println!("=== Blog ({} posts) ===", rendered.len());
    for entry in rendered.iter().take(PREVIEW) {
        println!("\n{entry}");
    }
    if rendered.len() > PREVIEW {
        println!("\n... {} more", rendered.len() - PREVIEW);
    }

    store.send(BlogAction::ShowForm).await?;
    println!("\nForm open: {}", store.state(|s| s.show_form).await);
    store.send(BlogAction::CloseForm).await?;
    println!("Form open: {}", store.state(|s| s.show_form).await);

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
