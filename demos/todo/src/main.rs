//! Scripted walk-through of the to-do list demo.
//!
//! A single provider is shared by the list view and the input form; the view
//! re-renders after every change notification.

use todo::view::render_list;
use todo::{ToDoListProvider, TodoInput};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn render(provider: &ToDoListProvider, heading: &str) {
    let items = provider.read().await;
    println!("\n{heading} ({} items)", items.len());
    for line in render_list(&items) {
        println!("  {line}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,primer_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== To-Do List ===");

    let provider = ToDoListProvider::new();
    let mut changes = provider.subscribe();
    let mut input = TodoInput::new(provider.clone());

    render(&provider, "Seed list").await;

    input.set_draft("Write the report");
    input.submit().await?;
    changes.changed().await?;
    render(&provider, "After adding 'Write the report'").await;

    // Empty drafts never reach the list
    input.set_draft("");
    input.submit().await?;
    println!("\nEmpty draft ignored, changed: {}", changes.has_changed());

    provider.delete("Exercise").await?;
    changes.changed().await?;
    render(&provider, "After deleting 'Exercise'").await;

    provider.unmount().await?;
    println!("\n=== Demo Complete ===");
    Ok(())
}
