//! Counter demo binary
//!
//! Presses the buttons in a fixed order and re-renders after each change.

use counter::view::render;
use counter::{CounterAction, CounterReducer, CounterState};
use primer_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,primer_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Store::new(CounterState::default(), CounterReducer::new(), ());
    let mut changes = store.subscribe();

    println!("{}", render(&store.state(|s| *s).await));

    for action in [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::Decrement,
        CounterAction::Decrement,
    ] {
        println!("\n>>> {action:?}");
        store.send(action).await?;
        changes.changed().await?;
        println!("{}", render(&store.state(|s| *s).await));
    }

    Ok(())
}
