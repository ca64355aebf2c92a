//! To-do list demo: shared list state through a provider.
//!
//! A list of text items is owned by a [`ToDoListProvider`]. Views clone the
//! provider, read immutable snapshots of the list, and call `add` / `delete`.
//! Every change wakes the views' subscriptions so they can re-render.
//!
//! - Items are plain strings compared by value; there are no identifiers.
//! - `add` appends, even empty or duplicate text.
//! - `delete` removes every item equal to the given text and is a no-op for
//!   unknown text.
//! - The list starts from a fixed seed and is never persisted.
//!
//! # Quick Start
//!
//! ```no_run
//! use todo::ToDoListProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ToDoListProvider::new();
//! let mut changes = provider.subscribe();
//!
//! provider.add("Buy milk").await?;
//! changes.changed().await?;
//!
//! let items = provider.read().await;
//! assert_eq!(items.last().map(String::as_str), Some("Buy milk"));
//! # Ok(())
//! # }
//! ```

pub mod input;
pub mod provider;
pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use input::TodoInput;
pub use provider::{Snapshot, ToDoListProvider, TodoStore};
pub use reducer::TodoReducer;
pub use types::{SEED_ITEMS, TodoAction, TodoState};
