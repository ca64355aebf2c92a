//! The provider that owns the to-do list and hands it to views.

use crate::reducer::TodoReducer;
use crate::types::{TodoAction, TodoState};
use primer_runtime::{StateSubscription, Store, StoreError};
use std::sync::Arc;
use std::time::Duration;

/// Store type backing the provider
pub type TodoStore = Store<TodoState, TodoAction, (), TodoReducer>;

/// Immutable view of the list at one point in time
pub type Snapshot = Arc<[String]>;

/// Owner of the shared to-do list
///
/// The top-level view creates the provider and passes clones down; every
/// clone reads and mutates the same list. Mutations are serialized by the
/// underlying store and wake every [`StateSubscription`].
#[derive(Clone)]
pub struct ToDoListProvider {
    store: TodoStore,
}

impl ToDoListProvider {
    /// Creates a provider holding the seed items
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(TodoState::seeded())
    }

    /// Creates a provider holding `state`
    #[must_use]
    pub fn with_state(state: TodoState) -> Self {
        Self {
            store: Store::new(state, TodoReducer::new(), ()),
        }
    }

    /// Appends `item` to the end of the list
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after [`unmount`](Self::unmount).
    pub async fn add(&self, item: impl Into<String>) -> Result<(), StoreError> {
        self.store
            .send(TodoAction::Add { item: item.into() })
            .await?;
        Ok(())
    }

    /// Removes every item equal to `item`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after [`unmount`](Self::unmount).
    pub async fn delete(&self, item: impl Into<String>) -> Result<(), StoreError> {
        self.store
            .send(TodoAction::Delete { item: item.into() })
            .await?;
        Ok(())
    }

    /// Current list as an immutable snapshot
    pub async fn read(&self) -> Snapshot {
        self.store.state(TodoState::snapshot).await
    }

    /// Subscribe to list changes
    #[must_use]
    pub fn subscribe(&self) -> StateSubscription {
        self.store.subscribe()
    }

    /// Stops accepting changes
    ///
    /// Snapshots stay readable; `add` and `delete` fail afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if in-flight effects outlive
    /// the timeout. The list reducer produces none, so this does not happen
    /// in practice.
    pub async fn unmount(&self) -> Result<(), StoreError> {
        self.store.shutdown(Duration::from_secs(1)).await
    }
}

impl Default for ToDoListProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToDoListProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToDoListProvider")
            .field("revision", &self.store.revision())
            .finish_non_exhaustive()
    }
}
