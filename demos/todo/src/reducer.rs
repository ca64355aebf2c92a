//! Reducer logic for the to-do list.
//!
//! Neither action validates its input: `Add` accepts empty and duplicate
//! text, `Delete` of unknown text leaves the list as it was.

use crate::types::{TodoAction, TodoState};
use primer_core::{SmallVec, effect::Effect, reducer::Reducer};

/// Reducer for the to-do list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { item } => {
                tracing::debug!(item = %item, "Adding item");
                state.items.push(item);
            },
            TodoAction::Delete { item } => {
                let before = state.items.len();
                state.items.retain(|existing| *existing != item);
                tracing::debug!(
                    item = %item,
                    removed = before - state.items.len(),
                    "Deleted item"
                );
            },
        }

        SmallVec::new()
    }
}
