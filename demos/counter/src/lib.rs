//! # Counter Demo
//!
//! The smallest possible piece of view state: one number with a `-` and a
//! `+` button.
//!
//! The Counter is a **pure state machine** with NO side effects:
//! - The reducer never returns effects
//! - State changes are synchronous and deterministic
//!
//! ## Example
//!
//! ```no_run
//! use counter::{CounterAction, CounterReducer, CounterState};
//! use primer_runtime::Store;
//!
//! # async fn example() -> Result<(), primer_runtime::StoreError> {
//! let store = Store::new(CounterState::default(), CounterReducer::new(), ());
//!
//! store.send(CounterAction::Increment).await?;
//! let count = store.state(|s| s.count).await;
//! assert_eq!(count, 1);
//! # Ok(())
//! # }
//! ```

use primer_core::{SmallVec, effect::Effect, reducer::Reducer};

pub mod view;

/// Counter state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current count value, starts at zero and may go negative
    pub count: i64,
}

/// Counter actions, one per button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// The `+` button
    Increment,
    /// The `-` button
    Decrement,
}

/// Counter reducer
///
/// Counts saturate at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.count = state.count.saturating_add(1);
            },
            CounterAction::Decrement => {
                state.count = state.count.saturating_sub(1);
            },
        }
        tracing::debug!(count = state.count, ?action, "Counter updated");

        SmallVec::new()
    }
}
