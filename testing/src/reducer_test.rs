//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use primer_core::{effect::Effect, reducer::Reducer};

/// A check registered on a [`ReducerTest`], run in registration order
enum Check<S, A> {
    State(Box<dyn FnOnce(&S)>),
    Effects(Box<dyn FnOnce(&[Effect<A>])>),
}

/// Given-When-Then harness for a reducer
///
/// Actions are reduced in the order given. State checks see the state after
/// the last action; effect checks see the effects the last action returned.
///
/// # Example
///
/// ```ignore
/// use primer_testing::ReducerTest;
///
/// ReducerTest::new(TodoReducer::new())
///     .with_env(())
///     .given_state(TodoState::from_items(["A", "B"]))
///     .when_action(TodoAction::Delete { item: "A".to_string() })
///     .then_state(|state| assert_eq!(state.items, vec!["B".to_string()]))
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    given: Option<S>,
    actions: Vec<A>,
    checks: Vec<Check<S, A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Start a test for `reducer`
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            given: None,
            actions: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Environment handed to every reduction
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Given: the state before the first action
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.given = Some(state);
        self
    }

    /// When: one more action to reduce
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// When: several actions, reduced in order
    #[must_use]
    pub fn when_actions(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Then: inspect the final state
    #[must_use]
    pub fn then_state<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.checks.push(Check::State(Box::new(check)));
        self
    }

    /// Then: the final state equals `expected`
    #[must_use]
    pub fn then_state_eq(self, expected: S) -> Self
    where
        S: PartialEq + std::fmt::Debug + 'static,
    {
        self.then_state(move |state| assert_eq!(*state, expected, "unexpected final state"))
    }

    /// Then: inspect the effects of the last action
    #[must_use]
    pub fn then_effects<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.checks.push(Check::Effects(Box::new(check)));
        self
    }

    /// Reduce every action, run the checks and return the final state
    ///
    /// # Panics
    ///
    /// Panics when the state, the environment or the actions are missing, or
    /// when a check fails.
    #[allow(clippy::panic)] // Test harness
    pub fn run(self) -> S {
        let (Some(mut state), Some(env)) = (self.given, self.environment) else {
            panic!("ReducerTest needs given_state() and with_env() before run()");
        };
        assert!(!self.actions.is_empty(), "ReducerTest needs at least one action");

        let mut last_effects = Vec::new();
        for action in self.actions {
            last_effects = self.reducer.reduce(&mut state, action, &env).into_vec();
        }

        for check in self.checks {
            match check {
                Check::State(check) => check(&state),
                Check::Effects(check) => check(&last_effects),
            }
        }

        state
    }
}

/// Helper assertions for effects
pub mod assertions {
    use primer_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if effects is not empty.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(Effect::is_none),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that effects contain at least one Future effect
    ///
    /// # Panics
    ///
    /// Panics if no Future effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_future_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Future(_))),
            "Expected at least one Future effect, but none found"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_core::{smallvec, SmallVec};

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        Fetch,
    }

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    smallvec![Effect::None]
                },
                TestAction::Decrement => {
                    state.count -= 1;
                    smallvec![Effect::None]
                },
                TestAction::Fetch => smallvec![Effect::future(async { Some(TestAction::Increment) })],
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        let state = ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state_eq(TestState { count: 1 })
            .then_effects(assertions::assert_no_effects)
            .run();

        assert_eq!(state.count, 1);
    }

    #[test]
    #[should_panic(expected = "needs given_state")]
    fn test_missing_given_state_panics() {
        let _ = ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .when_action(TestAction::Increment)
            .run();
    }

    #[test]
    fn test_reducer_test_action_sequence() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 5 })
            .when_actions([TestAction::Decrement, TestAction::Decrement, TestAction::Increment])
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .run();
    }

    #[test]
    fn test_effects_come_from_last_action() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_actions([TestAction::Increment, TestAction::Fetch])
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<TestAction>(&[Effect::None]);
        assertions::assert_no_effects::<TestAction>(&[]);
    }
}
