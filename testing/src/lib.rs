//! # Primer Testing
//!
//! Testing utilities and helpers for the state primer demos.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then builder for reducers
//! - Property-based testing strategies for text lists
//! - A tracing layer that captures log output for assertions
//!
//! ## Example
//!
//! ```ignore
//! use primer_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::default())
//!     .given_state(TodoState::from_items(["A", "B", "C"]))
//!     .when_action(TodoAction::Add { item: "D".to_string() })
//!     .then_state(|state| assert_eq!(state.items, ["A", "B", "C", "D"]))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use primer_core::environment::Clock;

pub mod logs;
pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use primer_testing::mocks::FixedClock;
    /// use primer_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Never in practice: the timestamp is a constant.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Property-based testing strategies
pub mod properties {
    use proptest::collection::vec;
    use proptest::prelude::*;

    /// Short printable list items, empty strings included
    pub fn item() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,12}"
    }

    /// Lists of up to 16 items, duplicates allowed
    pub fn items() -> impl Strategy<Value = Vec<String>> {
        vec(item(), 0..16)
    }

    /// Lists of up to 16 pairwise distinct items
    pub fn distinct_items() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::btree_set(item(), 0..16)
            .prop_map(|set| set.into_iter().collect())
            .prop_shuffle()
    }
}

// Re-export commonly used items
pub use logs::{CapturedLog, LogCapture};
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    proptest! {
        #[test]
        fn distinct_items_have_no_duplicates(items in properties::distinct_items()) {
            let mut sorted = items.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), items.len());
        }
    }
}
