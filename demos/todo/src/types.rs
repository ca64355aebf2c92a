//! Domain types for the to-do list.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Items present before any user interaction
pub const SEED_ITEMS: [&str; 3] = ["Study React", "Exercise", "Read a book"];

/// State of the to-do list
///
/// An ordered sequence of text items in insertion order. Items have no
/// identity beyond their text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Items in insertion order
    pub items: Vec<String>,
}

impl TodoState {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates the list with [`SEED_ITEMS`]
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_items(SEED_ITEMS)
    }

    /// Creates a list holding `items` in order
    #[must_use]
    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Immutable copy of the items
    #[must_use]
    pub fn snapshot(&self) -> Arc<[String]> {
        Arc::from(self.items.as_slice())
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks if an item with this text exists
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }
}

/// Actions the list reacts to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append an item to the end of the list
    Add {
        /// Item text, stored as given
        item: String,
    },

    /// Remove every item equal to the given text
    Delete {
        /// Item text to match
        item: String,
    },
}
