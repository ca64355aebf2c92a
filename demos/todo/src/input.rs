//! The text-entry form that adds items.

use crate::provider::ToDoListProvider;
use primer_runtime::StoreError;

/// Draft text plus a submit action bound to a provider
///
/// Submitting an empty draft does nothing; any other draft is added to the
/// list and the draft is cleared. This is the only place that checks input.
#[derive(Debug, Clone)]
pub struct TodoInput {
    provider: ToDoListProvider,
    draft: String,
}

impl TodoInput {
    /// Creates a form with an empty draft
    #[must_use]
    pub const fn new(provider: ToDoListProvider) -> Self {
        Self {
            provider,
            draft: String::new(),
        }
    }

    /// Replaces the draft text
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Current draft text
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Adds the draft to the list
    ///
    /// Returns `false` without touching the list when the draft is empty.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the provider; the draft is kept in that case.
    pub async fn submit(&mut self) -> Result<bool, StoreError> {
        if self.draft.is_empty() {
            tracing::debug!("Ignoring empty draft");
            return Ok(false);
        }

        self.provider.add(self.draft.clone()).await?;
        self.draft.clear();
        Ok(true)
    }
}
