//! Text rendering of the counter view.

use crate::CounterState;

/// Title shown above the controls
pub const TITLE: &str = "Counter App";

/// Renders the title and the `[-] count [+]` row
#[must_use]
pub fn render(state: &CounterState) -> String {
    format!("{TITLE}\n[-] {} [+]", state.count)
}
