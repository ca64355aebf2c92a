//! Text rendering of the list view.

/// Renders one line per item with its delete control
#[must_use]
pub fn render_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("{item}  [Delete]"))
        .collect()
}
