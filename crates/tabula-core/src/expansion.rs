//! Expanded rows on the current page.
//!
//! Like selection, expansion is keyed by page-relative index. Any number of
//! rows may be expanded at once.

use std::collections::BTreeSet;

/// Set of page-relative row indices showing their detail panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionTracker {
    expanded: BTreeSet<usize>,
}

impl ExpansionTracker {
    /// Create with nothing expanded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip whether a row is expanded.
    pub fn toggle_expand(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    /// Check whether a row is expanded.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Expanded indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }

    /// Number of expanded rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Check if no row is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Collapse every row.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Drop indices that do not exist on a page of `page_len` rows.
    pub fn retain_below(&mut self, page_len: usize) {
        self.expanded.retain(|&i| i < page_len);
    }
}
