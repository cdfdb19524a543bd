//! Row selection on the current page.
//!
//! Selection is positional: indices refer to rows of the rendered page, not
//! to row identities. Changing page, sort or filter while rows are selected
//! keeps the indices, which then point at whatever rows now occupy those
//! positions. Indices past the end of a shorter page are dropped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Checkbox state (supports tri-state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckState {
    /// Not checked
    #[default]
    Unchecked,
    /// Checked
    Checked,
    /// Indeterminate (some but not all rows selected)
    Indeterminate,
}

impl CheckState {
    /// Check if checked (true for Checked, false for others).
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Check if indeterminate.
    #[must_use]
    pub const fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

/// Set of selected page-relative row indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<usize>,
    anchor: Option<usize>,
}

impl SelectionTracker {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index` and make it the range anchor.
    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        self.anchor = Some(index);
    }

    /// Extend the selection from the anchor to `index`, inclusive.
    ///
    /// Only ever adds. With nothing selected this is a plain [`toggle`].
    ///
    /// [`toggle`]: Self::toggle
    pub fn toggle_range(&mut self, index: usize) {
        if self.selected.is_empty() {
            self.toggle(index);
            return;
        }
        let anchor = self.anchor.unwrap_or(index);
        let (start, end) = (anchor.min(index), anchor.max(index));
        self.selected.extend(start..=end);
        self.anchor = Some(index);
    }

    /// Select every row of a page, or clear if all are already selected.
    pub fn toggle_all(&mut self, page_len: usize) {
        if page_len > 0 && self.check_state(page_len) == CheckState::Checked {
            self.clear();
        } else {
            self.selected = (0..page_len).collect();
        }
    }

    /// Header checkbox state for a page of `page_len` rows.
    #[must_use]
    pub fn check_state(&self, page_len: usize) -> CheckState {
        let count = self.selected.range(..page_len).count();
        match count {
            0 => CheckState::Unchecked,
            n if n == page_len => CheckState::Checked,
            _ => CheckState::Indeterminate,
        }
    }

    /// Check whether a row is selected.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Number of selected rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Most recently toggled index.
    #[must_use]
    pub const fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// Drop indices that do not exist on a page of `page_len` rows.
    pub fn retain_below(&mut self, page_len: usize) {
        self.selected.retain(|&i| i < page_len);
        if self.anchor.is_some_and(|a| a >= page_len) {
            self.anchor = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(tracker: &SelectionTracker) -> Vec<usize> {
        tracker.indices().collect()
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut sel = SelectionTracker::new();
        sel.toggle(3);
        assert!(sel.is_selected(3));
        sel.toggle(3);
        assert!(!sel.is_selected(3));
        assert_eq!(sel.anchor(), Some(3));
    }

    #[test]
    fn test_toggle_range_extends_from_anchor() {
        let mut sel = SelectionTracker::new();
        sel.toggle(2);
        sel.toggle_range(5);
        assert_eq!(set(&sel), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_toggle_range_backwards() {
        let mut sel = SelectionTracker::new();
        sel.toggle(6);
        sel.toggle_range(4);
        assert_eq!(set(&sel), vec![4, 5, 6]);
    }

    #[test]
    fn test_toggle_range_only_adds() {
        let mut sel = SelectionTracker::new();
        sel.toggle(1);
        sel.toggle(3);
        sel.toggle_range(3);
        assert_eq!(set(&sel), vec![1, 3]);
        sel.toggle_range(1);
        assert_eq!(set(&sel), vec![1, 2, 3]);
    }

    #[test]
    fn test_toggle_range_on_empty_is_toggle() {
        let mut sel = SelectionTracker::new();
        sel.toggle_range(4);
        assert_eq!(set(&sel), vec![4]);
        assert_eq!(sel.anchor(), Some(4));
    }

    #[test]
    fn test_toggle_range_after_deselect_to_empty() {
        let mut sel = SelectionTracker::new();
        sel.toggle(2);
        sel.toggle(2);
        sel.toggle_range(5);
        assert_eq!(set(&sel), vec![5]);
    }

    #[test]
    fn test_toggle_all() {
        let mut sel = SelectionTracker::new();
        sel.toggle(1);
        assert_eq!(sel.check_state(4), CheckState::Indeterminate);
        sel.toggle_all(4);
        assert_eq!(set(&sel), vec![0, 1, 2, 3]);
        assert_eq!(sel.check_state(4), CheckState::Checked);
        sel.toggle_all(4);
        assert!(sel.is_empty());
        assert_eq!(sel.check_state(4), CheckState::Unchecked);
    }

    #[test]
    fn test_toggle_all_on_empty_page() {
        let mut sel = SelectionTracker::new();
        sel.toggle_all(0);
        assert!(sel.is_empty());
        assert_eq!(sel.check_state(0), CheckState::Unchecked);
    }

    #[test]
    fn test_retain_below() {
        let mut sel = SelectionTracker::new();
        sel.toggle(1);
        sel.toggle(8);
        sel.retain_below(5);
        assert_eq!(set(&sel), vec![1]);
        assert_eq!(sel.anchor(), None);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_check_state_helpers() {
        assert!(CheckState::Checked.is_checked());
        assert!(!CheckState::Indeterminate.is_checked());
        assert!(CheckState::Indeterminate.is_indeterminate());
        assert_eq!(CheckState::default(), CheckState::Unchecked);
    }

    proptest! {
        #[test]
        fn prop_range_covers_anchor_to_index(a in 0usize..50, b in 0usize..50) {
            let mut sel = SelectionTracker::new();
            sel.toggle(a);
            sel.toggle_range(b);
            let expected: Vec<usize> = (a.min(b)..=a.max(b)).collect();
            prop_assert_eq!(set(&sel), expected);
        }

        #[test]
        fn prop_range_never_removes(picks in prop::collection::vec(0usize..30, 1..10), target in 0usize..30) {
            let mut sel = SelectionTracker::new();
            for p in &picks {
                sel.toggle(*p);
            }
            let before = set(&sel);
            sel.toggle_range(target);
            let after = set(&sel);
            for i in before {
                prop_assert!(after.contains(&i));
            }
        }
    }
}
