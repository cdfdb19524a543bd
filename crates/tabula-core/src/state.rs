//! Per-instance table state.

use crate::expansion::ExpansionTracker;
use crate::options::TableOptions;
use crate::pagination::Paginator;
use crate::selection::SelectionTracker;
use crate::sort::SortState;

/// Everything a table instance owns between renders.
///
/// Each table builds its own; nothing is shared between instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    /// Active sort
    pub sort: Option<SortState>,
    /// Global filter term
    pub filter: Option<String>,
    /// Selected rows on the current page
    pub selection: SelectionTracker,
    /// Expanded rows on the current page
    pub expansion: ExpansionTracker,
    /// Page position and size
    pub paginator: Paginator,
}

impl TableState {
    /// Initial state for the given options.
    #[must_use]
    pub fn from_options(options: &TableOptions) -> Self {
        let mut paginator = if options.manual_pagination {
            Paginator::manual(options.page_size, options.total_count.unwrap_or(0))
        } else {
            Paginator::new(options.page_size)
        };
        // Client-mode totals are unknown until rows arrive; the first render
        // clamps the page.
        paginator.set_page(options.page, usize::MAX);
        Self {
            sort: options.initial_sort.clone(),
            filter: options.global_filter.clone().filter(|t| !t.is_empty()),
            selection: SelectionTracker::new(),
            expansion: ExpansionTracker::new(),
            paginator,
        }
    }

    /// Active filter term, if any.
    #[must_use]
    pub fn filter_term(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}
