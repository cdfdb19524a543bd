//! Messages flowing into and out of a table.
//!
//! [`TableAction`]s are user interactions fed to [`DataTable::dispatch`];
//! [`TableMessage`]s are what the table reports back, both as return values
//! and through the registered [`TableCallbacks`].
//!
//! [`DataTable::dispatch`]: crate::table::DataTable::dispatch

use crate::sort::SortState;
use std::fmt;

/// Type alias for a callback receiving a page number or page size.
pub type UsizeCallback = Box<dyn FnMut(usize)>;

/// Type alias for the sort-change callback.
pub type SortCallback = Box<dyn FnMut(Option<&SortState>)>;

/// Type alias for the retry callback.
pub type RetryCallback = Box<dyn FnMut()>;

/// Notification emitted after an interaction changed table state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMessage {
    /// The current page changed (1-based).
    PageChanged(usize),
    /// Rows per page changed.
    PageSizeChanged(usize),
    /// Sort column or direction changed; `None` means unsorted.
    SortChanged(Option<SortState>),
    /// The user asked to retry after an error.
    RetryRequested,
}

/// A user interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// A column header was clicked.
    HeaderClicked(String),
    /// A page button was clicked.
    PageRequested(usize),
    /// The next-page control was clicked.
    NextPage,
    /// The previous-page control was clicked.
    PreviousPage,
    /// A page size was picked.
    PageSizeRequested(usize),
    /// A row checkbox was clicked, optionally with shift held.
    RowToggled {
        /// Page-relative row index
        index: usize,
        /// Whether shift was held (extend selection)
        shift: bool,
    },
    /// The header checkbox was clicked.
    AllRowsToggled,
    /// A row's expand control was clicked.
    RowExpandToggled(usize),
    /// A column was shown or hidden from the column menu.
    ColumnToggled(String),
    /// The error panel's retry action was clicked.
    RetryClicked,
}

/// Caller callbacks invoked when state changes.
#[derive(Default)]
pub struct TableCallbacks {
    pub(crate) on_page_change: Option<UsizeCallback>,
    pub(crate) on_page_size_change: Option<UsizeCallback>,
    pub(crate) on_sort_change: Option<SortCallback>,
    pub(crate) on_retry: Option<RetryCallback>,
}

impl TableCallbacks {
    /// Create with no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page-change callback.
    #[must_use]
    pub fn on_page_change(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_page_change = Some(Box::new(f));
        self
    }

    /// Set the page-size-change callback.
    #[must_use]
    pub fn on_page_size_change(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_page_size_change = Some(Box::new(f));
        self
    }

    /// Set the sort-change callback.
    #[must_use]
    pub fn on_sort_change(mut self, f: impl FnMut(Option<&SortState>) + 'static) -> Self {
        self.on_sort_change = Some(Box::new(f));
        self
    }

    /// Set the retry callback.
    #[must_use]
    pub fn on_retry(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_retry = Some(Box::new(f));
        self
    }

    /// Deliver a message to the matching callback, if registered.
    pub fn notify(&mut self, message: &TableMessage) {
        match message {
            TableMessage::PageChanged(page) => {
                if let Some(f) = self.on_page_change.as_mut() {
                    f(*page);
                }
            }
            TableMessage::PageSizeChanged(size) => {
                if let Some(f) = self.on_page_size_change.as_mut() {
                    f(*size);
                }
            }
            TableMessage::SortChanged(sort) => {
                if let Some(f) = self.on_sort_change.as_mut() {
                    f(sort.as_ref());
                }
            }
            TableMessage::RetryRequested => {
                if let Some(f) = self.on_retry.as_mut() {
                    f();
                }
            }
        }
    }
}

impl fmt::Debug for TableCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableCallbacks")
            .field("on_page_change", &self.on_page_change.is_some())
            .field("on_page_size_change", &self.on_page_size_change.is_some())
            .field("on_sort_change", &self.on_sort_change.is_some())
            .field("on_retry", &self.on_retry.is_some())
            .finish()
    }
}
