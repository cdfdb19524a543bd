//! Derived state handed to the presentation layer.

use crate::column::TextAlign;
use crate::pagination::PageItem;
use crate::selection::CheckState;
use crate::sort::SortDirection;
use crate::value::CellValue;

/// Fetch status reported by the caller on each render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataStatus {
    /// Rows are being fetched
    pub loading: bool,
    /// The last fetch failed with this message
    pub error: Option<String>,
    /// Version of the rows; equal versions must mean equal rows
    pub version: Option<u64>,
}

impl DataStatus {
    /// Rows are available.
    #[must_use]
    pub fn ready() -> Self {
        Self::default()
    }

    /// Rows are being fetched.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// The fetch failed.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Tag the rows with a version so their filtered and sorted order can be
    /// reused by later renders with the same version.
    #[must_use]
    pub const fn with_version(mut self, version: u64) -> Self {
        self.version = Some(version);
        self
    }
}

/// A visible column header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    /// Column id
    pub id: String,
    /// Header label
    pub header: String,
    /// Whether clicking sorts
    pub sortable: bool,
    /// Sort indicator, when this column is the sort column
    pub sort: Option<SortDirection>,
    /// Width hint
    pub width: Option<f32>,
    /// Text alignment
    pub align: TextAlign,
}

/// A row on the current page.
#[derive(Debug, Clone)]
pub struct PageRow<'a, T> {
    /// Page-relative index (what selection and expansion refer to)
    pub index: usize,
    /// Index into the caller's rows
    pub source_index: usize,
    /// The row itself
    pub row: &'a T,
    /// Values of the visible columns, in header order
    pub cells: Vec<CellValue>,
    /// Whether the row is selected
    pub selected: bool,
    /// Whether the row's detail is expanded
    pub expanded: bool,
}

/// Pagination control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    /// Current page (1-based)
    pub current_page: usize,
    /// Number of pages (at least 1)
    pub total_pages: usize,
    /// Total rows across pages
    pub total_count: usize,
    /// Rows per page
    pub page_size: usize,
    /// Page-size choices
    pub page_size_options: Vec<usize>,
    /// Previous control enabled
    pub can_previous: bool,
    /// Next control enabled
    pub can_next: bool,
    /// 1-based first and last row shown
    pub row_span: Option<(usize, usize)>,
    /// Numbered page buttons
    pub window: Vec<PageItem>,
    /// Whether the caller paginates
    pub manual: bool,
}

/// A populated page.
#[derive(Debug, Clone)]
pub struct PageView<'a, T> {
    /// Visible column headers
    pub headers: Vec<HeaderView>,
    /// Rows on this page
    pub rows: Vec<PageRow<'a, T>>,
    /// Pagination controls
    pub pagination: PaginationView,
    /// Whether selection checkboxes are shown
    pub selectable: bool,
    /// Header checkbox state
    pub select_all: CheckState,
}

impl<'a, T> PageView<'a, T> {
    /// Number of rows on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the page has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected rows in page order.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<&'a T> {
        self.rows.iter().filter(|r| r.selected).map(|r| r.row).collect()
    }

    /// Expanded rows in page order.
    #[must_use]
    pub fn expanded_rows(&self) -> Vec<&'a T> {
        self.rows.iter().filter(|r| r.expanded).map(|r| r.row).collect()
    }
}

/// What to render, in priority order: loading, error, empty, populated.
#[derive(Debug, Clone)]
pub enum TableView<'a, T> {
    /// Rows are being fetched; render a skeleton.
    Loading {
        /// Visible column headers
        headers: Vec<HeaderView>,
        /// Skeleton rows to draw
        rows: usize,
    },
    /// The fetch failed; render the message and a retry action.
    Error {
        /// Caller-supplied message
        message: String,
    },
    /// There is nothing to show.
    Empty {
        /// Whether a global filter removed every row
        filtered: bool,
    },
    /// A page of rows.
    Populated(PageView<'a, T>),
}

impl<'a, T> TableView<'a, T> {
    /// Check if this is the loading state.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Check if this is the error state.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Check if this is the empty state.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// The page, when populated.
    #[must_use]
    pub const fn page(&self) -> Option<&PageView<'a, T>> {
        match self {
            Self::Populated(page) => Some(page),
            _ => None,
        }
    }
}
