//! `DataTable`: the controller tying columns, rows and state together.

use crate::column::{Column, ColumnModel};
use crate::error::TableError;
use crate::message::{TableAction, TableCallbacks, TableMessage};
use crate::options::{TableConfig, TableOptions};
use crate::pipeline::TransformCache;
use crate::record::Record;
use crate::sort::SortState;
use crate::state::TableState;
use crate::view::{DataStatus, HeaderView, PageRow, PageView, PaginationView, TableView};

/// Sibling pages shown either side of the current one in the page window.
const PAGE_WINDOW_SIBLINGS: usize = 1;

/// A table over rows of type `T`.
///
/// The caller hands rows to [`DataTable::view`] on every render; the table
/// owns sort, filter, selection, expansion and page state in between, and
/// reports changes through [`TableCallbacks`].
///
/// Page bounds for interactions are taken from the most recent render. A
/// change that can alter the filtered row count (filter, columns) forgets
/// them, and client-side page moves are rejected until the next render.
#[derive(Debug)]
pub struct DataTable<T> {
    columns: ColumnModel<T>,
    options: TableOptions,
    state: TableState,
    callbacks: TableCallbacks,
    cache: TransformCache,
    /// Rows left after filtering at the last render, while still valid
    transformed_len: Option<usize>,
    /// Rows on the page at the last render
    page_len: usize,
}

impl<T: Record> DataTable<T> {
    /// Create a table. Fails if the options are invalid.
    pub fn new(columns: ColumnModel<T>, options: TableOptions) -> Result<Self, TableError> {
        options.validate()?;
        let state = TableState::from_options(&options);
        log::debug!(
            "table created: {} columns, page size {}, manual={}",
            columns.len(),
            options.page_size,
            options.manual_pagination
        );
        Ok(Self {
            columns,
            options,
            state,
            callbacks: TableCallbacks::new(),
            cache: TransformCache::new(),
            transformed_len: None,
            page_len: 0,
        })
    }

    /// Create a table of field columns from a loaded config.
    pub fn from_config(config: TableConfig) -> Result<Self, TableError> {
        let columns = ColumnModel::from_specs(config.columns)?;
        Self::new(columns, config.options)
    }

    /// Register callbacks.
    #[must_use]
    pub fn with_callbacks(mut self, callbacks: TableCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Get the column model.
    #[must_use]
    pub const fn columns(&self) -> &ColumnModel<T> {
        &self.columns
    }

    /// Replace the columns, keeping visibility of surviving ids.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) -> Result<(), TableError> {
        self.columns.replace(columns)?;
        self.transformed_len = None;
        Ok(())
    }

    /// Get the options the table was built with.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> &TableState {
        &self.state
    }

    /// Active sort.
    #[must_use]
    pub const fn sort(&self) -> Option<&SortState> {
        self.state.sort.as_ref()
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.state.paginator.current_page()
    }

    /// Number of pages as of the last render.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        let len = match self.transformed_len {
            Some(len) => len,
            None => 0,
        };
        self.state.paginator.total_pages(len)
    }

    /// Forget the memoized row order, e.g. after mutating versioned rows in
    /// place.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
        self.transformed_len = None;
    }

    /// Compute what to render for `rows`.
    pub fn view<'a>(&mut self, rows: &'a [T], status: &DataStatus) -> TableView<'a, T> {
        if status.loading {
            return TableView::Loading {
                headers: self.headers(),
                rows: self.state.paginator.page_size(),
            };
        }
        if let Some(message) = &status.error {
            log::debug!("rendering error state: {message}");
            return TableView::Error {
                message: message.clone(),
            };
        }

        let headers = self.headers();
        let order = self.cache.get(
            rows,
            status.version,
            &self.columns,
            self.state.filter.as_deref(),
            self.state.sort.as_ref(),
        );
        let transformed_len = order.len();
        let paginator = &mut self.state.paginator;
        paginator.clamp(transformed_len);
        let page: Vec<usize> = order
            .get(paginator.page_range(transformed_len))
            .map(<[usize]>::to_vec)
            .unwrap_or_default();

        self.transformed_len = Some(transformed_len);
        self.page_len = page.len();
        self.state.selection.retain_below(self.page_len);
        self.state.expansion.retain_below(self.page_len);

        if self.state.paginator.total_count(transformed_len) == 0 {
            return TableView::Empty {
                filtered: self.state.filter.is_some() && !rows.is_empty(),
            };
        }

        let page_rows = page
            .into_iter()
            .enumerate()
            .filter_map(|(index, source_index)| {
                let row = rows.get(source_index)?;
                Some(PageRow {
                    index,
                    source_index,
                    row,
                    cells: self
                        .columns
                        .visible_columns()
                        .map(|c| c.value_of(row, source_index))
                        .collect(),
                    selected: self.state.selection.is_selected(index),
                    expanded: self.state.expansion.is_expanded(index),
                })
            })
            .collect();

        TableView::Populated(PageView {
            headers,
            rows: page_rows,
            pagination: self.pagination_view(),
            selectable: self.options.selectable,
            select_all: self.state.selection.check_state(self.page_len),
        })
    }

    fn headers(&self) -> Vec<HeaderView> {
        self.columns
            .visible_columns()
            .map(|c| HeaderView {
                id: c.id.clone(),
                header: c.header.clone(),
                sortable: c.sortable,
                sort: SortState::direction_for(self.state.sort.as_ref(), &c.id),
                width: c.width,
                align: c.align,
            })
            .collect()
    }

    fn pagination_view(&self) -> PaginationView {
        let paginator = &self.state.paginator;
        let len = self.transformed_len.unwrap_or(0);
        PaginationView {
            current_page: paginator.current_page(),
            total_pages: paginator.total_pages(len),
            total_count: paginator.total_count(len),
            page_size: paginator.page_size(),
            page_size_options: self.options.page_size_options.clone(),
            can_previous: paginator.can_previous(),
            can_next: paginator.can_next(len),
            row_span: paginator.row_span(len),
            window: paginator.page_window(PAGE_WINDOW_SIBLINGS, len),
            manual: paginator.is_manual(),
        }
    }

    fn emit(&mut self, message: TableMessage) -> Option<TableMessage> {
        self.callbacks.notify(&message);
        Some(message)
    }

    /// Handle a click on a column header.
    ///
    /// Sortable columns cycle ascending, descending, unsorted. Unknown and
    /// non-sortable columns are ignored.
    pub fn click_header(&mut self, column_id: &str) -> Option<TableMessage> {
        let column = match self.columns.lookup(column_id) {
            Ok(column) => column,
            Err(err) => {
                log::debug!("header click ignored: {err}");
                return None;
            }
        };
        if !column.sortable {
            return None;
        }
        let next = SortState::cycle(self.state.sort.as_ref(), column_id);
        log::debug!("sort changed: {next:?}");
        self.state.sort.clone_from(&next);
        self.emit(TableMessage::SortChanged(next))
    }

    /// Set the sort without notifying the caller.
    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.state.sort = sort;
    }

    /// Set the global filter. An empty term clears it.
    ///
    /// When the term changes, client mode returns to page 1. Returns `true`
    /// if the term changed.
    pub fn set_global_filter(&mut self, term: Option<&str>) -> bool {
        let term = term.filter(|t| !t.is_empty()).map(str::to_string);
        if term == self.state.filter {
            return false;
        }
        log::debug!("global filter changed: {term:?}");
        self.state.filter = term;
        self.state.paginator.reset_for_filter();
        self.transformed_len = None;
        true
    }

    /// Request a page. Out-of-range pages are ignored, as are client-side
    /// moves while the row count is unknown.
    pub fn go_to_page(&mut self, page: usize) -> Option<TableMessage> {
        let Some(len) = self.page_bounds() else {
            log::debug!("page {page} requested before row count is known");
            return None;
        };
        if !self.state.paginator.go_to_page(page, len) {
            return None;
        }
        log::debug!("page changed: {page}");
        self.emit(TableMessage::PageChanged(page))
    }

    /// Advance one page.
    pub fn next_page(&mut self) -> Option<TableMessage> {
        self.go_to_page(self.current_page() + 1)
    }

    /// Go back one page.
    pub fn previous_page(&mut self) -> Option<TableMessage> {
        self.go_to_page(self.current_page().saturating_sub(1))
    }

    /// Set the page without notifying the caller; clamps to the known range,
    /// or at the next render when the range is unknown.
    pub fn set_page(&mut self, page: usize) {
        let len = self.page_bounds().unwrap_or(usize::MAX);
        self.state.paginator.set_page(page, len);
    }

    /// Row count page moves are checked against. Manual mode pages against
    /// the reported total, so it is always known.
    fn page_bounds(&self) -> Option<usize> {
        if self.state.paginator.is_manual() {
            Some(self.transformed_len.unwrap_or(0))
        } else {
            self.transformed_len
        }
    }

    /// Change rows per page. Zero and the current size are ignored.
    pub fn change_page_size(&mut self, page_size: usize) -> Option<TableMessage> {
        if !self.state.paginator.set_page_size(page_size) {
            return None;
        }
        log::debug!("page size changed: {page_size}");
        self.emit(TableMessage::PageSizeChanged(page_size))
    }

    /// Report the server-side total in manual mode.
    pub fn set_total_count(&mut self, total_count: usize) {
        self.state.paginator.set_total_count(total_count);
    }

    /// Toggle selection of a row on the current page.
    ///
    /// Ignored when selection is disabled or the index is off the page.
    pub fn toggle_row(&mut self, index: usize) -> bool {
        if !self.can_select(index) {
            return false;
        }
        self.state.selection.toggle(index);
        true
    }

    /// Shift-click: extend the selection to a row on the current page.
    pub fn toggle_row_range(&mut self, index: usize) -> bool {
        if !self.can_select(index) {
            return false;
        }
        self.state.selection.toggle_range(index);
        true
    }

    /// Header checkbox: select the whole page, or clear it.
    pub fn toggle_all_rows(&mut self) -> bool {
        if !self.options.selectable {
            return false;
        }
        self.state.selection.toggle_all(self.page_len);
        true
    }

    fn can_select(&self, index: usize) -> bool {
        self.options.selectable && index < self.page_len
    }

    /// Toggle the detail panel of a row on the current page.
    pub fn toggle_expand(&mut self, index: usize) -> bool {
        if index >= self.page_len {
            return false;
        }
        self.state.expansion.toggle_expand(index);
        true
    }

    /// Show or hide a column. Unknown ids are ignored.
    pub fn toggle_column(&mut self, column_id: &str) -> bool {
        if !self.columns.toggle_visibility(column_id) {
            return false;
        }
        self.transformed_len = None;
        true
    }

    /// The user asked to retry after an error.
    pub fn retry(&mut self) -> Option<TableMessage> {
        self.emit(TableMessage::RetryRequested)
    }

    /// Apply a user interaction.
    pub fn dispatch(&mut self, action: TableAction) -> Option<TableMessage> {
        match action {
            TableAction::HeaderClicked(id) => self.click_header(&id),
            TableAction::PageRequested(page) => self.go_to_page(page),
            TableAction::NextPage => self.next_page(),
            TableAction::PreviousPage => self.previous_page(),
            TableAction::PageSizeRequested(size) => self.change_page_size(size),
            TableAction::RowToggled { index, shift } => {
                if shift {
                    self.toggle_row_range(index);
                } else {
                    self.toggle_row(index);
                }
                None
            }
            TableAction::AllRowsToggled => {
                self.toggle_all_rows();
                None
            }
            TableAction::RowExpandToggled(index) => {
                self.toggle_expand(index);
                None
            }
            TableAction::ColumnToggled(id) => {
                self.toggle_column(&id);
                None
            }
            TableAction::RetryClicked => self.retry(),
        }
    }
}
