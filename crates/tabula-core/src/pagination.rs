//! Page windows over the transformed rows.
//!
//! In client mode the paginator slices the transformed rows itself. In manual
//! mode the caller fetches one page at a time (e.g. over the network), reports
//! the total row count, and the rows it passes in are the current page.

use std::collections::BTreeSet;
use std::ops::Range;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Who slices rows into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Engine slices the transformed rows.
    #[default]
    Client,
    /// Caller supplies one page of rows and the overall total.
    Manual {
        /// Total rows across all pages
        total_count: usize,
    },
}

/// An entry in the numbered page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A page button (1-based)
    Page(usize),
    /// A gap of skipped pages
    Ellipsis,
}

/// Current page and page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_size: usize,
    mode: PaginationMode,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            mode: PaginationMode::Client,
        }
    }
}

impl Paginator {
    /// Client-side paginator. A zero page size falls back to the default.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            ..Self::default()
        }
    }

    /// Paginator for caller-fetched pages.
    #[must_use]
    pub fn manual(page_size: usize, total_count: usize) -> Self {
        Self {
            mode: PaginationMode::Manual { total_count },
            ..Self::new(page_size)
        }
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pagination mode.
    #[must_use]
    pub const fn mode(&self) -> PaginationMode {
        self.mode
    }

    /// Check if the caller paginates.
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        matches!(self.mode, PaginationMode::Manual { .. })
    }

    /// Total rows: the transformed length in client mode, the reported total
    /// in manual mode.
    #[must_use]
    pub const fn total_count(&self, transformed_len: usize) -> usize {
        match self.mode {
            PaginationMode::Client => transformed_len,
            PaginationMode::Manual { total_count } => total_count,
        }
    }

    /// Number of pages, never less than one.
    #[must_use]
    pub const fn total_pages(&self, transformed_len: usize) -> usize {
        let total = self.total_count(transformed_len);
        let pages = total.div_ceil(self.page_size);
        if pages == 0 {
            1
        } else {
            pages
        }
    }

    /// Request a page. Out-of-range pages are rejected.
    ///
    /// Returns `true` if the request was accepted.
    pub fn go_to_page(&mut self, page: usize, transformed_len: usize) -> bool {
        if page < 1 || page > self.total_pages(transformed_len) {
            log::debug!(
                "page {page} rejected (1..={})",
                self.total_pages(transformed_len)
            );
            return false;
        }
        self.current_page = page;
        true
    }

    /// Advance one page if possible.
    pub fn next_page(&mut self, transformed_len: usize) -> bool {
        self.go_to_page(self.current_page + 1, transformed_len)
    }

    /// Go back one page if possible.
    pub fn previous_page(&mut self, transformed_len: usize) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1), transformed_len)
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn can_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn can_next(&self, transformed_len: usize) -> bool {
        self.current_page < self.total_pages(transformed_len)
    }

    /// Change rows per page.
    ///
    /// Zero and the current size are ignored. Client mode returns to page 1.
    /// Returns `true` if the size changed.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 || page_size == self.page_size {
            return false;
        }
        self.page_size = page_size;
        match self.mode {
            PaginationMode::Client => self.current_page = 1,
            PaginationMode::Manual { total_count } => self.clamp(total_count),
        }
        true
    }

    /// The filter changed. Client mode returns to page 1; manual mode leaves
    /// the page to the caller.
    pub fn reset_for_filter(&mut self) {
        if !self.is_manual() {
            self.current_page = 1;
        }
    }

    /// Set the reported total for manual mode. Ignored in client mode.
    pub fn set_total_count(&mut self, total: usize) {
        if let PaginationMode::Manual { total_count } = &mut self.mode {
            *total_count = total;
            self.clamp(total);
        }
    }

    /// Set the page without treating it as a user request; clamps instead of
    /// rejecting.
    pub fn set_page(&mut self, page: usize, transformed_len: usize) {
        self.current_page = page.clamp(1, self.total_pages(transformed_len));
    }

    /// Pull the current page back into `1..=total_pages`.
    pub fn clamp(&mut self, transformed_len: usize) {
        let max = self.total_pages(transformed_len);
        if self.current_page > max || self.current_page == 0 {
            log::debug!("page {} clamped to 1..={max}", self.current_page);
            self.current_page = self.current_page.clamp(1, max);
        }
    }

    /// Range of transformed rows on the current page.
    ///
    /// Manual mode passes every row through.
    #[must_use]
    pub fn page_range(&self, transformed_len: usize) -> Range<usize> {
        match self.mode {
            PaginationMode::Manual { .. } => 0..transformed_len,
            PaginationMode::Client => {
                let start = (self.current_page - 1)
                    .saturating_mul(self.page_size)
                    .min(transformed_len);
                let end = start.saturating_add(self.page_size).min(transformed_len);
                start..end
            }
        }
    }

    /// 1-based first and last row numbers shown, out of the total.
    #[must_use]
    pub fn row_span(&self, transformed_len: usize) -> Option<(usize, usize)> {
        let total = self.total_count(transformed_len);
        if total == 0 {
            return None;
        }
        let first = ((self.current_page - 1) * self.page_size + 1).min(total);
        let last = (self.current_page * self.page_size).min(total);
        Some((first, last))
    }

    /// Numbered page buttons: first, last and `siblings` pages either side of
    /// the current one, with gaps collapsed to [`PageItem::Ellipsis`].
    #[must_use]
    pub fn page_window(&self, siblings: usize, transformed_len: usize) -> Vec<PageItem> {
        let total = self.total_pages(transformed_len);
        let low = self.current_page.saturating_sub(siblings).max(1);
        let high = (self.current_page + siblings).min(total);

        let mut pages: BTreeSet<usize> = (low..=high).collect();
        pages.insert(1);
        pages.insert(total);

        let mut items = Vec::with_capacity(pages.len() + 2);
        let mut previous = 0;
        for page in pages {
            match page - previous {
                1 => {}
                2 => items.push(PageItem::Page(previous + 1)),
                _ => items.push(PageItem::Ellipsis),
            }
            items.push(PageItem::Page(page));
            previous = page;
        }
        items
    }
}
