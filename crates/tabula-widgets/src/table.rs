//! `HtmlTable`: renders a [`TableView`] as HTML.

use crate::markup::{escape, flag, Markup};
use crate::pagination::{render_pagination, PaginationLabels};
use std::collections::HashMap;
use std::fmt;
use tabula_core::{
    CellValue, CheckState, ColumnModel, HeaderView, PageRow, PageView, SortDirection, TableView,
    TextAlign,
};

/// Renders a cell to trusted HTML.
pub type CellRenderer<T> = Box<dyn Fn(&T, &CellValue) -> String>;

/// Renders an expanded row's detail panel to trusted HTML.
pub type DetailRenderer<T> = Box<dyn Fn(&T) -> String>;

/// HTML shell for a table.
///
/// Interactive elements carry `data-action` and `data-value` attributes;
/// see [`DomEvent`](crate::DomEvent) for turning them back into actions.
pub struct HtmlTable<T> {
    /// Accessible caption
    caption: Option<String>,
    cell_renderers: HashMap<String, CellRenderer<T>>,
    detail: Option<DetailRenderer<T>>,
    /// Shown when there are no rows at all
    empty_message: String,
    /// Shown when the filter removed every row
    no_match_message: String,
    retry_label: String,
    pagination_labels: PaginationLabels,
}

impl<T> Default for HtmlTable<T> {
    fn default() -> Self {
        Self {
            caption: None,
            cell_renderers: HashMap::new(),
            detail: None,
            empty_message: "No data".to_string(),
            no_match_message: "No matching rows".to_string(),
            retry_label: "Retry".to_string(),
            pagination_labels: PaginationLabels::default(),
        }
    }
}

impl<T> fmt::Debug for HtmlTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlTable")
            .field("caption", &self.caption)
            .field("cell_renderers", &self.cell_renderers.keys().collect::<Vec<_>>())
            .field("detail", &self.detail.is_some())
            .field("empty_message", &self.empty_message)
            .finish_non_exhaustive()
    }
}

impl<T> HtmlTable<T> {
    /// Create a shell with default labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caption.
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Render a column's cells with `renderer` instead of the escaped value.
    #[must_use]
    pub fn cell_renderer(
        mut self,
        column_id: impl Into<String>,
        renderer: impl Fn(&T, &CellValue) -> String + 'static,
    ) -> Self {
        self.cell_renderers.insert(column_id.into(), Box::new(renderer));
        self
    }

    /// Enable expandable rows with a detail panel.
    #[must_use]
    pub fn detail(mut self, renderer: impl Fn(&T) -> String + 'static) -> Self {
        self.detail = Some(Box::new(renderer));
        self
    }

    /// Set the no-data message.
    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set the message shown when the filter matches nothing.
    #[must_use]
    pub fn no_match_message(mut self, message: impl Into<String>) -> Self {
        self.no_match_message = message.into();
        self
    }

    /// Set the retry button label.
    #[must_use]
    pub fn retry_label(mut self, label: impl Into<String>) -> Self {
        self.retry_label = label.into();
        self
    }

    /// Set the pagination labels.
    #[must_use]
    pub fn pagination_labels(mut self, labels: PaginationLabels) -> Self {
        self.pagination_labels = labels;
        self
    }

    /// Whether rows get an expand toggle.
    #[must_use]
    pub const fn is_expandable(&self) -> bool {
        self.detail.is_some()
    }

    /// Render a view.
    #[must_use]
    pub fn render(&self, view: &TableView<'_, T>) -> String {
        match view {
            TableView::Loading { headers, rows } => self.render_loading(headers, *rows),
            TableView::Error { message } => self.render_error(message),
            TableView::Empty { filtered } => self.render_empty(*filtered),
            TableView::Populated(page) => self.render_page(page),
        }
    }

    /// Render a menu of checkboxes that show and hide columns.
    #[must_use]
    pub fn render_column_menu(&self, columns: &ColumnModel<T>) -> String {
        let mut m = Markup::new();
        m.open("ul", &[("class", Some("tabula-columns")), ("role", Some("menu"))]);
        for column in columns.columns() {
            m.open("li", &[]).open("label", &[]);
            m.open(
                "input",
                &[
                    ("type", Some("checkbox")),
                    ("data-action", Some("toggle-column")),
                    ("data-value", Some(column.id.as_str())),
                    ("checked", flag(column.visible)),
                ],
            );
            m.text(&column.header).close("label").close("li");
        }
        m.close("ul");
        m.finish()
    }

    fn render_loading(&self, headers: &[HeaderView], rows: usize) -> String {
        log::trace!("rendering skeleton: {rows} rows");
        let mut m = Markup::new();
        m.open(
            "table",
            &[("class", Some("tabula-table loading")), ("aria-busy", Some("true"))],
        );
        self.caption_into(&mut m);
        m.open("thead", &[]).open("tr", &[]);
        for header in headers {
            m.element("th", &[("scope", Some("col"))], &header.header);
        }
        m.close("tr").close("thead").open("tbody", &[]);
        for _ in 0..rows {
            m.open("tr", &[("class", Some("skeleton"))]);
            for _ in headers {
                m.open("td", &[])
                    .element("span", &[("class", Some("skeleton-bar"))], "")
                    .close("td");
            }
            m.close("tr");
        }
        m.close("tbody").close("table");
        m.finish()
    }

    fn render_error(&self, message: &str) -> String {
        let mut m = Markup::new();
        m.open("div", &[("class", Some("tabula-error")), ("role", Some("alert"))]);
        m.element("p", &[], message);
        m.element(
            "button",
            &[("type", Some("button")), ("data-action", Some("retry"))],
            &self.retry_label,
        );
        m.close("div");
        m.finish()
    }

    fn render_empty(&self, filtered: bool) -> String {
        let message = if filtered {
            &self.no_match_message
        } else {
            &self.empty_message
        };
        let mut m = Markup::new();
        m.open("div", &[("class", Some("tabula-empty")), ("role", Some("status"))]);
        m.element("p", &[], message);
        m.close("div");
        m.finish()
    }

    fn render_page(&self, page: &PageView<'_, T>) -> String {
        log::trace!("rendering page of {} rows", page.len());
        let mut m = Markup::new();
        m.open("div", &[("class", Some("tabula"))]);
        m.open("table", &[("class", Some("tabula-table"))]);
        self.caption_into(&mut m);
        self.header_row(&mut m, page);
        m.open("tbody", &[]);
        let colspan = (page.headers.len()
            + usize::from(page.selectable)
            + usize::from(self.is_expandable()))
        .to_string();
        for row in &page.rows {
            self.body_row(&mut m, page, row);
            if row.expanded {
                if let Some(detail) = &self.detail {
                    m.open("tr", &[("class", Some("tabula-detail"))])
                        .open("td", &[("colspan", Some(colspan.as_str()))])
                        .raw(&detail(row.row))
                        .close("td")
                        .close("tr");
                }
            }
        }
        m.close("tbody").close("table");
        m.raw(&render_pagination(&page.pagination, &self.pagination_labels));
        m.close("div");
        m.finish()
    }

    fn caption_into(&self, m: &mut Markup) {
        if let Some(caption) = &self.caption {
            m.element("caption", &[], caption);
        }
    }

    fn header_row(&self, m: &mut Markup, page: &PageView<'_, T>) {
        m.open("thead", &[]).open("tr", &[]);
        if page.selectable {
            m.open("th", &[("class", Some("tabula-select"))]);
            m.open(
                "input",
                &[
                    ("type", Some("checkbox")),
                    ("data-action", Some("toggle-all")),
                    ("aria-label", Some("Select all rows")),
                    ("aria-checked", Some(aria_checked(page.select_all))),
                    ("checked", flag(page.select_all.is_checked())),
                    ("data-indeterminate", flag(page.select_all.is_indeterminate())),
                ],
            );
            m.close("th");
        }
        if self.is_expandable() {
            m.element("th", &[("class", Some("tabula-expand"))], "");
        }
        for header in &page.headers {
            let aria_sort = header.sort.map(|d| match d {
                SortDirection::Ascending => "ascending",
                SortDirection::Descending => "descending",
            });
            let class = align_class(header.align);
            let width = header.width.map(|w| format!("width: {w}px"));
            m.open(
                "th",
                &[
                    ("scope", Some("col")),
                    ("class", class),
                    ("style", width.as_deref()),
                    ("aria-sort", aria_sort),
                ],
            );
            if header.sortable {
                m.open(
                    "button",
                    &[
                        ("type", Some("button")),
                        ("data-action", Some("sort")),
                        ("data-value", Some(header.id.as_str())),
                    ],
                );
                m.text(&header.header);
                m.element("span", &[("class", Some("sort-indicator"))], sort_indicator(header.sort));
                m.close("button");
            } else {
                m.text(&header.header);
            }
            m.close("th");
        }
        m.close("tr").close("thead");
    }

    fn body_row(&self, m: &mut Markup, page: &PageView<'_, T>, row: &PageRow<'_, T>) {
        let index = row.index.to_string();
        m.open(
            "tr",
            &[
                ("data-row", Some(index.as_str())),
                ("class", row.selected.then_some("selected")),
                ("aria-selected", page.selectable.then_some(if row.selected { "true" } else { "false" })),
            ],
        );
        if page.selectable {
            m.open("td", &[("class", Some("tabula-select"))]);
            m.open(
                "input",
                &[
                    ("type", Some("checkbox")),
                    ("data-action", Some("toggle-row")),
                    ("data-value", Some(index.as_str())),
                    ("checked", flag(row.selected)),
                ],
            );
            m.close("td");
        }
        if self.is_expandable() {
            m.open("td", &[("class", Some("tabula-expand"))]);
            m.element(
                "button",
                &[
                    ("type", Some("button")),
                    ("data-action", Some("expand")),
                    ("data-value", Some(index.as_str())),
                    ("aria-expanded", Some(if row.expanded { "true" } else { "false" })),
                ],
                if row.expanded { "\u{25be}" } else { "\u{25b8}" },
            );
            m.close("td");
        }
        for (header, value) in page.headers.iter().zip(&row.cells) {
            m.open("td", &[("class", align_class(header.align))]);
            match self.cell_renderers.get(&header.id) {
                Some(render) => m.raw(&render(row.row, value)),
                None => m.raw(&escape(&value.display())),
            };
            m.close("td");
        }
        m.close("tr");
    }
}

const fn aria_checked(state: CheckState) -> &'static str {
    match state {
        CheckState::Unchecked => "false",
        CheckState::Checked => "true",
        CheckState::Indeterminate => "mixed",
    }
}

const fn align_class(align: TextAlign) -> Option<&'static str> {
    match align {
        TextAlign::Left => None,
        TextAlign::Center => Some("align-center"),
        TextAlign::Right => Some("align-right"),
    }
}

const fn sort_indicator(sort: Option<SortDirection>) -> &'static str {
    match sort {
        Some(SortDirection::Ascending) => "\u{25b2}",
        Some(SortDirection::Descending) => "\u{25bc}",
        None => "",
    }
}
