//! Pagination bar markup.

use crate::markup::{flag, Markup};
use tabula_core::{PageItem, PaginationView};

/// Labels used by the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationLabels {
    /// Previous-page control
    pub previous: String,
    /// Next-page control
    pub next: String,
    /// Label before the page-size select
    pub rows_per_page: String,
}

impl Default for PaginationLabels {
    fn default() -> Self {
        Self {
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            rows_per_page: "Rows per page".to_string(),
        }
    }
}

/// Render the bar: row span, page-size select, previous, page window, next.
#[must_use]
pub fn render_pagination(view: &PaginationView, labels: &PaginationLabels) -> String {
    let mut m = Markup::new();
    m.open("nav", &[("class", Some("tabula-pagination")), ("aria-label", Some("Pagination"))]);

    let span = match view.row_span {
        Some((first, last)) => format!("{first}\u{2013}{last} of {}", view.total_count),
        None => format!("0 of {}", view.total_count),
    };
    m.element("span", &[("class", Some("tabula-row-span"))], &span);

    render_page_size(&mut m, view, labels);

    m.element(
        "button",
        &[
            ("class", Some("tabula-page-prev")),
            ("data-action", Some("previous-page")),
            ("disabled", flag(!view.can_previous)),
        ],
        &labels.previous,
    );

    for item in &view.window {
        match item {
            PageItem::Page(page) => {
                let page = page.to_string();
                let current = view.current_page.to_string() == page;
                m.element(
                    "button",
                    &[
                        ("class", Some(if current { "tabula-page current" } else { "tabula-page" })),
                        ("data-action", Some("page")),
                        ("data-value", Some(page.as_str())),
                        ("aria-current", current.then_some("page")),
                    ],
                    &page,
                );
            }
            PageItem::Ellipsis => {
                m.element("span", &[("class", Some("tabula-ellipsis"))], "\u{2026}");
            }
        }
    }

    m.element(
        "button",
        &[
            ("class", Some("tabula-page-next")),
            ("data-action", Some("next-page")),
            ("disabled", flag(!view.can_next)),
        ],
        &labels.next,
    );
    m.close("nav");
    m.finish()
}

fn render_page_size(m: &mut Markup, view: &PaginationView, labels: &PaginationLabels) {
    m.open("label", &[("class", Some("tabula-page-size"))]).text(&labels.rows_per_page);
    m.open("select", &[("data-action", Some("page-size"))]);
    let mut options = view.page_size_options.clone();
    if !options.contains(&view.page_size) {
        options.push(view.page_size);
        options.sort_unstable();
    }
    for size in options {
        let value = size.to_string();
        m.element(
            "option",
            &[("value", Some(value.as_str())), ("selected", flag(size == view.page_size))],
            &value,
        );
    }
    m.close("select").close("label");
}
