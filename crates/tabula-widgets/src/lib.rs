//! HTML presentation shell for Tabula tables.
//!
//! [`HtmlTable`] renders each [`TableView`](tabula_core::TableView) state:
//! a skeleton while loading, an error panel with a retry action, a no-data
//! panel, or the table itself with a pagination bar. Interactive elements
//! carry `data-action` attributes that [`DomEvent`] maps back to
//! [`TableAction`](tabula_core::TableAction)s.

mod action;
mod markup;
mod pagination;
mod table;

pub use action::DomEvent;
pub use markup::escape;
pub use pagination::{render_pagination, PaginationLabels};
pub use table::{CellRenderer, DetailRenderer, HtmlTable};
