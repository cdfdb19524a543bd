//! Tabular data engine for list views.
//!
//! This crate turns a slice of rows plus a column model into what a table
//! should show:
//! - Columns: [`Column`], [`ColumnModel`] with accessor or field sources
//! - Row pipeline: global filter then stable sort over source indices
//! - Per-page state: [`SelectionTracker`], [`ExpansionTracker`], [`Paginator`]
//! - Rendering decisions: [`TableView`] (loading, error, empty, populated)
//!
//! ```
//! use tabula_core::{Column, ColumnModel, DataStatus, DataTable, TableOptions, TableRow};
//!
//! let columns = ColumnModel::try_new(vec![
//!     Column::field("name", "Name").sortable(),
//!     Column::field("email", "Email"),
//! ])?;
//! let rows = vec![
//!     TableRow::new().cell("name", "B").cell("email", "b@mail.com"),
//!     TableRow::new().cell("name", "A").cell("email", "a@mail.com"),
//! ];
//!
//! let mut table = DataTable::new(columns, TableOptions::default())?;
//! table.click_header("name");
//! let view = table.view(&rows, &DataStatus::ready());
//! let page = view.page().expect("rows present");
//! assert_eq!(page.rows[0].cells[0].display(), "A");
//! # Ok::<(), tabula_core::TableError>(())
//! ```

pub mod column;
pub mod error;
pub mod expansion;
pub mod message;
pub mod options;
pub mod pagination;
pub mod pipeline;
pub mod record;
pub mod selection;
pub mod sort;
pub mod state;
pub mod table;
pub mod value;
pub mod view;
mod visibility;

pub use column::{AccessorFn, Column, ColumnModel, ColumnSource, TextAlign};
pub use error::{Misconfiguration, TableError};
pub use expansion::ExpansionTracker;
pub use message::{TableAction, TableCallbacks, TableMessage};
pub use options::{ColumnSpec, TableConfig, TableOptions};
pub use pagination::{PageItem, PaginationMode, Paginator, DEFAULT_PAGE_SIZE};
pub use pipeline::{RowOrder, TransformCache};
pub use record::{Record, TableRow};
pub use selection::{CheckState, SelectionTracker};
pub use sort::{SortDirection, SortState};
pub use state::TableState;
pub use table::DataTable;
pub use value::{CellValue, SortKey};
pub use view::{DataStatus, HeaderView, PageRow, PageView, PaginationView, TableView};
