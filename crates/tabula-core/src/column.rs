//! Column model: how a value is extracted from a row.

use crate::error::{Misconfiguration, TableError};
use crate::options::ColumnSpec;
use crate::record::Record;
use crate::value::{CellValue, SortKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Type alias for a derived column accessor.
pub type AccessorFn<T> = Arc<dyn Fn(&T, usize) -> CellValue + Send + Sync>;

/// Text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Where a column's value comes from.
///
/// Resolved once when the column is built. An accessor always wins over a
/// field shortcut.
pub enum ColumnSource<T> {
    /// Arbitrary derivation from the row and its source index.
    Derived(AccessorFn<T>),
    /// Named field looked up through [`Record`].
    Field(String),
    /// Neither was configured; every row yields [`CellValue::Empty`].
    Unresolved,
}

impl<T> Clone for ColumnSource<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Derived(f) => Self::Derived(Arc::clone(f)),
            Self::Field(name) => Self::Field(name.clone()),
            Self::Unresolved => Self::Unresolved,
        }
    }
}

impl<T> fmt::Debug for ColumnSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derived(_) => f.write_str("Derived(..)"),
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Unresolved => f.write_str("Unresolved"),
        }
    }
}

/// Column definition for a table of `T` rows.
pub struct Column<T> {
    /// Column id, unique within a table
    pub id: String,
    /// Display header
    pub header: String,
    /// Whether clicking the header sorts
    pub sortable: bool,
    /// Whether the column is rendered and scanned by the global filter
    pub visible: bool,
    /// Column width hint (None = auto)
    pub width: Option<f32>,
    /// Text alignment
    pub align: TextAlign,
    source: ColumnSource<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            visible: self.visible,
            width: self.width,
            align: self.align,
            source: self.source.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("visible", &self.visible)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<T> Column<T> {
    /// Create a column with no value source.
    #[must_use]
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: false,
            visible: true,
            width: None,
            align: TextAlign::Left,
            source: ColumnSource::Unresolved,
        }
    }

    /// Create a column reading the field named after its id.
    #[must_use]
    pub fn field(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        let source = ColumnSource::Field(id.clone());
        Self {
            source,
            ..Self::new(id, header)
        }
    }

    /// Create a column computed from the row.
    #[must_use]
    pub fn derived<F>(id: impl Into<String>, header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T, usize) -> CellValue + Send + Sync + 'static,
    {
        Self::new(id, header).with_accessor(accessor)
    }

    /// Set an accessor, replacing any field shortcut.
    #[must_use]
    pub fn with_accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T, usize) -> CellValue + Send + Sync + 'static,
    {
        self.source = ColumnSource::Derived(Arc::new(accessor));
        self
    }

    /// Set a field shortcut. Ignored when an accessor is already set.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        if !matches!(self.source, ColumnSource::Derived(_)) {
            self.source = ColumnSource::Field(name.into());
        }
        self
    }

    /// Make column sortable.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Start hidden.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Set column width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(20.0));
        self
    }

    /// Set text alignment.
    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Get the value source.
    #[must_use]
    pub const fn source(&self) -> &ColumnSource<T> {
        &self.source
    }
}

impl<T: Record> Column<T> {
    /// Resolve the value for a row, reporting why it could not be produced.
    pub fn resolve(&self, row: &T, row_index: usize) -> Result<CellValue, Misconfiguration> {
        match &self.source {
            ColumnSource::Derived(accessor) => Ok(accessor(row, row_index)),
            ColumnSource::Field(name) => {
                row.field(name).ok_or_else(|| Misconfiguration::MissingField {
                    column: self.id.clone(),
                    field: name.clone(),
                })
            }
            ColumnSource::Unresolved => Err(Misconfiguration::NoAccessor(self.id.clone())),
        }
    }

    /// Value for a row; misconfiguration yields [`CellValue::Empty`].
    pub fn value_of(&self, row: &T, row_index: usize) -> CellValue {
        self.resolve(row, row_index).unwrap_or_else(|err| {
            log::trace!("column degraded to empty: {err}");
            CellValue::Empty
        })
    }

    /// Comparable projection used for sorting.
    pub fn sort_key(&self, row: &T, row_index: usize) -> SortKey {
        self.value_of(row, row_index).sort_key()
    }

    /// Text projection used for filtering.
    pub fn text_of(&self, row: &T, row_index: usize) -> String {
        self.value_of(row, row_index).display()
    }
}

impl<T> From<ColumnSpec> for Column<T> {
    fn from(spec: ColumnSpec) -> Self {
        let field = spec.field.unwrap_or_else(|| spec.id.clone());
        let mut column = Self::new(spec.id, spec.header).with_field(field);
        column.sortable = spec.sortable;
        column.visible = spec.visible;
        column.align = spec.align;
        if let Some(width) = spec.width {
            column = column.width(width);
        }
        column
    }
}

/// Ordered set of columns with unique ids.
pub struct ColumnModel<T> {
    pub(crate) columns: Vec<Column<T>>,
    pub(crate) revision: u64,
}

impl<T> Clone for ColumnModel<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            revision: self.revision,
        }
    }
}

impl<T> fmt::Debug for ColumnModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnModel")
            .field("columns", &self.columns)
            .field("revision", &self.revision)
            .finish()
    }
}

impl<T> Default for ColumnModel<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            revision: 0,
        }
    }
}

impl<T> ColumnModel<T> {
    /// Build a model, rejecting duplicate column ids.
    pub fn try_new(columns: Vec<Column<T>>) -> Result<Self, TableError> {
        check_unique(&columns)?;
        Ok(Self {
            columns,
            revision: 0,
        })
    }

    /// Build a model of field columns from configuration.
    pub fn from_specs(specs: impl IntoIterator<Item = ColumnSpec>) -> Result<Self, TableError> {
        Self::try_new(specs.into_iter().map(Column::from).collect())
    }

    /// Replace the columns.
    ///
    /// A column stays hidden if it was hidden before under the same id or is
    /// hidden in `columns`.
    pub fn replace(&mut self, mut columns: Vec<Column<T>>) -> Result<(), TableError> {
        check_unique(&columns)?;
        for column in &mut columns {
            if let Some(previous) = self.get(&column.id) {
                column.visible &= previous.visible;
            }
        }
        self.columns = columns;
        self.bump();
        Ok(())
    }

    /// Get all columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Find a column by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Find a column by id, explaining a miss.
    pub fn lookup(&self, id: &str) -> Result<&Column<T>, Misconfiguration> {
        self.get(id)
            .ok_or_else(|| Misconfiguration::UnknownColumn(id.to_string()))
    }

    /// Get column count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Revision counter, bumped whenever columns or visibility change.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn check_unique<T>(columns: &[Column<T>]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.id.as_str()) {
            return Err(TableError::DuplicateColumn(column.id.clone()));
        }
    }
    Ok(())
}
