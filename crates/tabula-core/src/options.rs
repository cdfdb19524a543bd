//! Table configuration.
//!
//! Options can be built in code or loaded from YAML/JSON, e.g.
//!
//! ```yaml
//! page_size: 25
//! initial_sort: { column_id: created_at, direction: desc }
//! columns:
//!   - { id: customer, header: Customer, field: customer.name, sortable: true }
//!   - { id: status, header: Status }
//! ```

use crate::column::TextAlign;
use crate::error::TableError;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::sort::SortState;
use serde::{Deserialize, Serialize};

/// Engine options for one table instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Whether rows can be selected
    pub selectable: bool,
    /// Sort applied before the first interaction
    pub initial_sort: Option<SortState>,
    /// Starting page (1-based)
    pub page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Choices offered by the page-size control
    pub page_size_options: Vec<usize>,
    /// Initial global filter term
    pub global_filter: Option<String>,
    /// Whether the caller paginates (rows are already one page)
    pub manual_pagination: bool,
    /// Total rows across pages; required with manual pagination
    pub total_count: Option<usize>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            selectable: true,
            initial_sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 25, 50, 100],
            global_filter: None,
            manual_pagination: false,
            total_count: None,
        }
    }
}

impl TableOptions {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable row selection.
    #[must_use]
    pub const fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set the initial sort.
    #[must_use]
    pub fn initial_sort(mut self, sort: SortState) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    /// Set the starting page.
    #[must_use]
    pub const fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set rows per page.
    #[must_use]
    pub const fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page-size choices.
    #[must_use]
    pub fn page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Set the initial global filter.
    #[must_use]
    pub fn global_filter(mut self, term: impl Into<String>) -> Self {
        self.global_filter = Some(term.into());
        self
    }

    /// Switch to manual pagination with a reported total.
    #[must_use]
    pub const fn manual(mut self, total_count: usize) -> Self {
        self.manual_pagination = true;
        self.total_count = Some(total_count);
        self
    }

    /// Check the options are usable.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.page_size == 0 {
            return Err(TableError::InvalidPageSize(0));
        }
        if self.page_size_options.contains(&0) {
            return Err(TableError::InvalidPageSize(0));
        }
        if self.manual_pagination && self.total_count.is_none() {
            return Err(TableError::MissingTotalCount);
        }
        Ok(())
    }

    /// Parse options from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, TableError> {
        let options: Self = serde_yaml_ng::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }
}

/// Column declared in configuration; always a field column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column id
    pub id: String,
    /// Display header
    pub header: String,
    /// Field to read (defaults to the id)
    #[serde(default)]
    pub field: Option<String>,
    /// Whether clicking the header sorts
    #[serde(default)]
    pub sortable: bool,
    /// Whether the column starts visible
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Width hint
    #[serde(default)]
    pub width: Option<f32>,
    /// Text alignment
    #[serde(default)]
    pub align: TextAlign,
}

const fn default_visible() -> bool {
    true
}

/// Options plus column declarations, as loaded from a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Engine options
    #[serde(flatten)]
    pub options: TableOptions,
    /// Column declarations
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl TableConfig {
    /// Parse a config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, TableError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.options.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let config: Self = serde_json::from_str(json)?;
        config.options.validate()?;
        Ok(config)
    }
}
