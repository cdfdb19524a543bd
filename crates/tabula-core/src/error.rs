//! Error types for tabula-core.

use thiserror::Error;

/// Errors raised while constructing or configuring a table.
///
/// Runtime interactions never return these; out-of-range requests are no-ops.
#[derive(Debug, Error)]
pub enum TableError {
    /// Two columns share the same id.
    #[error("Duplicate column id: {0}")]
    DuplicateColumn(String),

    /// Page size must be at least one row.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// Manual pagination needs the caller to report the total row count.
    #[error("Manual pagination requires a total count")]
    MissingTotalCount,

    /// YAML configuration could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A configuration problem detected while rendering.
///
/// These are checked explicitly where a column is used and then collapse to
/// the no-op outcome (unsorted rows, empty cell).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Misconfiguration {
    /// A sort state names a column that is not in the model.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A column has neither an accessor nor a field shortcut.
    #[error("Column '{0}' has no accessor")]
    NoAccessor(String),

    /// A field shortcut names a field the row does not have.
    #[error("Column '{column}' reads missing field '{field}'")]
    MissingField {
        /// Column id
        column: String,
        /// Field name
        field: String,
    },
}
