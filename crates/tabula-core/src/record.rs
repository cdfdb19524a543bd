//! Named-field access to row records.

use crate::value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A row that can resolve a named field.
///
/// Columns built with a field shortcut go through this trait. Rows that are
/// only ever read through derived accessors can rely on the default, which
/// reports every field as missing.
pub trait Record {
    /// Look up a field by name.
    fn field(&self, _name: &str) -> Option<CellValue> {
        None
    }
}

/// A row of loosely typed data keyed by column id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell values by key
    pub cells: HashMap<String, CellValue>,
}

impl TableRow {
    /// Create a new empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell value.
    #[must_use]
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    /// Get a cell value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }
}

impl Record for TableRow {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.cells.get(name).cloned()
    }
}

impl Record for HashMap<String, CellValue> {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).cloned()
    }
}

/// JSON objects resolve dotted paths (`customer.name`) through nested objects.
impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<CellValue> {
        let mut current = self;
        for segment in name.split('.') {
            current = match current {
                Self::Object(map) => map.get(segment)?,
                Self::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(json_cell(current))
    }
}

fn json_cell(value: &serde_json::Value) -> CellValue {
    use serde_json::Value;
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => n.as_f64().map_or(CellValue::Empty, CellValue::Number),
        Value::String(s) => CellValue::Text(s.clone()),
        nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
    }
}
