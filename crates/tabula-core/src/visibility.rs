//! Column visibility: hide and show columns without discarding them.
//!
//! Hidden columns are skipped when rendering, when scanning for the global
//! filter and when counting skeleton cells.

use crate::column::{Column, ColumnModel};

impl<T> ColumnModel<T> {
    /// Flip visibility of a column. Unknown ids are ignored.
    ///
    /// Returns `true` if a column changed.
    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        let Some(column) = self.columns.iter_mut().find(|c| c.id == id) else {
            log::debug!("toggle_visibility: no column '{id}'");
            return false;
        };
        column.visible = !column.visible;
        log::debug!("column '{id}' visible={}", column.visible);
        self.bump();
        true
    }

    /// Set visibility of a column. Returns `true` if it changed.
    pub fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.columns.iter_mut().find(|c| c.id == id) {
            Some(column) if column.visible != visible => {
                column.visible = visible;
                self.bump();
                true
            }
            _ => false,
        }
    }

    /// Make every column visible.
    pub fn show_all(&mut self) {
        if self.columns.iter().any(|c| !c.visible) {
            for column in &mut self.columns {
                column.visible = true;
            }
            self.bump();
        }
    }

    /// Iterate visible columns in display order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter().filter(|c| c.visible)
    }

    /// Number of visible columns.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_columns().count()
    }

    /// Ids of hidden columns.
    #[must_use]
    pub fn hidden_ids(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| !c.visible)
            .map(|c| c.id.as_str())
            .collect()
    }
}
