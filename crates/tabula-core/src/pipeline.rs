//! Row transformation: filter, then sort.
//!
//! Every step works on source indices into the caller's row slice, so rows are
//! never cloned and the result can be memoized per version of the data.

use crate::column::ColumnModel;
use crate::record::Record;
use crate::sort::SortState;
use crate::value::SortKey;

/// Source indices of rows in display order.
pub type RowOrder = Vec<usize>;

/// Order that leaves `len` rows untouched.
#[must_use]
pub fn identity(len: usize) -> RowOrder {
    (0..len).collect()
}

/// Keep rows where any visible column's text contains `term`, ignoring case.
///
/// An absent or empty term keeps every row.
pub fn filter_rows<T: Record>(rows: &[T], columns: &ColumnModel<T>, term: Option<&str>) -> RowOrder {
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        return identity(rows.len());
    };
    let needle = term.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(index, row)| {
            columns
                .visible_columns()
                .any(|column| column.value_of(row, *index).contains_lowercase(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Stable-sort `order` by the sort column.
///
/// No sort state, or a state naming a column that does not exist, leaves the
/// order unchanged.
pub fn sort_rows<T: Record>(
    rows: &[T],
    mut order: RowOrder,
    columns: &ColumnModel<T>,
    sort: Option<&SortState>,
) -> RowOrder {
    let Some(sort) = sort else {
        return order;
    };
    let column = match columns.lookup(&sort.column_id) {
        Ok(column) => column,
        Err(err) => {
            log::debug!("sort skipped: {err}");
            return order;
        }
    };

    let mut keyed: Vec<(SortKey, usize)> = order
        .iter()
        .filter_map(|&index| rows.get(index).map(|row| (column.sort_key(row, index), index)))
        .collect();
    // Stable; only the key comparison is reversed so ties keep source order.
    keyed.sort_by(|(a, _), (b, _)| sort.direction.apply(a.cmp(b)));

    order.clear();
    order.extend(keyed.into_iter().map(|(_, index)| index));
    order
}

/// Filter then sort.
pub fn transform<T: Record>(
    rows: &[T],
    columns: &ColumnModel<T>,
    term: Option<&str>,
    sort: Option<&SortState>,
) -> RowOrder {
    let filtered = filter_rows(rows, columns, term);
    sort_rows(rows, filtered, columns, sort)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    version: u64,
    rows_len: usize,
    revision: u64,
    term: Option<String>,
    sort: Option<SortState>,
}

/// Memo of the last transform.
///
/// Rows are identified by a caller-supplied data version: the same version
/// must mean the same rows. Keyed on that version, the row count, the column
/// model revision, and the filter and sort by value. Without a version every
/// call recomputes.
#[derive(Debug, Clone, Default)]
pub struct TransformCache {
    key: Option<CacheKey>,
    order: RowOrder,
}

impl TransformCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the transformed order, recomputing unless `version` and every
    /// other input match the last call.
    pub fn get<T: Record>(
        &mut self,
        rows: &[T],
        version: Option<u64>,
        columns: &ColumnModel<T>,
        term: Option<&str>,
        sort: Option<&SortState>,
    ) -> &[usize] {
        let term = term.filter(|t| !t.is_empty());
        let key = version.map(|version| CacheKey {
            version,
            rows_len: rows.len(),
            revision: columns.revision(),
            term: term.map(str::to_string),
            sort: sort.cloned(),
        });
        if key.is_some() && key == self.key {
            log::trace!("transform cache hit ({} rows)", self.order.len());
        } else {
            self.order = transform(rows, columns, term, sort);
            log::trace!(
                "transform recomputed: {} of {} rows",
                self.order.len(),
                rows.len()
            );
            self.key = key;
        }
        &self.order
    }

    /// Drop the memo so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
