//! Sort state for a single active column.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Short label used in markup and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// The active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    /// Column id being sorted
    pub column_id: String,
    /// Sort direction
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on a column.
    #[must_use]
    pub fn ascending(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on a column.
    #[must_use]
    pub fn descending(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Next state after clicking a header.
    ///
    /// A different column starts ascending; the same column goes ascending,
    /// descending, then unsorted.
    #[must_use]
    pub fn cycle(current: Option<&Self>, column_id: &str) -> Option<Self> {
        match current {
            Some(state) if state.column_id == column_id => match state.direction {
                SortDirection::Ascending => Some(Self::descending(column_id)),
                SortDirection::Descending => None,
            },
            _ => Some(Self::ascending(column_id)),
        }
    }

    /// Direction if this state sorts the given column.
    #[must_use]
    pub fn direction_for(state: Option<&Self>, column_id: &str) -> Option<SortDirection> {
        state
            .filter(|s| s.column_id == column_id)
            .map(|s| s.direction)
    }
}
