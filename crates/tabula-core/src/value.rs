//! Cell values and their comparable projection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A cell value produced by a column for one row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Missing value
    #[default]
    Empty,
}

impl CellValue {
    /// Get display text for the cell.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{n}"),
            Self::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Check if the cell holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Project the value for sorting.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        match self {
            Self::Text(s) => SortKey::Text(s.to_lowercase()),
            Self::Number(n) => SortKey::Number(*n),
            Self::Bool(b) => SortKey::Bool(*b),
            Self::Empty => SortKey::Null,
        }
    }

    /// Case-insensitive substring test against an already lowercased needle.
    #[must_use]
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            Self::Empty => needle.is_empty(),
            other => other.display().to_lowercase().contains(needle),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<V: Into<Self>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Comparable projection of a [`CellValue`].
///
/// Ordering is `Null < Bool < Number < Text`. Text is stored lowercased so
/// comparison is case-insensitive; numbers use a total order so `NaN` has a
/// stable place instead of poisoning the sort.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SortKey {
    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Text("Hello".to_string()).display(), "Hello");
        assert_eq!(CellValue::Number(42.5).display(), "42.5");
        assert_eq!(CellValue::Number(42.0).display(), "42");
        assert_eq!(CellValue::Bool(true).display(), "Yes");
        assert_eq!(CellValue::Bool(false).display(), "No");
        assert_eq!(CellValue::Empty.display(), "");
    }

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from("a"), CellValue::Text("a".to_string()));
        assert_eq!(CellValue::from(3), CellValue::Number(3.0));
        assert_eq!(CellValue::from(7_i64), CellValue::Number(7.0));
        assert_eq!(CellValue::from(true), CellValue::Bool(true));
        assert_eq!(CellValue::from(None::<&str>), CellValue::Empty);
        assert_eq!(CellValue::from(Some(1.5)), CellValue::Number(1.5));
    }

    #[test]
    fn test_cell_value_default_is_empty() {
        assert!(CellValue::default().is_empty());
    }

    #[test]
    fn test_contains_lowercase() {
        let cell = CellValue::from("Alice@Mail.com");
        assert!(cell.contains_lowercase("alice"));
        assert!(cell.contains_lowercase("mail.com"));
        assert!(!cell.contains_lowercase("bob"));
        assert!(CellValue::from(1234).contains_lowercase("23"));
        assert!(!CellValue::Empty.contains_lowercase("a"));
    }

    #[test]
    fn test_sort_key_null_is_least() {
        let null = CellValue::Empty.sort_key();
        assert!(null < CellValue::Bool(false).sort_key());
        assert!(null < CellValue::Number(-1e9).sort_key());
        assert!(null < CellValue::from("").sort_key());
    }

    #[test]
    fn test_sort_key_text_case_insensitive() {
        assert_eq!(
            CellValue::from("Apple").sort_key().cmp(&CellValue::from("apple").sort_key()),
            Ordering::Equal
        );
        assert!(CellValue::from("apple").sort_key() < CellValue::from("Banana").sort_key());
    }

    #[test]
    fn test_sort_key_numbers_natural_order() {
        assert!(CellValue::from(2).sort_key() < CellValue::from(10).sort_key());
        assert!(CellValue::Number(f64::NAN).sort_key() > CellValue::Number(1.0).sort_key());
    }

    proptest! {
        #[test]
        fn prop_sort_key_total_order_is_antisymmetric(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let ka = CellValue::Number(a).sort_key();
            let kb = CellValue::Number(b).sort_key();
            prop_assert_eq!(ka.cmp(&kb), kb.cmp(&ka).reverse());
        }

        #[test]
        fn prop_text_key_ignores_case(s in "[a-zA-Z]{0,12}") {
            let upper = CellValue::from(s.to_uppercase()).sort_key();
            let lower = CellValue::from(s.to_lowercase()).sort_key();
            prop_assert_eq!(upper, lower);
        }
    }
}
