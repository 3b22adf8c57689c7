//! Sort direction and sorting status types.

use serde::{Deserialize, Serialize};

/// Direction of an applied sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Direction as reported to listeners and persisted, including "no sort".
///
/// Persisted as its ordinal: `None = 0`, `Ascending = 1`, `Descending = 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// The applied order, if any.
    pub fn order(self) -> Option<SortOrder> {
        match self {
            SortDirection::None => None,
            SortDirection::Ascending => Some(SortOrder::Ascending),
            SortDirection::Descending => Some(SortOrder::Descending),
        }
    }
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Ascending => SortDirection::Ascending,
            SortOrder::Descending => SortDirection::Descending,
        }
    }
}

/// The column the table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortedColumn {
    pub column: usize,
    pub order: SortOrder,
}

/// Which column the table is currently sorted by, if any.
///
/// A column is present exactly when the direction is not
/// [`SortDirection::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortingStatus {
    sorted: Option<SortedColumn>,
}

impl SortingStatus {
    /// The unsorted status.
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub(crate) fn sorted(column: usize, order: SortOrder) -> Self {
        Self {
            sorted: Some(SortedColumn { column, order }),
        }
    }

    /// Check if a column sort is active.
    pub fn is_sorted(&self) -> bool {
        self.sorted.is_some()
    }

    /// The active sort, if any.
    pub fn sorted_column(&self) -> Option<SortedColumn> {
        self.sorted
    }

    /// Index of the sorted column, or `-1` when unsorted or past `i32::MAX`.
    pub fn sorted_column_index(&self) -> i32 {
        self.sorted
            .and_then(|s| i32::try_from(s.column).ok())
            .unwrap_or(-1)
    }

    /// The current direction.
    pub fn direction(&self) -> SortDirection {
        self.sorted
            .map(|s| s.order.into())
            .unwrap_or(SortDirection::None)
    }
}
