//! Saving and restoring the sort across host save/restore cycles.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sort::{SortDirection, SortOrder, SortingStatus};

/// The persisted sort: column index (`-1` for none) and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSort {
    pub sorted_column: i32,
    pub direction: SortDirection,
}

impl PersistedSort {
    /// The record for an unsorted table.
    pub const UNSORTED: Self = Self {
        sorted_column: -1,
        direction: SortDirection::None,
    };

    /// The column and order to restore, if the record names one.
    ///
    /// Records naming a column without a direction (or the reverse) are
    /// malformed and yield `None`.
    pub fn target(&self) -> Option<(usize, SortOrder)> {
        if self.sorted_column == -1 {
            return None;
        }
        let column = usize::try_from(self.sorted_column).ok();
        match (column, self.direction.order()) {
            (Some(column), Some(order)) => Some((column, order)),
            _ => {
                log::warn!("ignoring malformed saved sort state {:?}", self);
                None
            }
        }
    }
}

impl Default for PersistedSort {
    fn default() -> Self {
        Self::UNSORTED
    }
}

impl From<SortingStatus> for PersistedSort {
    /// Columns that do not fit the `i32` record are saved as unsorted.
    fn from(status: SortingStatus) -> Self {
        let Some(sorted) = status.sorted_column() else {
            return Self::UNSORTED;
        };
        match i32::try_from(sorted.column) {
            Ok(sorted_column) => Self {
                sorted_column,
                direction: sorted.order.into(),
            },
            Err(_) => {
                log::warn!(
                    "sorted column {} does not fit the saved state, saving unsorted",
                    sorted.column
                );
                Self::UNSORTED
            }
        }
    }
}

/// Host framework base state bundled with the persisted sort.
///
/// The encoded layout is `base`, then `sorted_column`, then `direction`
/// (as its ordinal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState<S> {
    pub base: S,
    pub sort: PersistedSort,
}

impl<S> SavedState<S> {
    pub fn new(base: S, sort: PersistedSort) -> Self {
        Self { base, sort }
    }
}

impl<S: Serialize> SavedState<S> {
    /// Encode with `bincode`.
    ///
    /// # Errors
    ///
    /// [`TableError::Persistence`](crate::TableError::Persistence) if the
    /// base state fails to serialize.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}

impl<S: DeserializeOwned> SavedState<S> {
    /// Decode bytes produced by [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    ///
    /// [`TableError::Persistence`](crate::TableError::Persistence) for
    /// truncated or corrupt input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
