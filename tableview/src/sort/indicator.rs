//! Header sort indicators.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::status::SortOrder;

/// Indicator state of one header column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortState {
    /// No comparator; the header is not interactive.
    #[default]
    NotSortable,
    /// Sortable but not the active sort column.
    Sortable,
    SortedAscending,
    SortedDescending,
}

impl From<SortOrder> for SortState {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Ascending => SortState::SortedAscending,
            SortOrder::Descending => SortState::SortedDescending,
        }
    }
}

/// Per-column indicator states. Columns never set are `NotSortable`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSortStates {
    states: HashMap<usize, SortState>,
}

impl HeaderSortStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a column.
    pub fn get(&self, column: usize) -> SortState {
        self.states.get(&column).copied().unwrap_or_default()
    }

    pub fn set(&mut self, column: usize, state: SortState) {
        self.states.insert(column, state);
    }

    /// Demote every sorted column to `Sortable`.
    pub fn reset(&mut self) {
        for state in self.states.values_mut() {
            if *state != SortState::NotSortable {
                *state = SortState::Sortable;
            }
        }
    }
}

// =============================================================================
// Indicator providers
// =============================================================================

/// Maps an indicator state to an opaque resource the host draws.
///
/// `None` means "draw nothing" and hides the indicator slot.
pub trait SortIndicatorProvider {
    fn indicator(&self, state: SortState) -> Option<&str>;
}

/// Built-in indicator sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortIndicatorSet {
    #[default]
    DarkArrows,
    BrightArrows,
}

impl SortIndicatorProvider for SortIndicatorSet {
    fn indicator(&self, state: SortState) -> Option<&str> {
        match (self, state) {
            (_, SortState::NotSortable) => None,
            (SortIndicatorSet::DarkArrows, SortState::Sortable) => Some("ic_dark_sortable"),
            (SortIndicatorSet::DarkArrows, SortState::SortedAscending) => Some("ic_dark_sorted_asc"),
            (SortIndicatorSet::DarkArrows, SortState::SortedDescending) => {
                Some("ic_dark_sorted_desc")
            }
            (SortIndicatorSet::BrightArrows, SortState::Sortable) => Some("ic_light_sortable"),
            (SortIndicatorSet::BrightArrows, SortState::SortedAscending) => {
                Some("ic_light_sorted_asc")
            }
            (SortIndicatorSet::BrightArrows, SortState::SortedDescending) => {
                Some("ic_light_sorted_desc")
            }
        }
    }
}

/// Side of the header cell the indicator is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortIconPosition {
    #[default]
    Left,
    Right,
}
