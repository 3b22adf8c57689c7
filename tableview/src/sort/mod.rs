//! Column sorting: comparators, the sort state machine and header
//! indicators.

mod controller;
mod indicator;
mod recap;
mod registry;
mod status;

pub use controller::{SortController, SortingStatusListener};
pub use indicator::{
    HeaderSortStates, SortIconPosition, SortIndicatorProvider, SortIndicatorSet, SortState,
};
pub use recap::RecapGuard;
pub use registry::{Comparator, SortRegistry, compare_in, comparator};
pub use status::{SortDirection, SortOrder, SortedColumn, SortingStatus};
