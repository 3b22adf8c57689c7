//! Sorting state machine.
//!
//! The controller is either unsorted or sorted ascending/descending by one
//! column. Header activation toggles between the two directions of the
//! same column and starts ascending on any other column. Every transition
//! stably re-sorts the rows, updates the header indicators and notifies the
//! sorting-status listeners.
//!
//! The controller never raises the data-changed notification itself; the
//! methods that permute rows say so in their return value and the owning
//! table emits it.

use crate::listeners::{ListenerHandle, ListenerSet};
use crate::rows::RowStore;

use super::indicator::{HeaderSortStates, SortState};
use super::registry::{Comparator, SortRegistry, compare_in};
use super::status::{SortOrder, SortedColumn, SortingStatus};

/// Sorting-status listener.
pub type SortingStatusListener = dyn FnMut(&SortingStatus);

/// Tracks comparators, the active sort and the header indicators.
pub struct SortController<T> {
    registry: SortRegistry<T>,
    status: SortingStatus,
    /// Comparator the active sort was applied with. Recap reuses it even if
    /// the column's registered comparator is replaced afterwards.
    effective: Option<Comparator<T>>,
    header_states: HeaderSortStates,
    status_listeners: ListenerSet<SortingStatusListener>,
}

impl<T> std::fmt::Debug for SortController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortController")
            .field("registry", &self.registry)
            .field("status", &self.status)
            .field("effective", &self.effective.is_some())
            .field("header_states", &self.header_states)
            .field("status_listeners", &self.status_listeners)
            .finish()
    }
}

impl<T> Default for SortController<T> {
    fn default() -> Self {
        Self {
            registry: SortRegistry::new(),
            status: SortingStatus::unsorted(),
            effective: None,
            header_states: HeaderSortStates::new(),
            status_listeners: ListenerSet::new("sorting status"),
        }
    }
}

impl<T> SortController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------

    /// Register or remove the comparator of a column.
    ///
    /// Removing the comparator of the active sort column clears the sort;
    /// the rows are left in their current order.
    pub fn set_comparator(&mut self, column: usize, comparator: Option<Comparator<T>>) {
        let sortable = comparator.is_some();
        self.registry.set(column, comparator);

        if sortable {
            // Re-registering the active column keeps its directional indicator.
            if self.active_column() != Some(column) {
                self.header_states.set(column, SortState::Sortable);
            }
            return;
        }

        self.header_states.set(column, SortState::NotSortable);
        if self.active_column() == Some(column) {
            log::debug!("comparator of sorted column {} removed, table is unsorted", column);
            self.status = SortingStatus::unsorted();
            self.effective = None;
            self.notify_status_listeners();
        }
    }

    /// The raw (unreversed) comparator of a column.
    pub fn comparator(&self, column: usize) -> Option<&Comparator<T>> {
        self.registry.get(column)
    }

    pub fn registry(&self) -> &SortRegistry<T> {
        &self.registry
    }

    pub fn is_sortable(&self, column: usize) -> bool {
        self.registry.is_sortable(column)
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn status(&self) -> SortingStatus {
        self.status
    }

    /// Indicator state of a header column.
    pub fn header_state(&self, column: usize) -> SortState {
        self.header_states.get(column)
    }

    fn active_column(&self) -> Option<usize> {
        self.status.sorted_column().map(|s| s.column)
    }

    /// Direction the next activation of `column` sorts in.
    pub fn next_order(&self, column: usize) -> SortOrder {
        match self.status.sorted_column() {
            Some(SortedColumn { column: c, order }) if c == column => order.toggled(),
            _ => SortOrder::Ascending,
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Header activation: toggle the direction of `column` and re-sort.
    ///
    /// Returns `None` and leaves everything untouched when the column has
    /// no comparator.
    pub fn activate(&mut self, column: usize, rows: &mut RowStore<T>) -> Option<SortedColumn> {
        if !self.registry.is_sortable(column) {
            log::info!(
                "Unable to sort column with index {}. Reason: no comparator set for this column.",
                column
            );
            return None;
        }
        let order = self.next_order(column);
        self.sort(column, order, rows)
    }

    /// Sort by `column` in `order` regardless of the current state.
    pub fn sort(
        &mut self,
        column: usize,
        order: SortOrder,
        rows: &mut RowStore<T>,
    ) -> Option<SortedColumn> {
        let Some(comparator) = self.registry.get(column) else {
            log::info!(
                "Unable to sort column with index {}. Reason: no comparator set for this column.",
                column
            );
            return None;
        };

        let comparator = comparator.clone();
        rows.sort_by(|a, b| compare_in(&comparator, order, a, b));
        log::debug!("sorted column {} {:?} ({} rows)", column, order, rows.len());

        self.status = SortingStatus::sorted(column, order);
        self.effective = Some(comparator);
        self.header_states.reset();
        self.header_states.set(column, order.into());
        self.notify_status_listeners();

        Some(SortedColumn { column, order })
    }

    /// Sort the rows with an arbitrary comparator. The sorting status and
    /// header indicators are not changed.
    pub fn sort_with(&self, comparator: &Comparator<T>, rows: &mut RowStore<T>) {
        rows.sort_by(|a, b| comparator(a, b));
    }

    /// Re-apply the active sort to changed rows without toggling.
    ///
    /// Uses the comparator the active sort was applied with, not the one
    /// currently registered for the column. Returns `true` if the rows were
    /// re-sorted.
    pub fn recap(&self, rows: &mut RowStore<T>) -> bool {
        let Some(SortedColumn { column, order }) = self.status.sorted_column() else {
            return false;
        };
        let Some(comparator) = &self.effective else {
            return false;
        };
        log::debug!("recapping sort of column {} {:?}", column, order);
        rows.sort_by(|a, b| compare_in(comparator, order, a, b));
        true
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    pub fn add_status_listener(&mut self, listener: Box<SortingStatusListener>) -> ListenerHandle {
        self.status_listeners.add(listener)
    }

    pub fn remove_status_listener(&mut self, handle: ListenerHandle) -> bool {
        self.status_listeners.remove(handle)
    }

    fn notify_status_listeners(&mut self) {
        let status = self.status;
        self.status_listeners.dispatch(|listener| listener(&status));
    }
}
