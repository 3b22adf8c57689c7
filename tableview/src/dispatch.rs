//! Click signal fan-out.

use crate::listeners::{ListenerHandle, ListenerSet};

/// Header click listener, called with the column index.
pub type HeaderClickListener = dyn FnMut(usize);

/// Row click listener, called with the row index and row.
pub type RowClickListener<T> = dyn FnMut(usize, &T);

/// Row long-click listener. Returns `true` when it consumed the click.
pub type RowLongClickListener<T> = dyn FnMut(usize, &T) -> bool;

/// Listener sets for header clicks, row clicks and row long-clicks.
pub struct ClickDispatcher<T> {
    header: ListenerSet<HeaderClickListener>,
    row: ListenerSet<RowClickListener<T>>,
    row_long: ListenerSet<RowLongClickListener<T>>,
}

impl<T> std::fmt::Debug for ClickDispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickDispatcher")
            .field("header", &self.header)
            .field("row", &self.row)
            .field("row_long", &self.row_long)
            .finish()
    }
}

impl<T> Default for ClickDispatcher<T> {
    fn default() -> Self {
        Self {
            header: ListenerSet::new("header click"),
            row: ListenerSet::new("row click"),
            row_long: ListenerSet::new("row long-click"),
        }
    }
}

impl<T> ClickDispatcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    pub fn add_header_listener(&mut self, listener: Box<HeaderClickListener>) -> ListenerHandle {
        self.header.add(listener)
    }

    pub fn remove_header_listener(&mut self, handle: ListenerHandle) -> bool {
        self.header.remove(handle)
    }

    pub fn add_row_listener(&mut self, listener: Box<RowClickListener<T>>) -> ListenerHandle {
        self.row.add(listener)
    }

    pub fn remove_row_listener(&mut self, handle: ListenerHandle) -> bool {
        self.row.remove(handle)
    }

    pub fn add_row_long_listener(
        &mut self,
        listener: Box<RowLongClickListener<T>>,
    ) -> ListenerHandle {
        self.row_long.add(listener)
    }

    pub fn remove_row_long_listener(&mut self, handle: ListenerHandle) -> bool {
        self.row_long.remove(handle)
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Notify header listeners.
    pub fn header_clicked(&mut self, column: usize) {
        self.header.dispatch(|listener| listener(column));
    }

    /// Notify row click listeners.
    pub fn row_clicked(&mut self, row_index: usize, row: &T) {
        self.row.dispatch(|listener| listener(row_index, row));
    }

    /// Notify long-click listeners. Returns whether any listener consumed
    /// the click; every listener is called either way.
    pub fn row_long_clicked(&mut self, row_index: usize, row: &T) -> bool {
        self.row_long
            .dispatch(|listener| listener(row_index, row))
            .into_iter()
            .fold(false, |consumed, result| consumed | result)
    }
}
