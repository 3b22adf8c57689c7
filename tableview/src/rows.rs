//! Row storage with change notification.

use std::cmp::Ordering;

use crate::error::{Result, TableError};
use crate::listeners::{ListenerHandle, ListenerSet};

/// Ordered rows of one table.
///
/// Each table owns its rows; data handed in by the host is moved or cloned
/// into the store and never shared with other tables.
pub struct RowStore<T> {
    rows: Vec<T>,
    observers: ListenerSet<dyn FnMut()>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for RowStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowStore")
            .field("rows", &self.rows)
            .field("observers", &self.observers)
            .finish()
    }
}

impl<T> Default for RowStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> RowStore<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            observers: ListenerSet::new("data changed"),
        }
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// Like [`get`](Self::get) but reports an out-of-range index.
    ///
    /// # Errors
    ///
    /// [`TableError::IndexOutOfRange`] when `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T> {
        self.rows.get(index).ok_or(TableError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Replace all rows, returning the previous ones.
    pub fn replace(&mut self, rows: Vec<T>) -> Vec<T> {
        std::mem::replace(&mut self.rows, rows)
    }

    /// Mutable access for in-place edits by the host. Follow up with a
    /// change notification.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.rows
    }

    /// Stable in-place sort.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.rows.sort_by(compare);
    }

    // -------------------------------------------------------------------------
    // Notification
    // -------------------------------------------------------------------------

    /// Register a data-changed observer.
    pub fn add_observer(&mut self, observer: Box<dyn FnMut()>) -> ListenerHandle {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, handle: ListenerHandle) -> bool {
        self.observers.remove(handle)
    }

    /// Notify all observers that the row contents changed.
    pub fn notify_changed(&mut self) {
        self.observers.dispatch(|observer| observer());
    }
}

impl<T> FromIterator<T> for RowStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
