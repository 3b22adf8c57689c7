//! Per-column comparators.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

use super::status::SortOrder;

/// Ordering over two rows, used to sort by one column.
pub type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Wrap a closure as a [`Comparator`].
pub fn comparator<T>(f: impl Fn(&T, &T) -> Ordering + 'static) -> Comparator<T> {
    Rc::new(f)
}

/// Apply `comparator` in the given direction.
pub fn compare_in<T>(comparator: &Comparator<T>, order: SortOrder, a: &T, b: &T) -> Ordering {
    match order {
        SortOrder::Ascending => comparator(a, b),
        SortOrder::Descending => comparator(a, b).reverse(),
    }
}

/// Maps column index to its comparator. A column is sortable exactly when
/// it has one.
pub struct SortRegistry<T> {
    comparators: HashMap<usize, Comparator<T>>,
}

impl<T> std::fmt::Debug for SortRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut columns: Vec<_> = self.comparators.keys().copied().collect();
        columns.sort_unstable();
        f.debug_struct("SortRegistry")
            .field("sortable_columns", &columns)
            .finish()
    }
}

impl<T> Default for SortRegistry<T> {
    fn default() -> Self {
        Self {
            comparators: HashMap::new(),
        }
    }
}

impl<T> SortRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or, with `None`, remove the comparator of a column.
    ///
    /// Returns the previous comparator.
    pub fn set(&mut self, column: usize, comparator: Option<Comparator<T>>) -> Option<Comparator<T>> {
        match comparator {
            Some(comparator) => self.comparators.insert(column, comparator),
            None => self.comparators.remove(&column),
        }
    }

    /// The raw (ascending) comparator of a column.
    pub fn get(&self, column: usize) -> Option<&Comparator<T>> {
        self.comparators.get(&column)
    }

    pub fn is_sortable(&self, column: usize) -> bool {
        self.comparators.contains_key(&column)
    }

    /// Sortable column indices in ascending order.
    pub fn sortable_columns(&self) -> Vec<usize> {
        let mut columns: Vec<_> = self.comparators.keys().copied().collect();
        columns.sort_unstable();
        columns
    }
}
