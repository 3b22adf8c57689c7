//! Listener registration with handles and failure isolation.
//!
//! Every signal the table emits fans out to a [`ListenerSet`]. Adding a
//! listener returns a [`ListenerHandle`] which is the only way to remove it
//! again, so registering the same closure twice yields two independent
//! registrations.
//!
//! A listener that panics is caught at the dispatch boundary, logged, and
//! the remaining listeners are still notified.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{TableError, extract_panic_message};

/// Token identifying one listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(usize);

impl ListenerHandle {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__listener_{}", self.0)
    }
}

/// An ordered set of boxed listeners of one signal.
///
/// `L` is the unsized listener type, e.g. `dyn FnMut(usize)`.
pub struct ListenerSet<L: ?Sized> {
    /// Signal name used in diagnostics.
    name: &'static str,
    listeners: Vec<(ListenerHandle, Box<L>)>,
}

impl<L: ?Sized> std::fmt::Debug for ListenerSet<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("name", &self.name)
            .field("len", &self.listeners.len())
            .finish()
    }
}

impl<L: ?Sized> ListenerSet<L> {
    /// Create an empty set for the named signal.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            listeners: Vec::new(),
        }
    }

    /// Register a listener.
    pub fn add(&mut self, listener: Box<L>) -> ListenerHandle {
        let handle = ListenerHandle::new();
        self.listeners.push((handle, listener));
        handle
    }

    /// Remove a registration. Returns `false` if the handle is unknown.
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| *h != handle);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Call `notify` for every listener in registration order.
    ///
    /// Returns the results of the listeners that completed; panicking
    /// listeners are logged and skipped.
    pub fn dispatch<R>(&mut self, mut notify: impl FnMut(&mut L) -> R) -> Vec<R> {
        let mut results = Vec::with_capacity(self.listeners.len());
        for (handle, listener) in &mut self.listeners {
            match catch_unwind(AssertUnwindSafe(|| notify(listener.as_mut()))) {
                Ok(result) => results.push(result),
                Err(panic) => {
                    let failure = TableError::ListenerFailure {
                        listener: self.name,
                        message: extract_panic_message(&panic),
                    };
                    log::error!("{} ({}), continuing dispatch", failure, handle);
                }
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique_per_registration() {
        let mut set: ListenerSet<dyn FnMut(usize)> = ListenerSet::new("test");
        let a = set.add(Box::new(|_| {}));
        let b = set.add(Box::new(|_| {}));
        assert_ne!(a, b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_unknown_handle() {
        let mut set: ListenerSet<dyn FnMut(usize)> = ListenerSet::new("test");
        let handle = set.add(Box::new(|_| {}));
        assert!(set.remove(handle));
        assert!(!set.remove(handle));
        assert!(set.is_empty());
    }

    #[test]
    fn test_dispatch_skips_panicking_listener_result() {
        let mut set: ListenerSet<dyn FnMut(usize) -> usize> = ListenerSet::new("test");
        set.add(Box::new(|x| x + 1));
        set.add(Box::new(|_| panic!("boom")));
        set.add(Box::new(|x| x * 10));

        let results = set.dispatch(|l| l(3));
        assert_eq!(results, vec![4, 30]);
    }
}
