//! Error types for the table core.

use std::any::Any;

use thiserror::Error;

/// Sizing strategy of a column model, used in mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingKind {
    /// Widths are derived from relative weights.
    Weighted,
    /// Widths are explicit pixel values.
    Fixed,
}

impl std::fmt::Display for SizingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingKind::Weighted => write!(f, "weighted"),
            SizingKind::Fixed => write!(f, "fixed-width"),
        }
    }
}

/// Errors produced by the table core.
///
/// None of these are fatal. Most are recovered where they occur and only
/// logged; setters on the column model and saved state decoding return them.
#[derive(Debug, Error)]
pub enum TableError {
    /// A sort was requested on a column without a comparator.
    #[error("column {column} is not sortable: no comparator set")]
    NotSortable { column: usize },

    /// A listener panicked while being notified.
    #[error("{listener} listener panicked: {message}")]
    ListenerFailure {
        listener: &'static str,
        message: String,
    },

    /// A row or column index outside the current bounds.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Column weights must be at least 1.
    #[error("column {column}: weight must be at least 1")]
    InvalidWeight { column: usize },

    /// A setter for one sizing strategy was used on a model of the other.
    #[error("column model is {found}, expected {expected}")]
    SizingMismatch {
        expected: SizingKind,
        found: SizingKind,
    },

    /// Saved state could not be encoded or decoded.
    #[error("saved state: {0}")]
    Persistence(#[from] bincode::Error),
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Extract a human-readable message from a panic payload.
///
/// Panics can contain either `&str` or `String` payloads. This function
/// attempts to extract either, falling back to a generic message.
pub fn extract_panic_message(panic: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
