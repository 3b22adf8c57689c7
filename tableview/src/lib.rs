//! Toolkit-independent core of a sortable table widget.
//!
//! The host UI layer supplies a [`TableRenderer`] and forwards clicks; the
//! core owns the rows, computes column widths, keeps rows sorted by the
//! active column and fans signals out to listeners.

pub mod column;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod listeners;
pub mod persist;
pub mod render;
pub mod rows;
pub mod scroll;
pub mod sort;
pub mod table;

pub use column::{ColumnModel, ColumnSizing, Density, Dimension};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use table::SortableTable;

pub mod prelude {
    pub use crate::column::{ColumnModel, Density, Dimension};
    pub use crate::config::TableConfig;
    pub use crate::dispatch::ClickDispatcher;
    pub use crate::error::{Result, TableError};
    pub use crate::listeners::ListenerHandle;
    pub use crate::persist::{PersistedSort, SavedState};
    pub use crate::render::{
        PlacedCell, RenderedHeader, RenderedRow, RowBackgroundProvider, TableRenderer,
        alternating_row_colors, similar_row_color,
    };
    pub use crate::rows::RowStore;
    pub use crate::scroll::{EndlessScroll, HeaderCollapse, MoreRowsRequest};
    pub use crate::sort::{
        Comparator, SortDirection, SortIconPosition, SortIndicatorSet, SortOrder, SortState,
        SortedColumn, SortingStatus, comparator,
    };
    pub use crate::table::SortableTable;
}
