//! Table configuration.

use serde::Deserialize;

use crate::scroll::DEFAULT_ROW_THRESHOLD;
use crate::sort::{SortIconPosition, SortIndicatorSet};

/// Construction-time settings of a table.
///
/// Colors are opaque ARGB values handed through to the host unchanged.
/// Can be deserialized from declarative attributes; missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of columns of the initial weighted column model.
    pub column_count: usize,

    /// Header background color.
    pub header_color: u32,

    /// Header elevation, in host units.
    pub header_elevation: u32,

    /// Background of every data row unless a provider is installed.
    pub row_background: u32,

    /// Side of the header cell the sort indicator is drawn on.
    pub sort_icon_position: SortIconPosition,

    /// Indicator resources for the sort states.
    pub sort_indicators: SortIndicatorSet,

    /// Rows from the end at which endless scrolling asks for more rows.
    pub endless_scroll_threshold: usize,

    /// Collapse the header on scroll, toggling after this many rows.
    /// `None` keeps the header in place.
    pub header_collapse_row_offset: Option<usize>,

    /// Long-clicking a row expands it to its long-press cells; a click
    /// collapses it again.
    pub expand_on_long_press: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            column_count: 4,
            header_color: 0xFFCC_CCCC,
            header_elevation: 1,
            row_background: 0x0000_0000,
            sort_icon_position: SortIconPosition::Left,
            sort_indicators: SortIndicatorSet::DarkArrows,
            endless_scroll_threshold: DEFAULT_ROW_THRESHOLD,
            header_collapse_row_offset: None,
            expand_on_long_press: false,
        }
    }
}

impl TableConfig {
    /// Create a config with the given column count.
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            ..Default::default()
        }
    }

    pub fn header_color(mut self, color: u32) -> Self {
        self.header_color = color;
        self
    }

    pub fn header_elevation(mut self, elevation: u32) -> Self {
        self.header_elevation = elevation;
        self
    }

    pub fn row_background(mut self, color: u32) -> Self {
        self.row_background = color;
        self
    }

    pub fn sort_icon_position(mut self, position: SortIconPosition) -> Self {
        self.sort_icon_position = position;
        self
    }

    pub fn sort_indicators(mut self, indicators: SortIndicatorSet) -> Self {
        self.sort_indicators = indicators;
        self
    }

    pub fn endless_scroll_threshold(mut self, rows: usize) -> Self {
        self.endless_scroll_threshold = rows;
        self
    }

    pub fn collapse_header_on_scroll(mut self, row_offset: usize) -> Self {
        self.header_collapse_row_offset = Some(row_offset);
        self
    }

    pub fn expand_on_long_press(mut self, expand: bool) -> Self {
        self.expand_on_long_press = expand;
        self
    }
}
